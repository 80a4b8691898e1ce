//! Blocking client against a mock server.

use altpe_client::{AltPeConfig, Page, blocking::AltPeClient, params::CommitmentDealQuery};
use httpmock::prelude::*;
use serde_json::json;

#[test]
fn test_blocking_client_round_trip() {
    let server = MockServer::start();
    let token = server.mock(|when, then| {
        when.method(POST).path("/api/v2/oauth/token");
        then.status(200).json_body(json!({"token": "t"}));
    });
    let deals = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/commitment-deals/")
            .query_param("order_by", "fund_manager_name")
            .query_param("fund_id", "31");
        then.status(200).json_body(json!({
            "total_records": 1,
            "limit": 100,
            "offset": 0,
            "data": [{
                "id": "d-1",
                "alternatives_id": 5,
                "limited_partner_id": 9,
                "limited_partner_name": "Temasek",
                "limited_partner_type": [],
                "fund_id": 31,
                "fund_name": "Fund III",
                "vintage_year": 2019,
                "fund_manager_id": 4,
                "fund_manager_name": "Vertex",
                "size": 250000000.0
            }]
        }));
    });

    let config = AltPeConfig::default()
        .with_credentials("id", "secret")
        .with_base_url(server.base_url());
    let client = AltPeClient::new(&config).unwrap();

    let page = client
        .commitment_deals(&CommitmentDealQuery::default().fund_id(31), Page::default())
        .unwrap();
    let again = client
        .commitment_deals(&CommitmentDealQuery::default().fund_id(31), Page::default())
        .unwrap();

    assert_eq!(token.calls(), 1);
    assert_eq!(deals.calls(), 2);
    assert_eq!(page, again);
    assert_eq!(page.data[0].limited_partner_name, "Temasek");
    assert_eq!(page.data[0].vintage_year, Some(2019.0));
}
