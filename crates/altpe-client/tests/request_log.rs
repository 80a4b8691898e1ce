//! Request logging against a mock server.

use altpe_client::{AltPeClient, AltPeConfig, Page, params::PeopleQuery, request_log::REDACTED};
use chrono::Utc;
use httpmock::prelude::*;
use serde_json::{Value, json};

fn read_entries(dir: &std::path::Path) -> Vec<Value> {
    let file = dir.join(format!("requests-{}.jsonl", Utc::now().format("%Y-%m-%d")));
    std::fs::read_to_string(file)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_exchanges_are_logged_and_redacted() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v2/oauth/token");
        then.status(200).json_body(json!({"token": "super-secret-token"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/directors");
        then.status(200).json_body(json!({
            "data": {"total_records": 0, "no_of_pages": 0, "limit": 5, "offset": 0, "data": []}
        }));
    });

    let dir = tempfile::tempdir().unwrap();
    let config = AltPeConfig::default()
        .with_credentials("log-id", "log-secret")
        .with_base_url(server.base_url())
        .with_request_log(dir.path());
    let client = AltPeClient::new(&config).unwrap();

    client
        .directors(&PeopleQuery::default().query("tan"), Page::first(5))
        .await
        .unwrap();

    let entries = read_entries(dir.path());
    assert_eq!(entries.len(), 2);

    let token = &entries[0];
    assert_eq!(token["method"], "POST");
    assert_eq!(token["request"]["data"]["client_id"], REDACTED);
    assert_eq!(token["request"]["data"]["client_secret"], REDACTED);
    assert_eq!(token["response"]["json"]["token"], REDACTED);

    let list = &entries[1];
    assert_eq!(list["method"], "GET");
    assert!(list["url"].as_str().unwrap().ends_with("/api/v2/directors"));
    assert_eq!(list["request"]["params"]["query"], "tan");
    assert_eq!(list["request"]["params"]["limit"], "5");
    assert_eq!(list["request"]["data"], json!({}));
    assert_eq!(list["request"]["headers"]["Authorization"], REDACTED);
    assert_eq!(list["response"]["status_code"], 200);
    assert_eq!(list["response"]["json"]["data"]["total_records"], 0);

    let raw = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
        .collect::<String>();
    assert!(!raw.contains("super-secret-token"));
    assert!(!raw.contains("log-secret"));
}

#[tokio::test]
async fn test_logging_is_off_by_default() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v2/oauth/token");
        then.status(200).json_body(json!({"token": "t"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/people/2");
        then.status(200).json_body(json!({
            "data": {"id": 2, "first_name": "Ada", "last_name": "Lim"}
        }));
    });

    let dir = tempfile::tempdir().unwrap();
    let mut config = AltPeConfig::default()
        .with_credentials("id", "secret")
        .with_base_url(server.base_url());
    config.log_dir = dir.path().to_path_buf();

    let person = AltPeClient::new(&config).unwrap().person(2).await.unwrap();
    assert_eq!(person.full_name(), "Ada Lim");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
