//! VentureCap records: capital providers, funds, fund performance and
//! commitment deals.

use crate::value::{NumberOrText, RecordId, empty_as_none, null_as_empty};
use serde::{Deserialize, Serialize};

/// Two-level limited partner classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitedPartnerType {
    /// Top-level category.
    pub lvl0: String,
    /// Sub-category.
    pub lvl1: String,
}

/// Two-level fund classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundType {
    /// Top-level category.
    pub lvl0: String,
    /// Sub-category.
    pub lvl1: String,
}

/// A fund manager, limited partner or family office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalProvider {
    /// Provider id.
    pub id: i64,
    /// Registry id.
    #[serde(default)]
    pub registration_number: Option<String>,
    /// Display name.
    pub name: String,
    /// Categories, e.g. "Fund Manager".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: Vec<String>,
    /// Provider types.
    #[serde(default, rename = "type", deserialize_with = "null_as_empty")]
    pub kind: Vec<String>,
    /// Headquarters.
    #[serde(default)]
    pub hq: Option<String>,
    /// Preferred investment locations.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub preferred_location: Vec<String>,
    /// Preferred deal types.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub preferred_deal_type: Vec<String>,
    /// Preferred fund types.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub preferred_fund_type: Vec<String>,
    /// Preferred sectors.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub preferred_sector: Vec<String>,
    /// Preferred themes.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub preferred_theme: Vec<String>,
}

impl CapitalProvider {
    /// Whether the provider is listed under `category` (case-insensitive).
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c.eq_ignore_ascii_case(category))
    }
}

/// A fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    /// Fund id.
    pub id: RecordId,
    /// Id in the Alternatives dataset.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub alternatives_id: Option<i64>,
    /// Registry id.
    #[serde(default)]
    pub registration_number: Option<String>,
    /// Fund name.
    pub name: String,
    /// Manager id.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub fund_manager_id: Option<i64>,
    /// Manager name.
    #[serde(default)]
    pub fund_manager: Option<String>,
    /// Vintage year.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub vintage_year: Option<f64>,
    /// Fund classification.
    #[serde(default, rename = "type")]
    pub fund_type: Option<FundType>,
    /// Flattened fund classification.
    #[serde(default, rename = "singleFundType")]
    pub single_fund_type: Option<String>,
    /// Fund size.
    #[serde(default)]
    pub size: Option<f64>,
    /// Fundraising status.
    #[serde(default)]
    pub status: Option<String>,
    /// Net IRR.
    #[serde(default)]
    pub irr: Option<f64>,
    /// Net multiple (TVPI).
    #[serde(default)]
    pub net_multiple: Option<f64>,
    /// Distributions to paid-in capital.
    #[serde(default)]
    pub dpi: Option<f64>,
    /// Residual value to paid-in capital.
    #[serde(default)]
    pub rvpi: Option<f64>,
    /// Latest reporting quarter.
    #[serde(default)]
    pub last_report_quarter: Option<String>,
    /// Reporting year.
    #[serde(default)]
    pub year: Option<NumberOrText>,
    /// Reporting quarter.
    #[serde(default)]
    pub quarter: Option<String>,
}

impl Fund {
    /// Vintage year as a whole year.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn vintage(&self) -> Option<i32> {
        self.vintage_year
            .filter(|y| y.is_finite())
            .map(|y| y.round() as i32)
    }
}

/// A fund performance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundPerformance {
    /// Record id.
    pub id: RecordId,
    /// Fund the report belongs to.
    pub fund_id: i64,
    /// Report source.
    #[serde(default)]
    pub source: Option<String>,
    /// Source name.
    #[serde(default)]
    pub source_name: Option<String>,
    /// Role the source acts in.
    #[serde(default)]
    pub capital_provider_source_acting_as: Option<String>,
    /// Source id.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub source_id: Option<i64>,
    /// IRR.
    #[serde(default)]
    pub irr: Option<f64>,
    /// Distributions to paid-in capital.
    #[serde(default)]
    pub dpi: Option<f64>,
    /// Residual value to paid-in capital.
    #[serde(default)]
    pub rvpi: Option<f64>,
    /// Net multiple.
    #[serde(default)]
    pub net_multiple: Option<f64>,
    /// Share redemption.
    #[serde(default)]
    pub share_redemption: Option<NumberOrText>,
    /// Committed capital.
    #[serde(default, rename = "commited_capital")]
    pub committed_capital: Option<f64>,
    /// Profit.
    #[serde(default)]
    pub profit: Option<f64>,
    /// Retained earnings.
    #[serde(default)]
    pub retained_earnings: Option<f64>,
    /// Dividend.
    #[serde(default)]
    pub dividend: Option<NumberOrText>,
    /// Net assets.
    #[serde(default)]
    pub net_assets: Option<f64>,
    /// Reporting quarter.
    #[serde(default)]
    pub quarter: Option<String>,
    /// Reporting year.
    #[serde(default)]
    pub year: Option<NumberOrText>,
    /// Link to the source report.
    #[serde(default)]
    pub report_path: Option<String>,
    /// Reporting period label.
    #[serde(default)]
    pub reporting_period: Option<String>,
}

/// A limited partner's commitment to a fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitmentDeal {
    /// Deal id.
    pub id: RecordId,
    /// Id in the Alternatives dataset.
    pub alternatives_id: i64,
    /// Limited partner id.
    pub limited_partner_id: i64,
    /// Limited partner name.
    pub limited_partner_name: String,
    /// Limited partner classification.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub limited_partner_type: Vec<LimitedPartnerType>,
    /// Fund id.
    pub fund_id: i64,
    /// Fund name.
    pub fund_name: String,
    /// Fund vintage year.
    #[serde(default)]
    pub vintage_year: Option<f64>,
    /// Manager id.
    pub fund_manager_id: i64,
    /// Manager name.
    pub fund_manager_name: String,
    /// Fund type.
    #[serde(default)]
    pub fund_type: Option<String>,
    /// Commitment size.
    #[serde(default)]
    pub size: Option<f64>,
    /// Deal category.
    #[serde(default)]
    pub category: Option<String>,
    /// Deal date.
    #[serde(default)]
    pub deal_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capital_provider_lists_default() {
        let provider: CapitalProvider = serde_json::from_str(
            r#"{"id": 11, "name": "Acme Capital", "category": ["Fund Manager"], "type": null}"#,
        )
        .unwrap();
        assert!(provider.has_category("fund manager"));
        assert!(provider.kind.is_empty());
        assert!(provider.preferred_location.is_empty());
    }

    #[test]
    fn test_fund_lenient_ids() {
        let json = r#"{"id": "42", "alternatives_id": "", "name": "Growth I",
            "fund_manager_id": 7, "vintage_year": 2021, "singleFundType": "Buyout",
            "type": {"lvl0": "Private Equity", "lvl1": "Buyout"}, "year": "2023"}"#;
        let fund: Fund = serde_json::from_str(json).unwrap();
        assert_eq!(fund.id.as_i64(), Some(42));
        assert_eq!(fund.alternatives_id, None);
        assert_eq!(fund.fund_manager_id, Some(7));
        assert_eq!(fund.vintage(), Some(2021));
        assert_eq!(fund.single_fund_type.as_deref(), Some("Buyout"));
        assert_eq!(fund.fund_type.unwrap().lvl1, "Buyout");
    }

    #[test]
    fn test_fund_performance_mixed_scalars() {
        let json = r#"{"id": 3, "fund_id": 42, "source_id": "", "dividend": "n/a",
            "share_redemption": 1.5, "commited_capital": 1000000, "year": 2022}"#;
        let perf: FundPerformance = serde_json::from_str(json).unwrap();
        assert_eq!(perf.id, RecordId::Int(3));
        assert_eq!(perf.source_id, None);
        assert_eq!(perf.dividend, Some(NumberOrText::Text("n/a".into())));
        assert_eq!(perf.share_redemption.and_then(|v| v.as_f64()), Some(1.5));
        assert_eq!(perf.committed_capital, Some(1_000_000.0));
    }

    #[test]
    fn test_commitment_deal() {
        let json = r#"{"id": "d-1", "alternatives_id": 5, "limited_partner_id": 8,
            "limited_partner_name": "Pension", "fund_id": 42, "fund_name": "Growth I",
            "fund_manager_id": 7, "fund_manager_name": "Acme",
            "limited_partner_type": [{"lvl0": "Institutional", "lvl1": "Pension"}]}"#;
        let deal: CommitmentDeal = serde_json::from_str(json).unwrap();
        assert_eq!(deal.id.to_string(), "d-1");
        assert_eq!(deal.limited_partner_type.len(), 1);
        assert_eq!(deal.size, None);
    }
}
