//! Company records and company financials.

use crate::value::{empty_as_none, lenient_flag, null_as_empty};
use serde::{Deserialize, Serialize};

/// Industry sector tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    /// Sector id.
    pub id: u32,
    /// Sector name.
    pub name: String,
}

/// Investment theme tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme id.
    pub id: u32,
    /// Theme name.
    pub name: String,
}

/// Founder as listed on a company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Founder {
    /// Founder id.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// LinkedIn profile.
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Stable hash of the name.
    #[serde(default)]
    pub hashed_name: Option<String>,
}

/// Director as listed on a company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    /// Director id.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// LinkedIn profile.
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Stable hash of the name.
    #[serde(default)]
    pub hashed_name: Option<String>,
}

/// Auditor as listed on a company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auditor {
    /// Auditor id.
    pub id: i64,
    /// Firm name.
    pub name: String,
    /// Stable hash of the name.
    #[serde(default)]
    pub hashed_name: Option<String>,
}

/// Investor as listed on a company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investor {
    /// Investor name.
    pub name: String,
    /// Amount invested, as formatted by the server.
    pub amount_invested: String,
    /// Currency of `amount_invested`.
    pub currency: String,
}

/// A company record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Company id.
    pub id: i64,
    /// Unique entity number (registry id).
    #[serde(default)]
    pub uen: Option<String>,
    /// Other registry identifiers.
    #[serde(default)]
    pub additional_ids: Option<Vec<String>>,
    /// Company name.
    pub name: String,
    /// Business description.
    #[serde(default)]
    pub description: Option<String>,
    /// Headquarters location.
    #[serde(default, rename = "headquaters")]
    pub headquarters: Option<String>,
    /// Company website.
    #[serde(default)]
    pub website: Option<String>,
    /// Incorporation date.
    #[serde(default)]
    pub date_incorporated: Option<String>,
    /// Current investment stage.
    #[serde(default)]
    pub investment_stage: Option<String>,
    /// Total equity funding raised.
    #[serde(default)]
    pub total_equity_funding: Option<f64>,
    /// Valuation at the last round.
    #[serde(default)]
    pub last_valuation: Option<f64>,
    /// Size of the last round.
    #[serde(default)]
    pub size_of_last_round: Option<f64>,
    /// Date of the last round.
    #[serde(default)]
    pub date_of_last_round: Option<String>,
    /// Latest reported revenue.
    #[serde(default)]
    pub revenue: Option<f64>,
    /// Financial year end.
    #[serde(default)]
    pub financial_year_end: Option<String>,
    /// Revenue growth.
    #[serde(default)]
    pub revenue_growth: Option<f64>,
    /// Liquidation status.
    #[serde(default)]
    pub liquidation: Option<String>,
    /// Liquidation details.
    #[serde(default)]
    pub liquidation_details: Option<String>,
    /// Earnings before interest and tax.
    #[serde(default)]
    pub ebit: Option<f64>,
    /// Total liabilities.
    #[serde(default)]
    pub liabilities: Option<f64>,
    /// Operating status.
    #[serde(default)]
    pub status: Option<String>,
    /// Whether the company is currently raising.
    #[serde(default)]
    pub company_raising: Option<String>,
    /// Exit type, if exited.
    #[serde(default)]
    pub exit_type: Option<String>,
    /// Whether the company has a female founder.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub female_founder: Option<bool>,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Sector tags.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sectors: Vec<Sector>,
    /// Theme tags.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub themes: Vec<Theme>,
    /// Founders.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub founders: Vec<Founder>,
    /// Directors.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub directors: Vec<Director>,
    /// Auditors.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub auditors: Vec<Auditor>,
    /// Investors.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub investors: Vec<Investor>,
    /// Audited statements, in whatever shape the server returns.
    #[serde(default)]
    pub financial_statements_audited: Option<serde_json::Value>,
    /// Extracted statements, in whatever shape the server returns.
    #[serde(default)]
    pub financial_statements_extracted: Option<serde_json::Value>,
}

impl Company {
    /// Names of the sectors this company is tagged with.
    pub fn sector_names(&self) -> impl Iterator<Item = &str> {
        self.sectors.iter().map(|s| s.name.as_str())
    }
}

/// Aggregated funding per share class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funding {
    /// Quarter of investment.
    pub investment_quarter: f64,
    /// First investment date.
    pub first_investment_date: String,
    /// Last investment date.
    pub last_investment_date: String,
    /// Share class id.
    pub share_class_id: f64,
    /// Round series.
    pub series: String,
    /// Total funding in the round.
    pub total_funding: f64,
    /// Post-money valuation.
    pub post_money_valuation: f64,
    /// Pre-money valuation.
    pub pre_money_valuation: f64,
    /// Highest price paid per share.
    pub max_share_price_paid: f64,
    /// Average price paid per share.
    pub average_share_price_paid: f64,
    /// Shares allocated in the round.
    pub total_shares_allocated: f64,
}

/// Funding reported in news rather than filings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalFunding {
    /// Quarter of investment.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub investment_quarter: Option<f64>,
    /// Date of investment.
    #[serde(default)]
    pub investment_date: Option<String>,
    /// Round series.
    pub series: String,
    /// Amount raised.
    pub funding: f64,
    /// Post-money valuation.
    pub post_money_valuation: f64,
    /// Currency of the amounts.
    #[serde(default)]
    pub currency: Option<String>,
    /// Price per share.
    #[serde(default)]
    pub price_share: Option<f64>,
    /// Source article.
    pub newslink: String,
    /// Source article title.
    pub title: String,
}

/// Revenue for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    /// Revenue.
    pub revenue: f64,
    /// Earnings before interest and tax.
    pub ebit: f64,
    /// Reporting quarter.
    pub revenue_quarter: f64,
    /// Reporting year.
    pub revenue_year: f64,
}

/// Shareholder position in a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shareholder {
    /// Shareholder name.
    pub investor_name: String,
    /// Whether the shareholder is a founder.
    #[serde(rename = "isFounder")]
    pub is_founder: bool,
    /// First investment date.
    pub investment_date: String,
    /// Registry id of the shareholder.
    #[serde(default)]
    pub investor_uen: Option<String>,
    /// Current holding, in percent.
    pub current_share_holding_percentage: f64,
    /// Holding value at the last round's valuation.
    pub value_of_investment_at_last_round_valuation: f64,
    /// Total amount invested.
    pub sum_amount_invested: f64,
    /// Total shares allocated.
    pub sum_shares_allocated: f64,
    /// Total shares sold.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sum_shares_sold: Option<f64>,
    /// Secondary shares purchased.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sum_secondary_shares_purchased: Option<f64>,
}

/// One investment in a share class round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRoundAndValuation {
    /// Investor id.
    pub investor_id: i64,
    /// Investor type.
    #[serde(default)]
    pub type_of_investor: Option<String>,
    /// Investor name.
    pub investor_name: String,
    /// Investor registry id.
    pub investor_uen: String,
    /// Amount invested.
    pub amount_invested: f64,
    /// Shares allocated.
    pub shares_allocated: f64,
    /// Investment date.
    pub investment_date: String,
    /// Price per share.
    pub price_per_share: f64,
}

/// Investments grouped by share class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerShareClassSummary {
    /// Share class id.
    pub share_class_id: f64,
    /// Share class name.
    pub share_class_name: String,
    /// Investments into this class.
    pub funding_rounds_and_valuation: Vec<FundingRoundAndValuation>,
}

/// Financial detail for a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyFinancials {
    /// Funding per share class.
    pub fundings: Vec<Funding>,
    /// News-sourced funding.
    pub additional_fundings: Vec<AdditionalFunding>,
    /// Revenue history.
    pub revenue: Vec<Revenue>,
    /// Cap table.
    pub shareholders: Vec<Shareholder>,
    /// Investments grouped by share class.
    pub per_share_class_summary: Vec<PerShareClassSummary>,
}

impl CompanyFinancials {
    /// Sum of `total_funding` across all share-class rounds.
    #[must_use]
    pub fn total_funding(&self) -> f64 {
        self.fundings.iter().map(|f| f.total_funding).sum()
    }

    /// Most recent revenue entry by year, then quarter.
    #[must_use]
    pub fn latest_revenue(&self) -> Option<&Revenue> {
        self.revenue.iter().max_by(|a, b| {
            (a.revenue_year, a.revenue_quarter)
                .partial_cmp(&(b.revenue_year, b.revenue_quarter))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}
