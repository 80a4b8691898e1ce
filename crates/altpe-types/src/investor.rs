//! Investor records.

use crate::company::{Sector, Theme};
use serde::{Deserialize, Serialize};

/// A portfolio position as seen from the investor's side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorCompany {
    /// Company id.
    pub id: i64,
    /// Company name.
    pub name: String,
    /// Company registry id.
    pub uen: String,
    /// Company description.
    pub description: String,
    /// Shares allocated to the investor.
    pub total_shares_allocated: f64,
    /// Shares the investor has sold.
    pub total_shares_sold: f64,
    /// Secondary shares bought.
    pub total_secondary_shares: f64,
    /// Total invested.
    pub total_invested: f64,
    /// Total invested in seed rounds.
    pub total_seeds: f64,
    /// Invested in Series A.
    pub amount_invested_series_a: f64,
    /// Invested in Series B.
    pub amount_invested_series_b: f64,
    /// Invested in seed.
    pub amount_invested_seed: f64,
    /// Invested in pre-seed.
    pub amount_invested_pre_seed: f64,
    /// Invested in Series C and later.
    pub amount_invested_series_c_and_beyond: f64,
    /// Invested in preference-ordinary shares.
    pub amount_invested_preference_ordinary: f64,
    /// Invested in ordinary shares.
    pub amount_invested_ordinary: f64,
    /// Invested in preference shares; shape varies.
    #[serde(default)]
    pub amount_invested_preference: Option<serde_json::Value>,
    /// Highest price paid per share.
    pub max_price_per_share: f64,
    /// Shares held after sales.
    pub remaining_shares_after_sold: f64,
    /// Position value at the last round's valuation.
    pub value_of_investment_at_last_round_valuation: f64,
    /// Primary position value at the last round's valuation.
    pub value_of_investment_at_last_round_valuation_primary: f64,
    /// Secondary position value at the last round's valuation.
    #[serde(rename = "value_of_investment_at_last_round_valuation_seconday")]
    pub value_of_investment_at_last_round_valuation_secondary: f64,
    /// Primary shares held after sales.
    pub remaining_shares_without_secondary_after_sold: f64,
    /// Sector tags.
    pub sectors: Vec<Sector>,
    /// Theme tags.
    pub themes: Vec<Theme>,
}

/// Full investor record with portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorDetail {
    /// Investor id.
    pub id: i64,
    /// Investor name.
    pub investor_name: String,
    /// Investor registry id.
    pub investor_uen: String,
    /// Portfolio companies.
    pub companies: Vec<InvestorCompany>,
}

impl InvestorDetail {
    /// Sum of `total_invested` across the portfolio.
    #[must_use]
    pub fn portfolio_invested(&self) -> f64 {
        self.companies.iter().map(|c| c.total_invested).sum()
    }
}

/// Investor row returned by the investor listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorSummary {
    /// Investor id.
    pub id: i64,
    /// Investor name.
    pub investor_name: String,
    /// Investor registry id.
    pub investor_uen: String,
    /// First investment date.
    pub investment_date: String,
    /// Number of portfolio companies.
    pub no_of_invested_companies: f64,
    /// Total invested.
    #[serde(default)]
    pub total_invested: Option<f64>,
    /// Invested in seed.
    #[serde(default)]
    pub amount_invested_seed: Option<f64>,
    /// Invested in Series A.
    #[serde(default)]
    pub amount_invested_series_a: Option<f64>,
    /// Invested in Series B.
    #[serde(default)]
    pub amount_invested_series_b: Option<f64>,
    /// Invested in Series C and later.
    #[serde(default)]
    pub amount_invested_series_c_and_beyond: Option<f64>,
}
