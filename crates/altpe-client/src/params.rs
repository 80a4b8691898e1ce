//! Typed filters for the list endpoints.
//!
//! Every struct is `Default` (matching the server's defaults) and has
//! chainable setters, so a filtered request reads as
//!
//! ```
//! use altpe_client::params::CompanyQuery;
//! use altpe_types::{CountryCode, InvestmentStage};
//!
//! let filters = CompanyQuery::default()
//!     .countries([CountryCode::Sgp, CountryCode::Mys])
//!     .investment_stage(InvestmentStage::PreSeed)
//!     .total_funding_min(1_000_000.0);
//! ```
//!
//! Unset filters are left out of the query string.

use crate::query::{Page, Query};
use altpe_types::{
    CapitalProviderCategory, CapitalProviderOrderBy, CommitmentDealOrderBy, CompanyStatus,
    CompanyType, CountryCode, FundOrderBy, FundPerformanceOrderBy, FundStatus, InvestmentStage,
    OrderBy, OrderDirection, PersonOrderBy, ResponseType,
};
use chrono::NaiveDate;

/// Filters that can be rendered into a list request.
pub trait ListParams {
    /// Append this filter set to `query`.
    fn apply(&self, query: &mut Query);

    /// Full query string for `page`.
    fn to_query(&self, page: Page) -> Query {
        let mut query = Query::new();
        query.push_page(page);
        self.apply(&mut query);
        query
    }
}

/// Setters for `Option` fields.
macro_rules! optional_setters {
    ($ty:ty { $($field:ident: $arg:ty),* $(,)? }) => {
        impl $ty {
            $(
                #[doc = concat!("Set the `", stringify!($field), "` filter.")]
                #[must_use]
                pub fn $field(mut self, value: impl Into<$arg>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

/// Filters for `GET /api/v2/companies`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyQuery {
    /// Sort column.
    pub order_by: Option<OrderBy>,
    /// Sort direction.
    pub order_direction: OrderDirection,
    /// Free-text search.
    pub query: Option<String>,
    /// Headquarter countries.
    pub countries: Vec<CountryCode>,
    /// Sector ids.
    pub sectors: Vec<u32>,
    /// Theme ids.
    pub themes: Vec<u32>,
    /// Current investment stage.
    pub investment_stage: Option<InvestmentStage>,
    /// Minimum valuation.
    pub valuation_min: Option<f64>,
    /// Maximum valuation.
    pub valuation_max: Option<f64>,
    /// Minimum total funding.
    pub total_funding_min: Option<f64>,
    /// Maximum total funding.
    pub total_funding_max: Option<f64>,
    /// Minimum revenue.
    pub revenue_min: Option<f64>,
    /// Maximum revenue.
    pub revenue_max: Option<f64>,
    /// Minimum revenue growth.
    pub revenue_growth_min: Option<f64>,
    /// Maximum revenue growth.
    pub revenue_growth_max: Option<f64>,
    /// Operating status.
    pub status: Option<CompanyStatus>,
    /// Has at least one female founder.
    pub female_founder: Option<bool>,
    /// Level of detail per record.
    pub response_type: ResponseType,
    /// Company type.
    pub co_type: Option<CompanyType>,
    /// Country of incorporation.
    pub iso_code: Option<CountryCode>,
}

optional_setters!(CompanyQuery {
    order_by: OrderBy,
    query: String,
    investment_stage: InvestmentStage,
    valuation_min: f64,
    valuation_max: f64,
    total_funding_min: f64,
    total_funding_max: f64,
    revenue_min: f64,
    revenue_max: f64,
    revenue_growth_min: f64,
    revenue_growth_max: f64,
    status: CompanyStatus,
    female_founder: bool,
    co_type: CompanyType,
    iso_code: CountryCode,
});

impl CompanyQuery {
    /// Set the sort direction.
    #[must_use]
    pub const fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = direction;
        self
    }

    /// Set the level of detail.
    #[must_use]
    pub const fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }

    /// Restrict to these headquarter countries.
    #[must_use]
    pub fn countries(mut self, countries: impl IntoIterator<Item = CountryCode>) -> Self {
        self.countries = countries.into_iter().collect();
        self
    }

    /// Restrict to these sector ids.
    #[must_use]
    pub fn sectors(mut self, sectors: impl IntoIterator<Item = u32>) -> Self {
        self.sectors = sectors.into_iter().collect();
        self
    }

    /// Restrict to these theme ids.
    #[must_use]
    pub fn themes(mut self, themes: impl IntoIterator<Item = u32>) -> Self {
        self.themes = themes.into_iter().collect();
        self
    }
}

impl ListParams for CompanyQuery {
    fn apply(&self, query: &mut Query) {
        query
            .push_opt("order_by", self.order_by)
            .push("order_direction", self.order_direction)
            .push_text("query", self.query.as_deref())
            .push_list("countries", &self.countries)
            .push_list("sectors", &self.sectors)
            .push_list("themes", &self.themes)
            .push_opt("investment_stage", self.investment_stage)
            .push_opt("valuation_min", self.valuation_min)
            .push_opt("valuation_max", self.valuation_max)
            .push_opt("total_funding_min", self.total_funding_min)
            .push_opt("total_funding_max", self.total_funding_max)
            .push_opt("revenue_min", self.revenue_min)
            .push_opt("revenue_max", self.revenue_max)
            .push_opt("revenue_growth_min", self.revenue_growth_min)
            .push_opt("revenue_growth_max", self.revenue_growth_max)
            .push_opt("status", self.status)
            .push_flag("female_founder", self.female_founder)
            .push("response_type", self.response_type)
            .push_opt("co_type", self.co_type)
            .push_opt("iso_code", self.iso_code);
    }
}

/// Filters for `GET /api/v2/investors`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvestorQuery {
    /// Sort column.
    pub order_by: Option<OrderBy>,
    /// Sort direction.
    pub order_direction: OrderDirection,
    /// Free-text search.
    pub query: Option<String>,
    /// Sector id.
    pub sectors: Option<u32>,
    /// Theme ids, comma separated.
    pub themes: Option<String>,
    /// Stage the investor has invested in.
    pub invested_in_stage: Option<InvestmentStage>,
    /// Earliest investment date.
    pub invested_on_from: Option<NaiveDate>,
    /// Latest investment date.
    pub invested_on_to: Option<NaiveDate>,
    /// Level of detail per record.
    pub response_type: ResponseType,
}

optional_setters!(InvestorQuery {
    order_by: OrderBy,
    query: String,
    sectors: u32,
    themes: String,
    invested_in_stage: InvestmentStage,
    invested_on_from: NaiveDate,
    invested_on_to: NaiveDate,
});

impl InvestorQuery {
    /// Set the sort direction.
    #[must_use]
    pub const fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = direction;
        self
    }

    /// Set the level of detail.
    #[must_use]
    pub const fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = response_type;
        self
    }
}

impl ListParams for InvestorQuery {
    fn apply(&self, query: &mut Query) {
        query
            .push_opt("order_by", self.order_by)
            .push("order_direction", self.order_direction)
            .push_text("query", self.query.as_deref())
            .push_opt("sectors", self.sectors)
            .push_text("themes", self.themes.as_deref())
            .push_opt("invested_in_stage", self.invested_in_stage)
            .push_opt("invested_on_from", self.invested_on_from.map(|d| d.format("%Y-%m-%d")))
            .push_opt("invested_on_to", self.invested_on_to.map(|d| d.format("%Y-%m-%d")))
            .push("response_type", self.response_type);
    }
}

/// Filters for the director, founder and auditor lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleQuery {
    /// Sort column.
    pub order_by: Option<OrderBy>,
    /// Sort direction.
    pub order_direction: OrderDirection,
    /// Free-text search.
    pub query: Option<String>,
}

optional_setters!(PeopleQuery {
    order_by: OrderBy,
    query: String,
});

impl PeopleQuery {
    /// Set the sort direction.
    #[must_use]
    pub const fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = direction;
        self
    }
}

impl ListParams for PeopleQuery {
    fn apply(&self, query: &mut Query) {
        query
            .push_opt("order_by", self.order_by)
            .push("order_direction", self.order_direction)
            .push_text("query", self.query.as_deref());
    }
}

/// Filters for `GET /api/v2/capital-providers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapitalProviderQuery {
    /// Sort column.
    pub order_by: CapitalProviderOrderBy,
    /// Sort direction.
    pub order_direction: OrderDirection,
    /// Free-text search.
    pub query: Option<String>,
    /// Company registration number.
    pub registration_number: Option<String>,
    /// Provider category.
    pub category: Option<CapitalProviderCategory>,
    /// Headquarter location id.
    pub hq: Option<u32>,
    /// Preferred investment location id.
    pub preferred_location: Option<u32>,
    /// Preferred fund type id.
    pub preferred_fund_type: Option<u32>,
    /// Preferred sector id.
    pub preferred_sector: Option<u32>,
    /// Preferred theme id.
    pub preferred_theme: Option<u32>,
}

optional_setters!(CapitalProviderQuery {
    query: String,
    registration_number: String,
    category: CapitalProviderCategory,
    hq: u32,
    preferred_location: u32,
    preferred_fund_type: u32,
    preferred_sector: u32,
    preferred_theme: u32,
});

impl CapitalProviderQuery {
    /// Set the sort column.
    #[must_use]
    pub const fn order_by(mut self, order_by: CapitalProviderOrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Set the sort direction.
    #[must_use]
    pub const fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = direction;
        self
    }
}

impl ListParams for CapitalProviderQuery {
    fn apply(&self, query: &mut Query) {
        query
            .push("order_by", self.order_by)
            .push("order_direction", self.order_direction)
            .push_text("query", self.query.as_deref())
            .push_text("registration_number", self.registration_number.as_deref())
            .push_opt("category", self.category)
            .push_opt("hq", self.hq)
            .push_opt("preferred_location", self.preferred_location)
            .push_opt("preferred_fund_type", self.preferred_fund_type)
            .push_opt("preferred_sector", self.preferred_sector)
            .push_opt("preferred_theme", self.preferred_theme);
    }
}

/// Filters for `GET /api/v2/funds/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundQuery {
    /// Sort column.
    pub order_by: FundOrderBy,
    /// Sort direction.
    pub order_direction: OrderDirection,
    /// Free-text search.
    pub query: Option<String>,
    /// Fund registration number.
    pub registration_number: Option<String>,
    /// Earliest vintage year.
    pub vintage_year_min: Option<i32>,
    /// Latest vintage year.
    pub vintage_year_max: Option<i32>,
    /// Fund type id.
    pub fund_type: Option<u32>,
    /// Minimum fund size.
    pub size_min: Option<f64>,
    /// Maximum fund size.
    pub size_max: Option<f64>,
    /// Minimum net IRR.
    pub net_irr_min: Option<f64>,
    /// Maximum net IRR.
    pub net_irr_max: Option<f64>,
    /// Minimum net multiple.
    pub net_multiple_min: Option<f64>,
    /// Maximum net multiple.
    pub net_multiple_max: Option<f64>,
    /// Minimum DPI.
    pub dpi_min: Option<f64>,
    /// Maximum DPI.
    pub dpi_max: Option<f64>,
    /// Minimum RVPI.
    pub rvpi_min: Option<f64>,
    /// Maximum RVPI.
    pub rvpi_max: Option<f64>,
    /// Last reported quarter, e.g. `2024-Q2`.
    pub last_report_quarter: Option<String>,
    /// Fundraising status.
    pub status: Option<FundStatus>,
}

optional_setters!(FundQuery {
    query: String,
    registration_number: String,
    vintage_year_min: i32,
    vintage_year_max: i32,
    fund_type: u32,
    size_min: f64,
    size_max: f64,
    net_irr_min: f64,
    net_irr_max: f64,
    net_multiple_min: f64,
    net_multiple_max: f64,
    dpi_min: f64,
    dpi_max: f64,
    rvpi_min: f64,
    rvpi_max: f64,
    last_report_quarter: String,
    status: FundStatus,
});

impl FundQuery {
    /// Set the sort column.
    #[must_use]
    pub const fn order_by(mut self, order_by: FundOrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Set the sort direction.
    #[must_use]
    pub const fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = direction;
        self
    }
}

impl ListParams for FundQuery {
    fn apply(&self, query: &mut Query) {
        query
            .push("order_by", self.order_by)
            .push("order_direction", self.order_direction)
            .push_text("query", self.query.as_deref())
            .push_text("registration_number", self.registration_number.as_deref())
            .push_opt("vintage_year_min", self.vintage_year_min)
            .push_opt("vintage_year_max", self.vintage_year_max)
            .push_opt("fund_type", self.fund_type)
            .push_opt("size_min", self.size_min)
            .push_opt("size_max", self.size_max)
            .push_opt("net_irr_min", self.net_irr_min)
            .push_opt("net_irr_max", self.net_irr_max)
            .push_opt("net_multiple_min", self.net_multiple_min)
            .push_opt("net_multiple_max", self.net_multiple_max)
            .push_opt("dpi_min", self.dpi_min)
            .push_opt("dpi_max", self.dpi_max)
            .push_opt("rvpi_min", self.rvpi_min)
            .push_opt("rvpi_max", self.rvpi_max)
            .push_text("last_report_quarter", self.last_report_quarter.as_deref())
            .push_opt("status", self.status);
    }
}

/// Filters for `GET /api/v2/fund-performances/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundPerformanceQuery {
    /// Sort column.
    pub order_by: FundPerformanceOrderBy,
    /// Sort direction.
    pub order_direction: OrderDirection,
    /// Free-text search.
    pub query: Option<String>,
    /// Fund id.
    pub fund_id: Option<i64>,
    /// Reporting period, e.g. `2023-12-31`.
    pub reporting_period: Option<String>,
    /// Minimum IRR.
    pub irr_min: Option<f64>,
    /// Maximum IRR.
    pub irr_max: Option<f64>,
    /// Minimum DPI.
    pub dpi_min: Option<f64>,
    /// Maximum DPI.
    pub dpi_max: Option<f64>,
    /// Minimum RVPI.
    pub rvpi_min: Option<f64>,
    /// Maximum RVPI.
    pub rvpi_max: Option<f64>,
    /// Minimum net multiple.
    pub net_multiple_min: Option<f64>,
    /// Maximum net multiple.
    pub net_multiple_max: Option<f64>,
    /// Minimum net assets.
    pub net_assets_min: Option<f64>,
    /// Maximum net assets.
    pub net_assets_max: Option<f64>,
}

optional_setters!(FundPerformanceQuery {
    query: String,
    fund_id: i64,
    reporting_period: String,
    irr_min: f64,
    irr_max: f64,
    dpi_min: f64,
    dpi_max: f64,
    rvpi_min: f64,
    rvpi_max: f64,
    net_multiple_min: f64,
    net_multiple_max: f64,
    net_assets_min: f64,
    net_assets_max: f64,
});

impl FundPerformanceQuery {
    /// Set the sort column.
    #[must_use]
    pub const fn order_by(mut self, order_by: FundPerformanceOrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Set the sort direction.
    #[must_use]
    pub const fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = direction;
        self
    }
}

impl ListParams for FundPerformanceQuery {
    fn apply(&self, query: &mut Query) {
        query
            .push("order_by", self.order_by)
            .push("order_direction", self.order_direction)
            .push_text("query", self.query.as_deref())
            .push_opt("fund_id", self.fund_id)
            .push_text("reporting_period", self.reporting_period.as_deref())
            .push_opt("irr_min", self.irr_min)
            .push_opt("irr_max", self.irr_max)
            .push_opt("dpi_min", self.dpi_min)
            .push_opt("dpi_max", self.dpi_max)
            .push_opt("rvpi_min", self.rvpi_min)
            .push_opt("rvpi_max", self.rvpi_max)
            .push_opt("net_multiple_min", self.net_multiple_min)
            .push_opt("net_multiple_max", self.net_multiple_max)
            .push_opt("net_assets_min", self.net_assets_min)
            .push_opt("net_assets_max", self.net_assets_max);
    }
}

/// Filters for `GET /api/v2/commitment-deals/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitmentDealQuery {
    /// Sort column.
    pub order_by: CommitmentDealOrderBy,
    /// Sort direction.
    pub order_direction: OrderDirection,
    /// Free-text search.
    pub query: Option<String>,
    /// Limited partner id.
    pub limited_partner_id: Option<i64>,
    /// Fund id.
    pub fund_id: Option<i64>,
    /// Fund type id.
    pub fund_type: Option<u32>,
}

optional_setters!(CommitmentDealQuery {
    query: String,
    limited_partner_id: i64,
    fund_id: i64,
    fund_type: u32,
});

impl CommitmentDealQuery {
    /// Set the sort column.
    #[must_use]
    pub const fn order_by(mut self, order_by: CommitmentDealOrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Set the sort direction.
    #[must_use]
    pub const fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = direction;
        self
    }
}

impl ListParams for CommitmentDealQuery {
    fn apply(&self, query: &mut Query) {
        query
            .push("order_by", self.order_by)
            .push("order_direction", self.order_direction)
            .push_text("query", self.query.as_deref())
            .push_opt("limited_partner_id", self.limited_partner_id)
            .push_opt("fund_id", self.fund_id)
            .push_opt("fund_type", self.fund_type);
    }
}

/// Filters for `GET /api/v2/people/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonQuery {
    /// Sort column.
    pub order_by: PersonOrderBy,
    /// Sort direction.
    pub order_direction: OrderDirection,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

optional_setters!(PersonQuery {
    first_name: String,
    last_name: String,
    email: String,
});

impl PersonQuery {
    /// Set the sort column.
    #[must_use]
    pub const fn order_by(mut self, order_by: PersonOrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Set the sort direction.
    #[must_use]
    pub const fn order_direction(mut self, direction: OrderDirection) -> Self {
        self.order_direction = direction;
        self
    }
}

impl ListParams for PersonQuery {
    fn apply(&self, query: &mut Query) {
        query
            .push("order_by", self.order_by)
            .push("order_direction", self.order_direction)
            .push_text("first_name", self.first_name.as_deref())
            .push_text("last_name", self.last_name.as_deref())
            .push_text("email", self.email.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_defaults() {
        let query = CompanyQuery::default().to_query(Page::default());
        assert_eq!(query.get("limit"), Some("100"));
        assert_eq!(query.get("offset"), Some("0"));
        assert_eq!(query.get("order_direction"), Some("asc"));
        assert_eq!(query.get("response_type"), Some("SIMPLE"));
        assert_eq!(query.get("order_by"), None);
        assert_eq!(query.pairs().len(), 4);
    }

    #[test]
    fn test_company_filters() {
        let query = CompanyQuery::default()
            .countries([CountryCode::Sgp, CountryCode::Mys])
            .sectors([22, 44])
            .investment_stage(InvestmentStage::PreSeed)
            .female_founder(false)
            .valuation_min(2.5)
            .query("fintech")
            .to_query(Page::new(10, 20));

        assert_eq!(query.get("limit"), Some("10"));
        assert_eq!(query.get("offset"), Some("20"));
        assert_eq!(query.get("countries"), Some("SGP, MYS"));
        assert_eq!(query.get("sectors"), Some("22, 44"));
        assert_eq!(query.get("investment_stage"), Some("PRE_SEED"));
        assert_eq!(query.get("female_founder"), Some("0"));
        assert_eq!(query.get("valuation_min"), Some("2.5"));
        assert_eq!(query.get("query"), Some("fintech"));
        assert_eq!(query.get("themes"), None);
    }

    #[test]
    fn test_investor_dates() {
        let query = InvestorQuery::default()
            .invested_on_from(NaiveDate::from_ymd_opt(2023, 1, 5).unwrap())
            .sectors(22u32)
            .to_query(Page::default());
        assert_eq!(query.get("invested_on_from"), Some("2023-01-05"));
        assert_eq!(query.get("invested_on_to"), None);
        assert_eq!(query.get("sectors"), Some("22"));
    }

    #[test]
    fn test_venturecap_default_ordering() {
        let providers = CapitalProviderQuery::default().to_query(Page::default());
        assert_eq!(providers.get("order_by"), Some("display_name"));

        let funds = FundQuery::default().to_query(Page::default());
        assert_eq!(funds.get("order_by"), Some("name"));

        let performances = FundPerformanceQuery::default().to_query(Page::default());
        assert_eq!(performances.get("order_by"), Some("dpi"));

        let deals = CommitmentDealQuery::default().to_query(Page::default());
        assert_eq!(deals.get("order_by"), Some("fund_manager_name"));

        let people = PersonQuery::default().to_query(Page::default());
        assert_eq!(people.get("order_by"), Some("id"));
        assert_eq!(people.get("order_direction"), Some("asc"));
    }

    #[test]
    fn test_fund_status_and_category_values() {
        let funds = FundQuery::default()
            .status(FundStatus::OpenWithFirstClose)
            .vintage_year_min(2015)
            .to_query(Page::default());
        assert_eq!(funds.get("status"), Some("Open - With first close"));
        assert_eq!(funds.get("vintage_year_min"), Some("2015"));

        let providers = CapitalProviderQuery::default()
            .category(CapitalProviderCategory::FamilyOffice)
            .hq(147u32)
            .to_query(Page::default());
        assert_eq!(providers.get("category"), Some("family-office"));
        assert_eq!(providers.get("hq"), Some("147"));
    }

    #[test]
    fn test_empty_text_filters_are_dropped() {
        let people = PersonQuery::default()
            .first_name("")
            .last_name("  ")
            .email(" ada@example.com ")
            .to_query(Page::default());
        assert_eq!(people.get("first_name"), None);
        assert_eq!(people.get("last_name"), Some("  "));
        assert_eq!(people.get("email"), Some(" ada@example.com "));
    }
}
