//! `companies` and `company` subcommands.

use super::{PageArgs, print_listing};
use crate::output::{Format, emit};
use altpe::{
    AltPeClient,
    client::params::CompanyQuery,
    types::{
        CompanyStatus, CompanyType, CountryCode, InvestmentStage, OrderBy, OrderDirection,
        ResponseType,
    },
};
use anyhow::{Result, bail};
use clap::Args;

/// Company list filters.
#[derive(Debug, Clone, Args)]
pub(crate) struct CompanyArgs {
    /// Free-text search
    #[arg(short, long)]
    pub(crate) query: Option<String>,

    /// Headquarter countries (SGP, MYS, IDN, ...)
    #[arg(long, value_delimiter = ',')]
    pub(crate) countries: Vec<CountryCode>,

    /// Investment stage (PRE_SEED, SEED, SERIES_A, ...)
    #[arg(long)]
    pub(crate) stage: Option<InvestmentStage>,

    /// Sector ids
    #[arg(long, value_delimiter = ',')]
    pub(crate) sectors: Vec<u32>,

    /// Theme ids
    #[arg(long, value_delimiter = ',')]
    pub(crate) themes: Vec<u32>,

    /// Operating status (ACTIVE or CLOSED)
    #[arg(long)]
    pub(crate) status: Option<CompanyStatus>,

    /// Company type (startup or private)
    #[arg(long = "type")]
    pub(crate) co_type: Option<CompanyType>,

    /// Only companies with a female founder
    #[arg(long)]
    pub(crate) female_founder: bool,

    /// Minimum valuation
    #[arg(long)]
    pub(crate) valuation_min: Option<f64>,

    /// Maximum valuation
    #[arg(long)]
    pub(crate) valuation_max: Option<f64>,

    /// Minimum total funding
    #[arg(long)]
    pub(crate) funding_min: Option<f64>,

    /// Maximum total funding
    #[arg(long)]
    pub(crate) funding_max: Option<f64>,

    /// Sort column (name, id)
    #[arg(long)]
    pub(crate) order_by: Option<OrderBy>,

    /// Sort descending
    #[arg(long)]
    pub(crate) desc: bool,

    /// Return full nested records
    #[arg(long)]
    pub(crate) detailed: bool,
}

impl From<CompanyArgs> for CompanyQuery {
    fn from(args: CompanyArgs) -> Self {
        Self {
            order_by: args.order_by,
            order_direction: if args.desc { OrderDirection::Desc } else { OrderDirection::Asc },
            query: args.query,
            countries: args.countries,
            sectors: args.sectors,
            themes: args.themes,
            investment_stage: args.stage,
            valuation_min: args.valuation_min,
            valuation_max: args.valuation_max,
            total_funding_min: args.funding_min,
            total_funding_max: args.funding_max,
            status: args.status,
            female_founder: args.female_founder.then_some(true),
            response_type: if args.detailed {
                ResponseType::Detailed
            } else {
                ResponseType::Simple
            },
            co_type: args.co_type,
            ..Self::default()
        }
    }
}

pub(crate) async fn list(
    client: &AltPeClient,
    args: CompanyArgs,
    paging: &PageArgs,
    format: Format,
) -> Result<()> {
    let filters = CompanyQuery::from(args);
    print_listing(paging, "companies", format, |page| client.companies(&filters, page)).await
}

pub(crate) async fn show(
    client: &AltPeClient,
    id: Option<i64>,
    uen: Option<&str>,
    financials: bool,
    format: Format,
) -> Result<()> {
    match (id, uen, financials) {
        (_, Some(uen), true) => {
            emit(&client.company_financials_by_uen(uen).await?, "financials", format)
        }
        (_, Some(uen), false) => emit(&client.company_by_uen(uen).await?, "company", format),
        (Some(id), None, true) => {
            emit(&client.company_financials(id).await?, "financials", format)
        }
        (Some(id), None, false) => emit(&client.company(id).await?, "company", format),
        (None, None, _) => bail!("pass a company id or --uen"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use altpe::client::ListParams;

    #[test]
    fn test_args_to_query() {
        let args = CompanyArgs {
            query: Some("pay".to_string()),
            countries: vec![CountryCode::Sgp, CountryCode::Mys],
            stage: Some(InvestmentStage::PreSeed),
            sectors: vec![],
            themes: vec![4],
            status: None,
            co_type: None,
            female_founder: true,
            valuation_min: None,
            valuation_max: None,
            funding_min: Some(1e6),
            funding_max: None,
            order_by: None,
            desc: true,
            detailed: false,
        };
        let query = CompanyQuery::from(args).to_query(altpe::Page::first(10));

        assert_eq!(query.get("countries"), Some("SGP, MYS"));
        assert_eq!(query.get("investment_stage"), Some("PRE_SEED"));
        assert_eq!(query.get("female_founder"), Some("1"));
        assert_eq!(query.get("order_direction"), Some("desc"));
        assert_eq!(query.get("response_type"), Some("SIMPLE"));
        assert_eq!(query.get("sectors"), None);
        assert_eq!(query.get("limit"), Some("10"));
    }
}
