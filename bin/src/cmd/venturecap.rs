//! VentureCap subcommands: funds, capital providers, fund performances and
//! commitment deals.

use super::{PageArgs, print_listing};
use crate::output::{Format, emit};
use altpe::{
    AltPeClient,
    client::params::{CapitalProviderQuery, CommitmentDealQuery, FundPerformanceQuery, FundQuery},
    types::{CapitalProviderCategory, FundStatus},
};
use anyhow::{Result, ensure};
use clap::Args;

/// Fund list filters.
#[derive(Debug, Clone, Args)]
pub(crate) struct FundArgs {
    /// Free-text search
    #[arg(short, long)]
    pub(crate) query: Option<String>,

    /// Fundraising status ("Open", "Closed", "Upcoming", ...)
    #[arg(long)]
    pub(crate) status: Option<FundStatus>,

    /// Earliest vintage year
    #[arg(long)]
    pub(crate) vintage_min: Option<i32>,

    /// Latest vintage year
    #[arg(long)]
    pub(crate) vintage_max: Option<i32>,

    /// Fund type id
    #[arg(long)]
    pub(crate) fund_type: Option<u32>,

    /// Minimum fund size
    #[arg(long)]
    pub(crate) size_min: Option<f64>,

    /// Maximum fund size
    #[arg(long)]
    pub(crate) size_max: Option<f64>,
}

impl From<FundArgs> for FundQuery {
    fn from(args: FundArgs) -> Self {
        Self {
            query: args.query,
            status: args.status,
            vintage_year_min: args.vintage_min,
            vintage_year_max: args.vintage_max,
            fund_type: args.fund_type,
            size_min: args.size_min,
            size_max: args.size_max,
            ..Self::default()
        }
    }
}

pub(crate) async fn funds(
    client: &AltPeClient,
    args: FundArgs,
    paging: &PageArgs,
    format: Format,
) -> Result<()> {
    if let (Some(min), Some(max)) = (args.vintage_min, args.vintage_max) {
        ensure!(min <= max, "--vintage-min {min} is after --vintage-max {max}");
    }
    let filters = FundQuery::from(args);
    print_listing(paging, "funds", format, |page| client.funds(&filters, page)).await
}

pub(crate) async fn fund(client: &AltPeClient, id: &str, format: Format) -> Result<()> {
    emit(&client.fund(id).await?, "fund", format)
}

pub(crate) async fn capital_providers(
    client: &AltPeClient,
    id: Option<i64>,
    category: Option<CapitalProviderCategory>,
    query: Option<String>,
    hq: Option<u32>,
    paging: &PageArgs,
    format: Format,
) -> Result<()> {
    if let (Some(id), Some(category)) = (id, category) {
        return emit(&client.capital_provider(id, category).await?, "capital_provider", format);
    }
    let filters = CapitalProviderQuery {
        query,
        category,
        hq,
        ..CapitalProviderQuery::default()
    };
    print_listing(paging, "capital_providers", format, |page| {
        client.capital_providers(&filters, page)
    })
    .await
}

pub(crate) async fn fund_performances(
    client: &AltPeClient,
    id: Option<i64>,
    fund_id: Option<i64>,
    reporting_period: Option<String>,
    query: Option<String>,
    paging: &PageArgs,
    format: Format,
) -> Result<()> {
    if let Some(id) = id {
        return emit(&client.fund_performance(id).await?, "fund_performance", format);
    }
    let filters = FundPerformanceQuery {
        query,
        fund_id,
        reporting_period,
        ..FundPerformanceQuery::default()
    };
    print_listing(paging, "fund_performances", format, |page| {
        client.fund_performances(&filters, page)
    })
    .await
}

pub(crate) async fn commitment_deals(
    client: &AltPeClient,
    id: Option<String>,
    fund_id: Option<i64>,
    limited_partner_id: Option<i64>,
    query: Option<String>,
    paging: &PageArgs,
    format: Format,
) -> Result<()> {
    if let Some(id) = id {
        return emit(&client.commitment_deal(&id).await?, "commitment_deal", format);
    }
    let filters = CommitmentDealQuery {
        query,
        fund_id,
        limited_partner_id,
        ..CommitmentDealQuery::default()
    };
    print_listing(paging, "commitment_deals", format, |page| {
        client.commitment_deals(&filters, page)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use altpe::client::ListParams;

    #[test]
    fn test_fund_args_to_query() {
        let args = FundArgs {
            query: None,
            status: Some(FundStatus::Upcoming),
            vintage_min: Some(2020),
            vintage_max: None,
            fund_type: None,
            size_min: None,
            size_max: Some(5e8),
        };
        let query = FundQuery::from(args).to_query(altpe::Page::default());

        assert_eq!(query.get("status"), Some("Upcoming"));
        assert_eq!(query.get("vintage_year_min"), Some("2020"));
        assert_eq!(query.get("order_by"), Some("name"));
        assert_eq!(query.get("fund_type"), None);
    }
}
