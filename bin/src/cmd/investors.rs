//! `investors` and `investor` subcommands.

use super::{PageArgs, print_listing};
use crate::output::{Format, emit};
use altpe::{
    AltPeClient,
    client::params::InvestorQuery,
    types::{InvestmentStage, OrderBy, OrderDirection, ResponseType},
};
use anyhow::{Result, ensure};
use chrono::NaiveDate;
use clap::Args;

/// Investor list filters.
#[derive(Debug, Clone, Args)]
pub(crate) struct InvestorArgs {
    /// Free-text search
    #[arg(short, long)]
    pub(crate) query: Option<String>,

    /// Sector id
    #[arg(long)]
    pub(crate) sector: Option<u32>,

    /// Theme ids, comma separated
    #[arg(long)]
    pub(crate) themes: Option<String>,

    /// Stage the investor has invested in
    #[arg(long)]
    pub(crate) stage: Option<InvestmentStage>,

    /// Invested on or after (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) from: Option<NaiveDate>,

    /// Invested on or before (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) to: Option<NaiveDate>,

    /// Sort column (name, id, no_of_invested_companies)
    #[arg(long)]
    pub(crate) order_by: Option<OrderBy>,

    /// Sort descending
    #[arg(long)]
    pub(crate) desc: bool,

    /// Return full nested records
    #[arg(long)]
    pub(crate) detailed: bool,
}

impl From<InvestorArgs> for InvestorQuery {
    fn from(args: InvestorArgs) -> Self {
        Self {
            order_by: args.order_by,
            order_direction: if args.desc { OrderDirection::Desc } else { OrderDirection::Asc },
            query: args.query,
            sectors: args.sector,
            themes: args.themes,
            invested_in_stage: args.stage,
            invested_on_from: args.from,
            invested_on_to: args.to,
            response_type: if args.detailed {
                ResponseType::Detailed
            } else {
                ResponseType::Simple
            },
        }
    }
}

pub(crate) async fn list(
    client: &AltPeClient,
    args: InvestorArgs,
    paging: &PageArgs,
    format: Format,
) -> Result<()> {
    if let (Some(from), Some(to)) = (args.from, args.to) {
        ensure!(from <= to, "--from {from} is after --to {to}");
    }
    let filters = InvestorQuery::from(args);
    print_listing(paging, "investors", format, |page| client.investors(&filters, page)).await
}

pub(crate) async fn show(client: &AltPeClient, id: i64, format: Format) -> Result<()> {
    emit(&client.investor(id).await?, "investor", format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use altpe::client::ListParams;

    #[test]
    fn test_args_to_query() {
        let args = InvestorArgs {
            query: None,
            sector: Some(22),
            themes: Some("3,4".to_string()),
            stage: Some(InvestmentStage::SeriesA),
            from: NaiveDate::from_ymd_opt(2023, 1, 1),
            to: None,
            order_by: Some(OrderBy::NoOfInvestedCompanies),
            desc: false,
            detailed: true,
        };
        let query = InvestorQuery::from(args).to_query(altpe::Page::default());

        assert_eq!(query.get("sectors"), Some("22"));
        assert_eq!(query.get("invested_in_stage"), Some("SERIES_A"));
        assert_eq!(query.get("invested_on_from"), Some("2023-01-01"));
        assert_eq!(query.get("order_by"), Some("no_of_invested_companies"));
        assert_eq!(query.get("response_type"), Some("DETAILED"));
    }
}
