//! Alternatives.PE CLI binary.
//!
//! Queries the Alternatives.PE API from the command line and prints the
//! results as JSON or XML.

mod cmd;
mod output;

use altpe::CapitalProviderCategory;
use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::{CompanyArgs, FundArgs, InvestorArgs, PageArgs};
use output::Format;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "altpe")]
#[command(about = "Query the Alternatives.PE private markets API", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Json)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List companies
    Companies {
        #[command(flatten)]
        filters: CompanyArgs,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one company by id or UEN
    Company {
        /// Company id
        #[arg(required_unless_present = "uen")]
        id: Option<i64>,

        /// Look up by Unique Entity Number instead of id
        #[arg(long, conflicts_with = "id")]
        uen: Option<String>,

        /// Show financials instead of the profile
        #[arg(long)]
        financials: bool,
    },

    /// List investors
    Investors {
        #[command(flatten)]
        filters: InvestorArgs,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one investor
    Investor {
        /// Investor id
        id: i64,
    },

    /// List funds
    Funds {
        #[command(flatten)]
        filters: FundArgs,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one fund
    Fund {
        /// Fund id
        id: String,
    },

    /// List capital providers, or show one with --category
    CapitalProviders {
        /// Capital provider id
        #[arg(requires = "category")]
        id: Option<i64>,

        /// Category: fund-manager, limited-partner or family-office
        #[arg(short, long)]
        category: Option<CapitalProviderCategory>,

        /// Name search
        #[arg(short, long)]
        query: Option<String>,

        /// Headquarters location id
        #[arg(long)]
        hq: Option<u32>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List fund performance reports, or show one
    FundPerformances {
        /// Report id
        id: Option<i64>,

        /// Restrict to one fund
        #[arg(long)]
        fund_id: Option<i64>,

        /// Reporting period, e.g. 2023-Q4
        #[arg(long)]
        reporting_period: Option<String>,

        /// Name search
        #[arg(short, long)]
        query: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List commitment deals, or show one
    CommitmentDeals {
        /// Deal id
        id: Option<String>,

        /// Restrict to one fund
        #[arg(long)]
        fund_id: Option<i64>,

        /// Restrict to one limited partner
        #[arg(long)]
        limited_partner_id: Option<i64>,

        /// Name search
        #[arg(short, long)]
        query: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List people, or show one
    People {
        /// Person id
        id: Option<i64>,

        /// First name
        #[arg(long)]
        first_name: Option<String>,

        /// Last name
        #[arg(long)]
        last_name: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List company directors, or show one
    Directors {
        /// Director id
        id: Option<i64>,

        /// Name search
        #[arg(short, long)]
        query: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List company founders, or show one
    Founders {
        /// Founder id
        id: Option<i64>,

        /// Name search
        #[arg(short, long)]
        query: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List company auditors, or show one
    Auditors {
        /// Auditor id
        id: Option<i64>,

        /// Name search
        #[arg(short, long)]
        query: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = altpe::AltPeClient::from_env()?;
    let format = cli.format;

    match cli.command {
        Commands::Companies { filters, page } => {
            cmd::companies::list(&client, filters, &page, format).await?;
        }
        Commands::Company {
            id,
            uen,
            financials,
        } => {
            cmd::companies::show(&client, id, uen.as_deref(), financials, format).await?;
        }
        Commands::Investors { filters, page } => {
            cmd::investors::list(&client, filters, &page, format).await?;
        }
        Commands::Investor { id } => {
            cmd::investors::show(&client, id, format).await?;
        }
        Commands::Funds { filters, page } => {
            cmd::venturecap::funds(&client, filters, &page, format).await?;
        }
        Commands::Fund { id } => {
            cmd::venturecap::fund(&client, &id, format).await?;
        }
        Commands::CapitalProviders {
            id,
            category,
            query,
            hq,
            page,
        } => {
            cmd::venturecap::capital_providers(&client, id, category, query, hq, &page, format)
                .await?;
        }
        Commands::FundPerformances {
            id,
            fund_id,
            reporting_period,
            query,
            page,
        } => {
            cmd::venturecap::fund_performances(
                &client,
                id,
                fund_id,
                reporting_period,
                query,
                &page,
                format,
            )
            .await?;
        }
        Commands::CommitmentDeals {
            id,
            fund_id,
            limited_partner_id,
            query,
            page,
        } => {
            cmd::venturecap::commitment_deals(
                &client,
                id,
                fund_id,
                limited_partner_id,
                query,
                &page,
                format,
            )
            .await?;
        }
        Commands::People {
            id,
            first_name,
            last_name,
            email,
            page,
        } => {
            cmd::people::people(&client, id, first_name, last_name, email, &page, format).await?;
        }
        Commands::Directors { id, query, page } => {
            cmd::people::directors(&client, id, query, &page, format).await?;
        }
        Commands::Founders { id, query, page } => {
            cmd::people::founders(&client, id, query, &page, format).await?;
        }
        Commands::Auditors { id, query, page } => {
            cmd::people::auditors(&client, id, query, &page, format).await?;
        }
    }

    Ok(())
}
