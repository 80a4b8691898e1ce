//! Early-stage companies in Singapore and Malaysia, printed as XML.
//!
//! This example demonstrates:
//! - Building a client from `ALTERNATIVES_PE_*` environment variables
//! - Filtering companies by investment stage and headquarter country
//! - Rendering a result page as XML
//!
//! Run with `RUST_LOG=altpe_client=debug` to see each request.

use altpe::prelude::*;
use tracing_subscriber::EnvFilter;

/// Records to fetch.
const LIMIT: u32 = 10;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let client = AltPeClient::from_env().map_err(|_| {
        "Failed to initialize client. Set ALTERNATIVES_PE_CLIENT_ID and ALTERNATIVES_PE_CLIENT_SECRET."
    })?;

    let filters = CompanyQuery::default()
        .investment_stage(InvestmentStage::PreSeed)
        .countries([CountryCode::Sgp, CountryCode::Mys]);
    let page = client.companies(&filters, Page::first(LIMIT)).await?;

    println!("Total records: {}", page.total_records);
    println!("{}", to_xml(&page, "companies")?);

    Ok(())
}
