//! Limited partner commitments into one fund, summed across every page.
//!
//! This example demonstrates:
//! - Walking every page of a list endpoint with `collect_all`
//! - Filtering commitment deals by fund
//!
//! Usage: `cargo run -p altpe-demos --example walk_commitment_deals -- <fund-id>`

use altpe::{collect_all, prelude::*};
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

/// Stop after this many commitments.
const MAX_DEALS: usize = 1_000;

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
    let fund_id: i64 = std::env::args()
        .nth(1)
        .ok_or("usage: walk_commitment_deals <fund-id>")?
        .parse()?;

    let client = AltPeClient::from_env()?;
    let filters = CommitmentDealQuery::default().fund_id(fund_id);
    let deals = collect_all(Page::default(), Some(MAX_DEALS), |page| {
        client.commitment_deals(&filters, page)
    })
    .await?;

    // Total committed per limited partner
    let mut by_partner: BTreeMap<&str, f64> = BTreeMap::new();
    for deal in &deals {
        *by_partner.entry(deal.limited_partner_name.as_str()).or_default() +=
            deal.size.unwrap_or_default();
    }

    println!("\nCommitments into fund {fund_id}");
    println!("═════════════════════════════");
    for (partner, committed) in &by_partner {
        println!("  {partner:40} {committed:>16.0}");
    }
    println!("\n{} deals, {} limited partners", deals.len(), by_partner.len());

    Ok(())
}
