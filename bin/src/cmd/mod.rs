//! CLI subcommand modules.
//!
//! This module contains the implementations for all altpe CLI subcommands
//! plus the paging arguments they share.

pub(crate) mod companies;
pub(crate) mod investors;
pub(crate) mod people;
pub(crate) mod venturecap;

pub(crate) use companies::CompanyArgs;
pub(crate) use investors::InvestorArgs;
pub(crate) use venturecap::FundArgs;

use crate::output::{Format, emit};
use altpe::{Page, Paginated, collect_all};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::future::Future;
use tracing::info;

/// Paging arguments shared by every list subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct PageArgs {
    /// Records per page (1-100)
    #[arg(short, long, default_value_t = 100)]
    pub(crate) limit: u32,

    /// Records to skip
    #[arg(short, long, default_value_t = 0)]
    pub(crate) offset: u32,

    /// Follow pagination and print every matching record
    #[arg(long)]
    pub(crate) all: bool,

    /// Stop after this many records when --all is set
    #[arg(long, requires = "all")]
    pub(crate) max_items: Option<usize>,
}

impl PageArgs {
    pub(crate) fn page(&self) -> Page {
        Page::new(self.limit, self.offset)
    }
}

/// Fetch one page, or every page with `--all`, and print the result.
///
/// A single page is printed with its pagination envelope; `--all` prints a
/// bare list.
pub(crate) async fn print_listing<T, F, Fut>(
    paging: &PageArgs,
    root: &str,
    format: Format,
    mut fetch: F,
) -> Result<()>
where
    T: Serialize,
    F: FnMut(Page) -> Fut,
    Fut: Future<Output = altpe::Result<Paginated<T>>>,
{
    if paging.all {
        let items = collect_all(paging.page(), paging.max_items, fetch).await?;
        info!(count = items.len(), "collected {root}");
        emit(&items, root, format)
    } else {
        let page = fetch(paging.page()).await?;
        emit(&page, root, format)
    }
}
