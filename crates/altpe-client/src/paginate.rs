//! Walking every page of a list endpoint.

use crate::{Result, query::Page};
use altpe_types::Paginated;
use std::future::Future;
use tracing::debug;

/// Fetch pages starting at `start` until the listing is exhausted.
///
/// Each following request advances `offset` by the `limit` the server
/// reported. Stops at the first empty page, once `offset` reaches
/// `total_records`, or when `max_items` records have been collected.
///
/// ```no_run
/// # async fn run(client: altpe_client::AltPeClient) -> altpe_client::Result<()> {
/// use altpe_client::{Page, paginate::collect_all, params::FundQuery};
///
/// let filters = FundQuery::default();
/// let funds = collect_all(Page::default(), Some(500), |page| client.funds(&filters, page)).await?;
/// println!("{} funds", funds.len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns the first error from `fetch`.
pub async fn collect_all<T, F, Fut>(
    start: Page,
    max_items: Option<usize>,
    mut fetch: F,
) -> Result<Vec<T>>
where
    F: FnMut(Page) -> Fut,
    Fut: Future<Output = Result<Paginated<T>>>,
{
    let mut items = Vec::new();
    let mut page = start;

    loop {
        let result = fetch(page).await?;
        let next = result.next_offset();
        debug!(
            offset = page.offset,
            received = result.len(),
            total = result.total_records,
            "fetched page"
        );
        items.extend(result.data);

        if let Some(max) = max_items
            && items.len() >= max
        {
            items.truncate(max);
            break;
        }

        match next {
            Some(offset) if offset > page.offset => page = Page::new(page.limit, offset),
            _ => break,
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn page_of(total: u64, limit: u32, offset: u32) -> Paginated<u64> {
        let end = (u64::from(offset) + u64::from(limit)).min(total);
        Paginated {
            total_records: total,
            no_of_pages: None,
            limit,
            offset,
            data: (u64::from(offset)..end).collect(),
        }
    }

    #[tokio::test]
    async fn test_walks_all_pages() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let items = collect_all(Page::first(10), None, |page| {
            seen.lock().unwrap().push(page.offset);
            async move { Ok(page_of(25, page.limit, page.offset)) }
        })
        .await
        .unwrap();

        assert_eq!(items, (0..25).collect::<Vec<_>>());
        assert_eq!(*seen.lock().unwrap(), vec![0, 10, 20]);
    }

    #[tokio::test]
    async fn test_respects_max_items() {
        let items = collect_all(Page::first(10), Some(15), |page| async move {
            Ok(page_of(100, page.limit, page.offset))
        })
        .await
        .unwrap();
        assert_eq!(items.len(), 15);
        assert_eq!(items.last(), Some(&14));
    }

    #[tokio::test]
    async fn test_stops_on_empty_page() {
        let mut calls = 0;
        let items: Vec<u64> = collect_all(Page::default(), None, |page| {
            calls += 1;
            async move {
                Ok(Paginated {
                    total_records: 1000,
                    no_of_pages: None,
                    limit: page.limit,
                    offset: page.offset,
                    data: Vec::new(),
                })
            }
        })
        .await
        .unwrap();
        assert!(items.is_empty());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_propagates_errors() {
        let result: Result<Vec<u64>> = collect_all(Page::default(), None, |_| async {
            Err(crate::AltPeError::MissingCredentials)
        })
        .await;
        assert!(result.is_err());
    }
}
