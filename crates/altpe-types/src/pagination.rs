//! Response envelopes and pagination metadata.

use serde::{Deserialize, Serialize};

/// Upper bound the server enforces on `limit`.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Single-record wrapper: `{"data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwrap the payload.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// One page of a list endpoint.
///
/// The company/investor/people endpoints nest this inside an [`Envelope`] and
/// report `no_of_pages`; the fund and capital-provider endpoints return it at
/// the top level without a page count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Total number of records matching the query.
    pub total_records: u64,
    /// Number of pages, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_of_pages: Option<u64>,
    /// Page size used for this page.
    pub limit: u32,
    /// Offset of the first record on this page.
    pub offset: u32,
    /// Records on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Offset of the page after this one, if there is one.
    #[must_use]
    pub fn next_offset(&self) -> Option<u32> {
        if self.data.is_empty() {
            return None;
        }
        let step = if self.limit == 0 {
            u32::try_from(self.data.len()).unwrap_or(u32::MAX)
        } else {
            self.limit
        };
        let next = self.offset.saturating_add(step);
        (u64::from(next) < self.total_records).then_some(next)
    }

    /// Whether more records exist past this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_offset().is_some()
    }

    /// Total number of pages at this page size.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        self.no_of_pages.unwrap_or_else(|| {
            if self.limit == 0 {
                0
            } else {
                self.total_records.div_ceil(u64::from(self.limit))
            }
        })
    }

    /// Iterate over the records on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Transform the records while keeping the pagination metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            total_records: self.total_records,
            no_of_pages: self.no_of_pages,
            limit: self.limit,
            offset: self.offset,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Paginated<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
