//! Query-string building and page windows.

use altpe_types::MAX_PAGE_SIZE;
use std::fmt::Display;

/// Ordered query-string pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append `name=value`.
    pub fn push(&mut self, name: &str, value: impl Display) -> &mut Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    /// Append `name=value` when `value` is set.
    pub fn push_opt<T: Display>(&mut self, name: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Append a string filter verbatim when it is set and not empty.
    pub fn push_text(&mut self, name: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.push(name, value);
        }
        self
    }

    /// Append a boolean as `1`/`0` when it is set.
    pub fn push_flag(&mut self, name: &str, value: Option<bool>) -> &mut Self {
        self.push_opt(name, value.map(|b| if b { "1" } else { "0" }))
    }

    /// Append a list joined with `", "` when it is not empty.
    pub fn push_list<T: Display>(&mut self, name: &str, values: &[T]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            self.push(name, joined);
        }
        self
    }

    /// Append `limit` and `offset` for `page`.
    pub fn push_page(&mut self, page: Page) -> &mut Self {
        self.push("limit", page.limit).push("offset", page.offset)
    }

    /// Value of the first pair named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Whether no pairs have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// A `limit`/`offset` window over a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Records per page, always within `1..=100`.
    pub limit: u32,
    /// Records to skip.
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: MAX_PAGE_SIZE,
            offset: 0,
        }
    }
}

impl Page {
    /// Window of `limit` records starting at `offset`; `limit` is clamped to
    /// `1..=100`.
    #[must_use]
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            offset,
        }
    }

    /// First page of `limit` records.
    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self::new(limit, 0)
    }

    /// The window immediately after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use altpe_types::CountryCode;

    #[test]
    fn test_helpers() {
        let mut query = Query::new();
        query
            .push("order_by", "name")
            .push_opt::<u32>("missing", None)
            .push_text("query", Some(""))
            .push_text("uen", Some(" 2019 "))
            .push_flag("female_founder", Some(true))
            .push_flag("active", Some(false))
            .push_list("countries", &[CountryCode::Sgp, CountryCode::Mys])
            .push_list::<u32>("sectors", &[]);

        assert_eq!(query.get("order_by"), Some("name"));
        assert_eq!(query.get("missing"), None);
        assert_eq!(query.get("query"), None);
        assert_eq!(query.get("uen"), Some(" 2019 "));
        assert_eq!(query.get("female_founder"), Some("1"));
        assert_eq!(query.get("active"), Some("0"));
        assert_eq!(query.get("countries"), Some("SGP, MYS"));
        assert_eq!(query.get("sectors"), None);
    }

    #[test]
    fn test_page_clamping() {
        assert_eq!(Page::default(), Page::new(100, 0));
        assert_eq!(Page::new(0, 5).limit, 1);
        assert_eq!(Page::new(250, 5).limit, 100);
        assert_eq!(Page::first(20).next(), Page::new(20, 20));
        assert_eq!(Page::new(100, u32::MAX).next().offset, u32::MAX);
    }

    #[test]
    fn test_push_page() {
        let mut query = Query::new();
        query.push_page(Page::new(25, 50));
        assert_eq!(query.pairs(), &[
            ("limit".to_string(), "25".to_string()),
            ("offset".to_string(), "50".to_string()),
        ]);
    }
}
