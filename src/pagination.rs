//! Paged List Queries
//!
//! `ListQuery` is the state behind every paginated admin screen. Any change
//! to the search term or a filter sends the user back to page one.
//!
//! `RequestSeq` hands out tickets so a screen can drop responses for queries
//! it has since replaced.

use std::cell::Cell;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub filter: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListQuery {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            search: String::new(),
            filter: String::new(),
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 1;
    }

    /// Moves to `page`, clamped to `1..=total_pages`.
    pub fn go_to(&mut self, page: u32, total_pages: u32) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Query parameters, with the filter sent under `filter_key`.
    ///
    /// Blank search and filter values are omitted.
    pub fn to_params(&self, filter_key: &str) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("per_page".to_string(), self.per_page.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search".to_string(), search.to_string()));
        }
        let filter = self.filter.trim();
        if !filter.is_empty() {
            params.push((filter_key.to_string(), filter.to_string()));
        }
        params
    }
}

pub fn has_prev(page: u32) -> bool {
    page > 1
}

pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

/// Monotonic request counter.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: Cell<u64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request; earlier tickets become stale.
    pub fn next(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_resets_page() {
        let mut query = ListQuery::default();
        query.go_to(4, 9);
        assert_eq!(query.page, 4);

        query.set_search("rama");
        assert_eq!(query.page, 1);
        assert_eq!(
            query.to_params("role"),
            vec![
                ("page".to_string(), "1".to_string()),
                ("per_page".to_string(), "10".to_string()),
                ("search".to_string(), "rama".to_string()),
            ]
        );

        query.go_to(3, 9);
        query.set_filter("admin");
        assert_eq!(query.page, 1);
        assert!(query
            .to_params("role")
            .contains(&("role".to_string(), "admin".to_string())));
    }

    #[test]
    fn test_go_to_clamps() {
        let mut query = ListQuery::default();
        query.go_to(0, 5);
        assert_eq!(query.page, 1);
        query.go_to(12, 5);
        assert_eq!(query.page, 5);
        assert!(!has_next(query.page, 5));
        assert!(has_prev(query.page));
        query.go_to(3, 0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_stale_tickets() {
        let seq = RequestSeq::new();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(!seq.is_current(second + 1));
    }
}
