//! List-query normalization.
//!
//! Out-of-range paging values are coerced rather than rejected, and blank
//! filter strings are dropped. The repository executes the normalized query
//! as-is, so every coercion rule lives here in one place.

use chrono::{DateTime, Utc};

use super::post::BlogPost;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// A normalized read query: conjunctive filters plus offset pagination.
///
/// Ordering is fixed at `created_at` descending and is not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub page: u64,
    pub page_size: u64,
    /// Case-sensitive substring match against the author field.
    pub author: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub to: Option<DateTime<Utc>>,
    /// Substring match against title OR content.
    pub search: Option<String>,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            author: None,
            from: None,
            to: None,
            search: None,
        }
    }
}

impl PostQuery {
    /// Build a query from raw request inputs.
    ///
    /// `page <= 0` is coerced to 1; `page_size <= 0` or `> 100` is coerced
    /// to 10. Blank or whitespace-only `author`/`search` strings are ignored.
    pub fn normalized(
        page: i64,
        page_size: i64,
        author: Option<String>,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        search: Option<String>,
    ) -> Self {
        let page = if page <= 0 { DEFAULT_PAGE } else { page as u64 };
        let page_size = if page_size <= 0 || page_size as u64 > MAX_PAGE_SIZE {
            DEFAULT_PAGE_SIZE
        } else {
            page_size as u64
        };

        Self {
            page,
            page_size,
            author: author.filter(|s| !s.trim().is_empty()),
            from,
            to,
            search: search.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Rows to skip before the requested page.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

/// One page of results plus the total count of rows matching the filters
/// before pagination was applied.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub total: u64,
    pub items: Vec<BlogPost>,
}
