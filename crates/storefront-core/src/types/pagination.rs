//! Offset/limit pagination types for product listings.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 24;
/// Maximum page size.
pub const MAX_PAGE_SIZE: u64 = 96;

/// Request window for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of items to skip.
    #[serde(default)]
    pub offset: u64,
    /// Number of items to return.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a page request, clamping `limit` into `1..=MAX_PAGE_SIZE`.
    pub fn new(offset: u64, limit: u64) -> Self {
        Self::bounded(offset, limit, MAX_PAGE_SIZE)
    }

    /// Create a page request with an explicit upper bound on `limit`.
    pub fn bounded(offset: u64, limit: u64, max_limit: u64) -> Self {
        Self {
            offset,
            limit: limit.clamp(1, max_limit.max(1)),
        }
    }

    /// The same window size starting at a different offset.
    pub fn at(self, offset: u64) -> Self {
        Self { offset, ..self }
    }

    /// The window following this one.
    pub fn next(self) -> Self {
        self.at(self.offset + self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// The items in this window.
    pub items: Vec<T>,
    /// Total number of matching items.
    pub total: u64,
    /// Offset of the first item.
    pub offset: u64,
    /// Requested window size.
    pub limit: u64,
    /// Whether items exist past this window.
    pub has_next: bool,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, total: u64, page: PageRequest) -> Self {
        Self {
            has_next: page.offset + (items.len() as u64) < total,
            items,
            total,
            offset: page.offset,
            limit: page.limit,
        }
    }
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(PageRequest::new(0, 0).limit, 1);
        assert_eq!(PageRequest::new(0, 1000).limit, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::bounded(0, 50, 10).limit, 10);
    }

    #[test]
    fn test_next_window() {
        let page = PageRequest::new(0, 10).next();
        assert_eq!(page.offset, 10);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_has_next() {
        let page = PageRequest::new(0, 2);
        let resp = PageResponse::new(vec![1, 2], 5, page);
        assert!(resp.has_next);
        let last = PageResponse::new(vec![5], 5, PageRequest::new(4, 2));
        assert!(!last.has_next);
    }

    #[test]
    fn test_response_wire_names_are_camel_case() {
        let resp = PageResponse::new(vec![1], 3, PageRequest::new(0, 1));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["hasNext"], true);
        assert!(json.get("has_next").is_none());
    }
}
