use serde::{Deserialize, Serialize};

/// Pagination block returned by every list endpoint (pages are 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
            total: 0,
            pages: 0,
        }
    }
}

impl Pagination {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_bounds() {
        let first = Pagination { page: 1, per_page: 20, total: 45, pages: 3 };
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = Pagination { page: 3, ..first };
        assert!(last.has_prev());
        assert!(!last.has_next());

        let empty = Pagination::default();
        assert!(!empty.has_prev());
        assert!(!empty.has_next());
    }
}
