//! List criteria
//!
//! What the user asked a list view to show. Any change to search,
//! filters, or sort snaps the view back to the first page.

use shared::query::{PageRequest, SortDir};

/// Search, filter, sort, and paging state for one list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListCriteria {
    /// Free-text search term (case-insensitive substring match)
    pub search: String,
    /// Categorical filters, exact match, ANDed
    pub filters: Vec<(String, String)>,
    /// Sort key
    pub sort_by: Option<String>,
    pub sort_dir: SortDir,
    /// Page index (0-based); clamped against the result at render time
    pub page: u32,
    pub page_size: u32,
}

impl ListCriteria {
    pub fn new(page_size: u32) -> Self {
        Self {
            search: String::new(),
            filters: Vec::new(),
            sort_by: None,
            sort_dir: SortDir::Asc,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Set the search term; resets to the first page on change
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search {
            self.search = term;
            self.page = 0;
        }
    }

    /// Set or clear one categorical filter; resets to the first page
    pub fn set_filter(&mut self, field: impl Into<String>, value: Option<String>) {
        let field = field.into();
        self.filters.retain(|(f, _)| *f != field);
        if let Some(value) = value {
            self.filters.push((field, value));
        }
        self.page = 0;
    }

    /// Drop all filters; resets to the first page
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 0;
    }

    /// Sort on a key. Sorting on the current key toggles the direction;
    /// a new key starts ascending. Either way the view resets to the
    /// first page.
    pub fn sort_on(&mut self, key: impl Into<String>) {
        let key = key.into();
        if self.sort_by.as_deref() == Some(key.as_str()) {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_by = Some(key);
            self.sort_dir = SortDir::Asc;
        }
        self.page = 0;
    }

    /// Jump to a page (clamping happens against the actual result)
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Render as a backend page request (server-delegated mode)
    pub fn to_page_request(&self) -> PageRequest {
        let mut request = PageRequest::new().paginate(self.page, self.page_size);
        if let Some(sort_by) = &self.sort_by {
            request = request.order_by(sort_by.clone(), self.sort_dir);
        }
        if !self.search.trim().is_empty() {
            request = request.search(self.search.trim());
        }
        for (field, value) in &self.filters {
            request = request.filter(field.clone(), value.clone());
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_change_resets_page() {
        let mut criteria = ListCriteria::new(10);
        criteria.set_page(3);
        criteria.set_search("john");
        assert_eq!(criteria.page, 0);

        // Same term again keeps the page
        criteria.set_page(2);
        criteria.set_search("john");
        assert_eq!(criteria.page, 2);
    }

    #[test]
    fn test_filter_replace_and_clear() {
        let mut criteria = ListCriteria::new(10);
        criteria.set_filter("status", Some("active".into()));
        criteria.set_filter("status", Some("inactive".into()));
        assert_eq!(criteria.filters, vec![("status".to_string(), "inactive".to_string())]);

        criteria.set_filter("status", None);
        assert!(criteria.filters.is_empty());
    }

    #[test]
    fn test_sort_toggles_on_same_key() {
        let mut criteria = ListCriteria::new(10);
        criteria.sort_on("name");
        assert_eq!(criteria.sort_dir, SortDir::Asc);
        criteria.sort_on("name");
        assert_eq!(criteria.sort_dir, SortDir::Desc);
        criteria.sort_on("price");
        assert_eq!(criteria.sort_dir, SortDir::Asc);
    }

    #[test]
    fn test_to_page_request_skips_blank_search() {
        let mut criteria = ListCriteria::new(10);
        criteria.set_search("   ");
        let request = criteria.to_page_request();
        assert_eq!(request.search, None);
    }
}
