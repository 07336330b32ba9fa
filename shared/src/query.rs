//! Query and pagination types
//!
//! `PageRequest` is the client side of a paged list query; `Page` mirrors
//! the backend's paginated envelope verbatim. Scalar endpoints wrap their
//! value in `Envelope`.

use serde::{Deserialize, Serialize};

/// Default page size for list views
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// Flip the direction
    pub fn toggled(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    /// Wire value for the `sortDir` query param
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Paged list query sent to the backend
///
/// Serialized as query params: `page`, `size`, `sortBy`, `sortDir`,
/// `search`, plus one param per categorical filter.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    /// Page index (0-based, matching the backend envelope's `number`)
    pub page: u32,
    /// Items per page
    pub size: u32,
    /// Sort field
    pub sort_by: Option<String>,
    /// Sort direction
    pub sort_dir: SortDir,
    /// Free-text search term
    pub search: Option<String>,
    /// Categorical filters, exact match, ANDed
    pub filters: Vec<(String, String)>,
}

impl PageRequest {
    /// First page with the default size
    pub fn new() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: None,
            sort_dir: SortDir::Asc,
            search: None,
            filters: Vec::new(),
        }
    }

    /// Set page and size
    pub fn paginate(mut self, page: u32, size: u32) -> Self {
        self.page = page;
        self.size = size;
        self
    }

    /// Set the sort key
    pub fn order_by(mut self, field: impl Into<String>, dir: SortDir) -> Self {
        self.sort_by = Some(field.into());
        self.sort_dir = dir;
        self
    }

    /// Set the free-text search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Add a categorical filter
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Render as backend query params
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        if let Some(sort_by) = &self.sort_by {
            params.push(("sortBy".to_string(), sort_by.clone()));
            params.push(("sortDir".to_string(), self.sort_dir.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search".to_string(), search.clone()));
        }
        for (field, value) in &self.filters {
            params.push((field.clone(), value.clone()));
        }
        params
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// One page of a backend list response
///
/// Wire mirror of the backend's envelope:
/// `{content, totalElements, totalPages, number, first, last}`.
/// Server-delegated views trust these totals verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Page index (0-based)
    pub number: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    /// Empty first page
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            first: true,
            last: true,
        }
    }

    /// Build a page from a full item set (single unsliced page)
    pub fn single(content: Vec<T>) -> Self {
        let total = content.len() as u64;
        Self {
            content,
            total_elements: total,
            total_pages: 1,
            number: 0,
            first: true,
            last: true,
        }
    }

    /// Map the content, keeping the paging metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            first: self.first,
            last: self.last,
        }
    }
}

/// Scalar response wrapper: `{success, data}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Unwrap the payload, treating `success == false` or missing data
    /// as an error message
    pub fn into_data(self) -> Result<T, String> {
        if !self.success {
            return Err(self.error.unwrap_or_else(|| "request failed".to_string()));
        }
        self.data.ok_or_else(|| "missing response data".to_string())
    }
}
