//! Client-side list engine
//!
//! Filters, searches, sorts, and slices an in-memory collection into the
//! visible page. Used only by client-side views; server-delegated views
//! trust the backend's slice and never pass through here.

use std::cmp::Ordering;

use serde::Serialize;

use super::criteria::ListCriteria;
use shared::query::SortDir;

/// A sortable field value
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Compared case-insensitively
    Text(String),
    /// Compared numerically
    Number(f64),
}

impl SortValue {
    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            // Mixed types keep input order
            _ => Ordering::Equal,
        }
    }
}

/// An entity a list view knows how to search, filter, and sort
pub trait Listable {
    /// Fields matched by free-text search
    fn search_text(&self) -> Vec<String>;

    /// Value of a categorical filter field
    fn filter_value(&self, field: &str) -> Option<String>;

    /// Value of a sort key
    fn sort_value(&self, key: &str) -> Option<SortValue>;
}

/// One rendered page of a list view
#[derive(Debug, Clone, Serialize)]
pub struct VisiblePage<T> {
    pub items: Vec<T>,
    /// Page index actually shown (after clamping)
    pub page: u32,
    pub total_pages: u32,
    /// Item count after search and filters
    pub total_items: u64,
}

impl<T> VisiblePage<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            total_pages: 0,
            total_items: 0,
        }
    }
}

/// Produce the visible page for a client-side list view.
///
/// Filters are exact-match and ANDed, search is a case-insensitive
/// substring over the entity's search fields, the sort is stable, and
/// the page index is clamped to the last available page so a request
/// past the end shows the final page rather than nothing.
pub fn apply<T: Listable + Clone>(items: &[T], criteria: &ListCriteria) -> VisiblePage<T> {
    let mut selected: Vec<&T> = items
        .iter()
        .filter(|item| matches_filters(*item, criteria))
        .filter(|item| matches_search(*item, criteria))
        .collect();

    if let Some(key) = &criteria.sort_by {
        selected.sort_by(|a, b| {
            let ordering = match (a.sort_value(key), b.sort_value(key)) {
                (Some(va), Some(vb)) => va.compare(&vb),
                // Entities without the key keep their input order
                _ => Ordering::Equal,
            };
            match criteria.sort_dir {
                SortDir::Asc => ordering,
                SortDir::Desc => ordering.reverse(),
            }
        });
    }

    let total_items = selected.len() as u64;
    let page_size = criteria.page_size.max(1) as usize;
    let total_pages = selected.len().div_ceil(page_size) as u32;
    let page = if total_pages == 0 {
        0
    } else {
        criteria.page.min(total_pages - 1)
    };

    let start = page as usize * page_size;
    let items = selected
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    VisiblePage {
        items,
        page,
        total_pages,
        total_items,
    }
}

fn matches_filters<T: Listable>(item: &T, criteria: &ListCriteria) -> bool {
    criteria
        .filters
        .iter()
        .all(|(field, value)| item.filter_value(field).as_deref() == Some(value.as_str()))
}

fn matches_search<T: Listable>(item: &T, criteria: &ListCriteria) -> bool {
    let term = criteria.search.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    item.search_text()
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}
