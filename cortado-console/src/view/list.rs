//! Client-side list view
//!
//! Owns the fully fetched (or locally seeded) collection and produces
//! pages through the engine. The source collection is authoritative;
//! the visible page is always derived on demand.

use super::criteria::ListCriteria;
use super::engine::{self, Listable, VisiblePage};

/// A list view over an in-memory collection
#[derive(Debug, Clone)]
pub struct ListView<T> {
    items: Vec<T>,
    pub criteria: ListCriteria,
}

impl<T: Listable + Clone> ListView<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            criteria: ListCriteria::new(page_size),
        }
    }

    /// Replace the whole collection (e.g. after a fetch)
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The page the user currently sees
    pub fn visible(&self) -> VisiblePage<T> {
        engine::apply(&self.items, &self.criteria)
    }

    // ── Criteria shortcuts ──────────────────────────────────────────

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.set_search(term);
    }

    pub fn set_filter(&mut self, field: impl Into<String>, value: Option<String>) {
        self.criteria.set_filter(field, value);
    }

    pub fn sort_on(&mut self, key: impl Into<String>) {
        self.criteria.sort_on(key);
    }

    pub fn goto_page(&mut self, page: u32) {
        self.criteria.set_page(page);
    }

    pub fn next_page(&mut self) {
        self.criteria.set_page(self.criteria.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.criteria.set_page(self.criteria.page.saturating_sub(1));
    }
}
