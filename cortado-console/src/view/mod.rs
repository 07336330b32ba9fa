//! List-view machinery
//!
//! Every list screen runs on the same parts: [`ListCriteria`] describes
//! what the user asked for, the engine in [`engine`] produces the
//! visible page for client-side views, and [`ServerListView`] delegates
//! the whole query to the backend and renders its page verbatim. The two
//! modes never mix: client-side views slice locally, server views never
//! re-filter.

pub mod criteria;
pub mod engine;
pub mod entities;
pub mod generation;
pub mod list;
pub mod remote;

pub use criteria::ListCriteria;
pub use engine::{Listable, SortValue, VisiblePage};
pub use generation::GenerationGuard;
pub use list::ListView;
pub use remote::{PageFetcher, ServerListView};

/// Common surface of the two pagination modes
///
/// Rendering code only needs the current page; which mode produced it
/// (local slicing or a trusted server page) stays an implementation
/// detail of the concrete view.
pub trait PaginationStrategy<T> {
    fn visible_page(&self) -> VisiblePage<T>;
}

impl<T: Listable + Clone> PaginationStrategy<T> for ListView<T> {
    fn visible_page(&self) -> VisiblePage<T> {
        self.visible()
    }
}

impl<T: Clone + Send + Sync> PaginationStrategy<T> for ServerListView<T> {
    fn visible_page(&self) -> VisiblePage<T> {
        self.visible()
    }
}
