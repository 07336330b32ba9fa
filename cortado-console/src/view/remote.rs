//! Server-delegated list view
//!
//! The backend does the searching, filtering, sorting, and slicing; this
//! view sends the criteria as a page request and renders the returned
//! page verbatim. It never re-filters what the server already filtered,
//! and its totals come straight from the envelope.
//!
//! A failed refresh keeps the last-known page on screen; an overlapping
//! newer refresh wins over a slower older one via the generation guard.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::criteria::ListCriteria;
use super::engine::VisiblePage;
use super::generation::GenerationGuard;
use crate::error::{ConsoleError, ConsoleResult};
use cortado_client::ClientResult;
use shared::query::{Page, PageRequest};

/// Source of server-delegated pages
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> ClientResult<Page<T>>;
}

struct Inner<T> {
    criteria: RwLock<ListCriteria>,
    current: RwLock<Option<Page<T>>>,
    guard: GenerationGuard,
    fetcher: Arc<dyn PageFetcher<T>>,
}

/// A list view whose paging is delegated to the backend
pub struct ServerListView<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for ServerListView<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync> ServerListView<T> {
    pub fn new(fetcher: Arc<dyn PageFetcher<T>>, page_size: u32) -> Self {
        Self {
            inner: Arc::new(Inner {
                criteria: RwLock::new(ListCriteria::new(page_size)),
                current: RwLock::new(None),
                guard: GenerationGuard::new(),
                fetcher,
            }),
        }
    }

    /// Fetch the page for the current criteria.
    ///
    /// On success the page replaces the current one unless a newer
    /// refresh was issued in the meantime (`Stale`). On failure the
    /// last-known page stays on screen and the error is returned for
    /// the caller to surface.
    pub async fn refresh(&self) -> ConsoleResult<()> {
        let generation = self.inner.guard.begin();
        let request = self.inner.criteria.read().to_page_request();

        let page = self.inner.fetcher.fetch_page(&request).await?;

        if !self.inner.guard.try_commit(generation) {
            return Err(ConsoleError::Stale);
        }
        *self.inner.current.write() = Some(page);
        Ok(())
    }

    /// The page as the server returned it, verbatim
    pub fn visible(&self) -> VisiblePage<T> {
        match self.inner.current.read().as_ref() {
            Some(page) => VisiblePage {
                items: page.content.clone(),
                page: page.number,
                total_pages: page.total_pages,
                total_items: page.total_elements,
            },
            None => VisiblePage::empty(),
        }
    }

    /// Whether any page has been loaded yet
    pub fn is_loaded(&self) -> bool {
        self.inner.current.read().is_some()
    }

    // ── Criteria shortcuts (callers refresh afterwards) ─────────────

    pub fn set_search(&self, term: impl Into<String>) {
        self.inner.criteria.write().set_search(term);
    }

    pub fn set_filter(&self, field: impl Into<String>, value: Option<String>) {
        self.inner.criteria.write().set_filter(field, value);
    }

    pub fn sort_on(&self, key: impl Into<String>) {
        self.inner.criteria.write().sort_on(key);
    }

    pub fn goto_page(&self, page: u32) {
        self.inner.criteria.write().set_page(page);
    }

    pub fn criteria(&self) -> ListCriteria {
        self.inner.criteria.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Fake fetcher whose first call blocks until released, so a test
    /// can interleave completions deliberately.
    struct GatedFetcher {
        calls: AtomicUsize,
        gate: Notify,
    }

    #[async_trait]
    impl PageFetcher<String> for GatedFetcher {
        async fn fetch_page(&self, request: &PageRequest) -> ClientResult<Page<String>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                // First request is slow
                self.gate.notified().await;
            }
            Ok(Page::single(vec![format!(
                "result-for:{}",
                request.search.clone().unwrap_or_default()
            )]))
        }
    }

    #[tokio::test]
    async fn test_stale_response_never_clobbers_newer() {
        let fetcher = Arc::new(GatedFetcher {
            calls: AtomicUsize::new(0),
            gate: Notify::new(),
        });
        let view = ServerListView::new(fetcher.clone() as Arc<dyn PageFetcher<String>>, 10);

        // First fetch (slow) for "jo"
        view.set_search("jo");
        let slow = {
            let view = view.clone();
            tokio::spawn(async move { view.refresh().await })
        };
        // Let the slow fetch reach its gate
        tokio::task::yield_now().await;

        // Second fetch (fast) for the refined term commits first
        view.set_search("john");
        view.refresh().await.unwrap();
        assert_eq!(view.visible().items, vec!["result-for:john".to_string()]);

        // Release the slow fetch; it must be rejected as stale
        fetcher.gate.notify_one();
        let outcome = slow.await.unwrap();
        assert!(matches!(outcome, Err(ConsoleError::Stale)));
        assert_eq!(view.visible().items, vec!["result-for:john".to_string()]);
    }

    /// Succeeds on the first call, fails on every later one
    struct FlakyFetcher {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PageFetcher<String> for FlakyFetcher {
        async fn fetch_page(&self, _request: &PageRequest) -> ClientResult<Page<String>> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(Page::single(vec!["loaded".to_string()]))
            } else {
                Err(cortado_client::ClientError::Internal("boom".into()))
            }
        }
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_last_known_page() {
        let view = ServerListView::new(
            Arc::new(FlakyFetcher {
                calls: AtomicUsize::new(0),
            }) as Arc<dyn PageFetcher<String>>,
            10,
        );
        view.refresh().await.unwrap();
        assert_eq!(view.visible().items, vec!["loaded".to_string()]);

        let outcome = view.refresh().await;
        assert!(matches!(outcome, Err(ConsoleError::Backend(_))));
        // Last-known page is still on screen
        assert_eq!(view.visible().items, vec!["loaded".to_string()]);
    }
}
