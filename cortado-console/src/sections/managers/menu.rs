//! Menu manager
//!
//! Fully server-delegated: the backend filters, sorts, and slices the
//! catalog; this screen renders the returned page and its totals
//! verbatim. Catalog mutations go through edit sessions and trigger a
//! refresh on success.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::warn;

use crate::error::{ConsoleError, ConsoleResult};
use crate::notify::Notifier;
use crate::session::EditSession;
use crate::view::{PageFetcher, ServerListView};
use cortado_client::{ClientResult, MenuBackend};
use shared::Capabilities;
use shared::models::{ItemType, MenuFilter, MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::query::{Page, PageRequest};

/// Page fetcher that forwards the menu filter set alongside the page
/// request
struct MenuPageFetcher {
    backend: Arc<dyn MenuBackend>,
    filter: RwLock<MenuFilter>,
}

#[async_trait]
impl PageFetcher<MenuItem> for MenuPageFetcher {
    async fn fetch_page(&self, request: &PageRequest) -> ClientResult<Page<MenuItem>> {
        let filter = self.filter.read().clone();
        self.backend.list_menu_items(&filter, request).await
    }
}

/// Menu management screen state
pub struct MenuSection {
    caps: Capabilities,
    notifier: Arc<dyn Notifier>,
    backend: Arc<dyn MenuBackend>,
    fetcher: Arc<MenuPageFetcher>,
    pub view: ServerListView<MenuItem>,
    editing: Option<EditSession<MenuItem>>,
}

impl MenuSection {
    pub fn new(
        caps: Capabilities,
        notifier: Arc<dyn Notifier>,
        backend: Arc<dyn MenuBackend>,
        page_size: u32,
    ) -> Self {
        let fetcher = Arc::new(MenuPageFetcher {
            backend: Arc::clone(&backend),
            filter: RwLock::new(MenuFilter::default()),
        });
        let view = ServerListView::new(
            Arc::clone(&fetcher) as Arc<dyn PageFetcher<MenuItem>>,
            page_size,
        );
        Self {
            caps,
            notifier,
            backend,
            fetcher,
            view,
            editing: None,
        }
    }

    /// Re-fetch the current page. A failed or superseded fetch keeps
    /// the last-known page on screen; only genuine failures surface a
    /// notice.
    pub async fn refresh(&self) {
        match self.view.refresh().await {
            Ok(()) => {}
            Err(ConsoleError::Stale) => {}
            Err(e) => {
                warn!(error = %e, "Menu page fetch failed");
                self.notifier.error("Could not load the menu; showing last known page");
            }
        }
    }

    /// Narrow the catalog by item type and reload
    pub async fn filter_by_type(&self, item_type: Option<ItemType>) {
        {
            let mut filter = self.fetcher.filter.write();
            filter.item_type = item_type;
        }
        self.view.goto_page(0);
        self.refresh().await;
    }

    /// Narrow the catalog by stock state and reload
    pub async fn filter_in_stock(&self, in_stock: Option<bool>) {
        {
            let mut filter = self.fetcher.filter.write();
            filter.in_stock = in_stock;
        }
        self.view.goto_page(0);
        self.refresh().await;
    }

    /// Search, then reload
    pub async fn search(&self, term: impl Into<String>) {
        self.view.set_search(term);
        self.refresh().await;
    }

    /// Sort, then reload
    pub async fn sort_on(&self, key: impl Into<String>) {
        self.view.sort_on(key);
        self.refresh().await;
    }

    /// Jump pages, then reload
    pub async fn goto_page(&self, page: u32) {
        self.view.goto_page(page);
        self.refresh().await;
    }

    /// Add a catalog item and reload the page
    pub async fn create(&mut self, payload: MenuItemCreate) -> ConsoleResult<MenuItem> {
        if !self.caps.manage_menu {
            return Err(ConsoleError::Forbidden("create menu item"));
        }
        let created = self.backend.create_menu_item(payload).await?;
        self.refresh().await;
        Ok(created)
    }

    /// Open the edit dialog for an item on the visible page
    pub fn begin_edit(&mut self, id: i64) -> ConsoleResult<()> {
        let item = self
            .view
            .visible()
            .items
            .into_iter()
            .find(|i| i.id == id)
            .ok_or_else(|| ConsoleError::NotFound(format!("menu item {id}")))?;
        self.editing = Some(EditSession::open(&item));
        Ok(())
    }

    pub fn edit_draft(&mut self, f: impl FnOnce(&mut MenuItem)) -> bool {
        self.editing.as_mut().is_some_and(|session| session.edit(f))
    }

    pub fn dialog_open(&self) -> bool {
        self.editing.as_ref().is_some_and(EditSession::is_open)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the open draft; the dialog closes only on confirmed success
    pub async fn save_edit(&mut self) -> ConsoleResult<MenuItem> {
        if !self.caps.manage_menu {
            return Err(ConsoleError::Forbidden("update menu item"));
        }
        let session = self
            .editing
            .as_mut()
            .ok_or_else(|| ConsoleError::Validation("no menu edit in progress".into()))?;

        let backend = Arc::clone(&self.backend);
        let outcome = session
            .save_with(|draft| async move {
                let payload = MenuItemUpdate {
                    name: Some(draft.name.clone()),
                    description: Some(draft.description.clone()),
                    price: Some(draft.price),
                    item_type: Some(draft.item_type),
                    image: draft.image.clone(),
                    tags: Some(draft.tags.clone()),
                    in_stock: Some(draft.in_stock),
                    is_on_sale: Some(draft.is_on_sale),
                };
                backend.update_menu_item(draft.id, payload).await
            })
            .await;

        match outcome {
            Ok(saved) => {
                self.editing = None;
                self.refresh().await;
                Ok(saved)
            }
            Err(e) => {
                self.notifier.error("Save failed; your changes are still in the form");
                Err(e)
            }
        }
    }

    /// Flip an item's availability
    pub async fn set_in_stock(&self, id: i64, in_stock: bool) -> ConsoleResult<MenuItem> {
        if !self.caps.manage_menu {
            return Err(ConsoleError::Forbidden("update menu stock"));
        }
        let updated = self.backend.set_in_stock(id, in_stock).await?;
        self.refresh().await;
        Ok(updated)
    }

    /// Remove an item from the catalog
    pub async fn delete(&self, id: i64) -> ConsoleResult<()> {
        if !self.caps.manage_menu {
            return Err(ConsoleError::Forbidden("delete menu item"));
        }
        self.backend.delete_menu_item(id).await?;
        self.refresh().await;
        Ok(())
    }
}
