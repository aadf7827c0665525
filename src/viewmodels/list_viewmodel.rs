// ============================================================================
// LIST VIEWMODEL - In-memory resource list with refresh policy
// ============================================================================
// Holds the rows of one resource screen. Every `load()` takes a fresh
// generation number; a response that comes back after a newer load started
// is dropped. After a mutation the list is either patched in place
// (`Optimistic`) or fetched again (`Reload`), as declared by the screen.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{RecordId, Resource};
use crate::services::api_client::{ApiClient, ApiError, ApiRequest};
use crate::services::endpoints::ResourceEndpoints;
use crate::state::{Notification, PaginationCursor, ReactiveState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStrategy {
    Optimistic,
    Reload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Created,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Everything on one page
    All,
    /// Backend pages; `page` (and the search term) go in the query
    Server { search_param: Option<&'static str> },
    /// Rows are sliced locally
    Client,
}

pub struct ListController<R: Resource> {
    client: ApiClient,
    notification: Rc<Notification>,
    endpoints: ResourceEndpoints,
    strategy: RefreshStrategy,
    page_mode: PageMode,
    label: &'static str,
    params: RefCell<Vec<(String, String)>>,
    search: RefCell<String>,
    items: ReactiveState<Vec<R>>,
    loading: ReactiveState<bool>,
    cursor: RefCell<PaginationCursor>,
    generation: Cell<u64>,
}

impl<R: Resource> ListController<R> {
    pub fn new(
        client: ApiClient,
        notification: Rc<Notification>,
        endpoints: ResourceEndpoints,
        strategy: RefreshStrategy,
        label: &'static str,
    ) -> Self {
        Self {
            client,
            notification,
            endpoints,
            strategy,
            page_mode: PageMode::All,
            label,
            params: RefCell::new(Vec::new()),
            search: RefCell::new(String::new()),
            items: ReactiveState::new(Vec::new()),
            loading: ReactiveState::new(false),
            cursor: RefCell::new(PaginationCursor::new(10)),
            generation: Cell::new(0),
        }
    }

    pub fn with_paging(mut self, mode: PageMode, page_size: u32) -> Self {
        self.page_mode = mode;
        self.cursor = RefCell::new(PaginationCursor::new(page_size));
        self
    }

    /// Path parameter used by the list endpoint (`:courseId`, `:bountyId`, ...)
    pub fn with_param(self, name: &str, value: impl ToString) -> Self {
        self.set_param(name, value);
        self
    }

    pub fn set_param(&self, name: &str, value: impl ToString) {
        let mut params = self.params.borrow_mut();
        params.retain(|(key, _)| key != name);
        params.push((name.to_string(), value.to_string()));
    }

    pub fn param(&self, name: &str) -> Option<String> {
        self.params
            .borrow()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    pub fn strategy(&self) -> RefreshStrategy {
        self.strategy
    }

    pub fn items(&self) -> Vec<R> {
        self.items.get()
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, id: &RecordId) -> Option<R> {
        self.items.with(|items| items.iter().find(|item| item.id() == id).cloned())
    }

    /// Forget the rows, e.g. on sign-out
    pub fn clear(&self) {
        self.generation.set(self.generation.get() + 1);
        self.loading.set(false);
        self.items.set(Vec::new());
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn cursor(&self) -> PaginationCursor {
        *self.cursor.borrow()
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) -> usize {
        self.items.subscribe(callback)
    }

    /// Rows accepted by `predicate`, in list order
    pub fn filtered<P: Fn(&R) -> bool>(&self, predicate: P) -> Vec<R> {
        self.items
            .with(|items| items.iter().filter(|item| predicate(item)).cloned().collect())
    }

    /// Rows to draw. Client mode slices the filtered rows to the current page.
    pub fn page_rows<P: Fn(&R) -> bool>(&self, predicate: P) -> Vec<R> {
        let rows = self.filtered(predicate);
        match self.page_mode {
            PageMode::Client => {
                let mut cursor = self.cursor.borrow_mut();
                cursor.set_total(rows.len() as u64);
                cursor.slice(&rows).to_vec()
            }
            _ => rows,
        }
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    /// Fetch the list and show the server's message, if any
    pub async fn load(&self) -> bool {
        self.fetch(true).await
    }

    /// Fetch the list without announcing it (after a mutation)
    pub async fn refresh(&self) -> bool {
        self.fetch(false).await
    }

    async fn fetch(&self, announce: bool) -> bool {
        let Some(endpoint) = self.endpoints.list else {
            log::warn!("⚠️ [LIST] {} has no list endpoint", self.label);
            return false;
        };

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.loading.set(true);

        let mut request = ApiRequest::get(endpoint.path).params(self.params.borrow().iter());
        if let PageMode::Server { search_param } = self.page_mode {
            request = request.query("page", self.cursor.borrow().page);
            let search = self.search.borrow().trim().to_string();
            if let (Some(name), false) = (search_param, search.is_empty()) {
                request = request.query(name, search);
            }
        }

        log::info!("📋 [LIST] Loading {}", self.label);
        let result = self.client.send(request).await;

        if generation != self.generation.get() {
            log::debug!("⏭️ [LIST] Dropping stale {} response", self.label);
            return false;
        }
        self.loading.set(false);

        let pointer = endpoint.pointer.unwrap_or("");
        let decoded = result.and_then(|envelope| {
            let rows = envelope
                .list::<R>(pointer)
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok((envelope, rows))
        });

        match decoded {
            Ok((envelope, rows)) => {
                log::info!("✅ [LIST] {} {} loaded", rows.len(), self.label);
                {
                    let mut cursor = self.cursor.borrow_mut();
                    match (self.page_mode, self.endpoints.total) {
                        (PageMode::Server { .. }, Some(total)) => {
                            cursor.set_total(envelope.count(total).unwrap_or(0))
                        }
                        _ => cursor.set_total(rows.len() as u64),
                    }
                }
                self.items.set(rows);
                if announce {
                    if let Some(message) = envelope.message {
                        self.notification.show(message);
                    }
                }
                true
            }
            Err(error) => {
                log::error!("❌ [LIST] Loading {} failed: {}", self.label, error);
                self.notification
                    .show(error.user_message(&format!("Failed to load {}.", self.label)));
                false
            }
        }
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Fold a saved record into the list. Without a record the list is refetched.
    pub async fn apply_mutation(&self, kind: MutationKind, record: Option<R>) {
        match (self.strategy, record) {
            (RefreshStrategy::Optimistic, Some(record)) => self.items.update(|items| {
                let existing = items.iter().position(|item| item.id() == record.id());
                match (kind, existing) {
                    (MutationKind::Updated, Some(index)) => items[index] = record,
                    _ => items.push(record),
                }
            }),
            _ => {
                self.refresh().await;
            }
        }
    }

    pub async fn apply_delete(&self, id: &RecordId) {
        match self.strategy {
            RefreshStrategy::Optimistic => {
                self.items.update(|items| items.retain(|item| item.id() != id))
            }
            RefreshStrategy::Reload => {
                self.refresh().await;
            }
        }
    }

    /// Delete on the server, then drop the row
    pub async fn delete(&self, id: &RecordId) -> bool {
        let Some(path) = self.endpoints.delete else {
            log::warn!("⚠️ [LIST] {} cannot be deleted", self.label);
            return false;
        };
        let request = ApiRequest::delete(path)
            .params(self.params.borrow().iter())
            .param("id", id);

        match self.client.send(request).await {
            Ok(envelope) => {
                log::info!("🗑️ [LIST] Deleted {} {}", self.label, id);
                self.apply_delete(id).await;
                self.notification.show(
                    envelope
                        .message
                        .unwrap_or_else(|| format!("Deleted from {} successfully.", self.label)),
                );
                true
            }
            Err(error) => {
                log::error!("❌ [LIST] Deleting {} {} failed: {}", self.label, id, error);
                self.notification
                    .show(error.user_message(&format!("Failed to delete from {}.", self.label)));
                false
            }
        }
    }

    // ------------------------------------------------------------------------
    // Paging and search
    // ------------------------------------------------------------------------

    /// New search term; goes back to page 1
    pub fn set_search(&self, term: &str) {
        *self.search.borrow_mut() = term.to_string();
        self.cursor.borrow_mut().reset();
    }

    pub fn search(&self) -> String {
        self.search.borrow().clone()
    }

    /// Move forward a page; server-paged lists fetch it. No-op on the last page.
    pub async fn next_page(&self) -> bool {
        let moved = self.cursor.borrow_mut().next();
        if moved && matches!(self.page_mode, PageMode::Server { .. }) {
            self.load().await;
        }
        moved
    }

    pub async fn prev_page(&self) -> bool {
        let moved = self.cursor.borrow_mut().prev();
        if moved && matches!(self.page_mode, PageMode::Server { .. }) {
            self.load().await;
        }
        moved
    }
}
