//! The blocking client facade: fire-and-resync operations over the store.
//!
//! Each operation is a single transaction: issue the mutating request, wait
//! for it to settle, then fully re-fetch the authoritative list and replace
//! local state. There is no optimistic update and no partial merge; the
//! server's response order is the rendered order.

use uuid::Uuid;

use crate::error::ClientError;
use crate::store::{RefreshOutcome, TodoStore};
use crate::transport::UreqTransport;
use crate::types::Todo;

/// Owns the synchronization store and a transport, exposing the three
/// collection operations. Failures land in the store's error slot for the
/// view layer; see [`TodoListClient::take_error`].
#[derive(Debug)]
pub struct TodoListClient {
    store: TodoStore,
    transport: UreqTransport,
}

impl TodoListClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::default())
    }

    pub fn with_transport(base_url: &str, transport: UreqTransport) -> Self {
        Self {
            store: TodoStore::new(base_url),
            transport,
        }
    }

    /// The mirrored collection, in the server's order.
    pub fn todos(&self) -> &[Todo] {
        self.store.todos()
    }

    pub fn draft(&self) -> &str {
        self.store.draft()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.store.set_draft(text);
    }

    /// Most recent unreported failure, handed out exactly once.
    pub fn take_error(&mut self) -> Option<ClientError> {
        self.store.take_error()
    }

    /// Re-fetch the authoritative list and replace local state. On failure
    /// the prior list stays rendered and the error is recorded.
    pub fn refresh(&mut self) -> RefreshOutcome {
        let (token, request) = self.store.begin_refresh();
        let result = self.transport.execute(&request);
        self.store.complete_refresh(token, result)
    }

    /// Create an item with `title`, then resynchronize. Equivalent to
    /// setting the draft and submitting it.
    pub fn create(&mut self, title: &str) {
        self.store.set_draft(title);
        self.submit_draft();
    }

    /// Submit the current draft. An empty draft is rejected without a
    /// request. Otherwise the draft is cleared once the create settles,
    /// success or not, and a refresh follows.
    pub fn submit_draft(&mut self) {
        let request = match self.store.begin_create() {
            Ok(request) => request,
            Err(_) => return, // recorded in the error slot
        };
        let result = self.transport.execute(&request);
        self.store.complete_create(result);
        self.refresh();
    }

    /// Delete the item with `id`, then resynchronize. Deleting an item
    /// that is already gone is benign; the refresh reflects its absence.
    pub fn remove(&mut self, id: Uuid) {
        let request = self.store.begin_remove(id);
        let result = self.transport.execute(&request);
        self.store.complete_remove(result);
        self.refresh();
    }
}
