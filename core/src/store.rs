//! The client-side synchronization store.
//!
//! # Design
//! `TodoStore` is the view-model: it owns the mirrored collection, the draft
//! input text, and the last unreported error. It is a pure state machine —
//! every operation is split into a `begin_*` method that validates and
//! produces an `HttpRequest`, and a `complete_*` method that consumes the
//! settled result. A transport performs the round trip in between, so the
//! whole synchronization contract is testable without IO.
//!
//! # Refresh races
//! Nothing stops a caller from having several refreshes in flight at once
//! (two quick deletes each trigger one). Each `begin_refresh` therefore
//! issues a monotonically increasing token, and `complete_refresh` applies
//! a result only if its token is still the latest issued. A slow, stale
//! refresh can never clobber a fresher one; its response is discarded
//! whole, error included.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse};
use crate::protocol::TodoApi;
use crate::types::{CreateTodo, Todo};

/// Identifies one issued refresh. Only the refresh holding the latest token
/// may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshToken(u64);

/// What `complete_refresh` did with a settled response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The collection was replaced with the response's list.
    Applied,
    /// A newer refresh was issued before this one settled; the response
    /// was discarded and no state changed.
    Superseded,
    /// The round trip or decode failed; prior state kept, error recorded.
    Failed,
}

/// View-model state for the todo list: the mirrored collection, the draft
/// for the next create, and a single-slot error for the view layer.
#[derive(Debug)]
pub struct TodoStore {
    api: TodoApi,
    todos: Vec<Todo>,
    draft: String,
    latest_refresh: u64,
    last_error: Option<ClientError>,
}

impl TodoStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: TodoApi::new(base_url),
            todos: Vec::new(),
            draft: String::new(),
            latest_refresh: 0,
            last_error: None,
        }
    }

    /// The mirrored collection, in the server's order. Always a verbatim
    /// copy of the most recent applied refresh.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Hand the most recent unreported error to the view layer. Each error
    /// is reported exactly once.
    pub fn take_error(&mut self) -> Option<ClientError> {
        self.last_error.take()
    }

    fn record(&mut self, err: ClientError) -> ClientError {
        self.last_error = Some(err.clone());
        err
    }

    /// Issue a new refresh. The returned token supersedes every earlier
    /// one still in flight.
    pub fn begin_refresh(&mut self) -> (RefreshToken, HttpRequest) {
        self.latest_refresh += 1;
        debug!(token = self.latest_refresh, "refresh issued");
        (RefreshToken(self.latest_refresh), self.api.build_list())
    }

    /// Settle a refresh. Replaces the collection only when `token` is the
    /// latest issued and the response decodes; otherwise prior state is
    /// kept untouched.
    pub fn complete_refresh(
        &mut self,
        token: RefreshToken,
        result: Result<HttpResponse, ClientError>,
    ) -> RefreshOutcome {
        if token.0 != self.latest_refresh {
            debug!(
                token = token.0,
                latest = self.latest_refresh,
                "discarding superseded refresh response"
            );
            return RefreshOutcome::Superseded;
        }
        match result.and_then(|response| self.api.parse_list(response)) {
            Ok(todos) => {
                debug!(token = token.0, count = todos.len(), "refresh applied");
                self.todos = todos;
                RefreshOutcome::Applied
            }
            Err(err) => {
                warn!(token = token.0, error = %err, "refresh failed, keeping prior list");
                self.record(err);
                RefreshOutcome::Failed
            }
        }
    }

    /// Build a create request from the draft. An empty (all-whitespace)
    /// draft is rejected here and never reaches the wire.
    pub fn begin_create(&mut self) -> Result<HttpRequest, ClientError> {
        if self.draft.trim().is_empty() {
            return Err(self.record(ClientError::EmptyTitle));
        }
        let input = CreateTodo {
            title: self.draft.clone(),
        };
        self.api.build_create(&input).map_err(|err| self.record(err))
    }

    /// Settle a create. The draft is cleared whether the server accepted
    /// or not; a follow-up refresh resynchronizes the collection either
    /// way.
    pub fn complete_create(&mut self, result: Result<HttpResponse, ClientError>) {
        self.draft.clear();
        if let Err(err) = result.and_then(|response| self.api.parse_create(response)) {
            warn!(error = %err, "create failed");
            self.record(err);
        }
    }

    pub fn begin_remove(&self, id: Uuid) -> HttpRequest {
        self.api.build_delete(id)
    }

    /// Settle a remove. A 404 means the item was already gone — benign,
    /// the follow-up refresh reflects the absence.
    pub fn complete_remove(&mut self, result: Result<HttpResponse, ClientError>) {
        match result.and_then(|response| self.api.parse_delete(response)) {
            Ok(()) => {}
            Err(ClientError::NotFound) => {
                debug!("remove hit an already-deleted item");
            }
            Err(err) => {
                warn!(error = %err, "remove failed");
                self.record(err);
            }
        }
    }
}
