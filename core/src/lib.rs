//! Synchronization client for a server-held todo collection.
//!
//! # Overview
//! The client mirrors a remote, ordered collection of todo items in memory
//! and exposes three operations — refresh, create, remove — that each
//! perform one HTTP round trip and then resynchronize local state from the
//! server's authoritative list. Local state is always a verbatim copy of
//! the most recent applied fetch, never hand-edited.
//!
//! # Design
//! - `protocol::TodoApi` is stateless: `build_*` produces plain-data
//!   requests, `parse_*` consumes plain-data responses, and nothing in
//!   between touches the network.
//! - `store::TodoStore` is the view-model: collection, draft, and error
//!   slot, with monotonic sequence tokens so a stale refresh can never
//!   clobber a fresher one.
//! - `transport::UreqTransport` performs the round trips with a bounded
//!   timeout and retry budget.
//! - `client::TodoListClient` wires the three together into blocking
//!   fire-and-resync operations.

pub mod client;
pub mod error;
pub mod http;
pub mod protocol;
pub mod store;
pub mod transport;
pub mod types;

pub use client::TodoListClient;
pub use error::ClientError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use protocol::TodoApi;
pub use store::{RefreshOutcome, RefreshToken, TodoStore};
pub use transport::UreqTransport;
pub use types::{CreateTodo, Todo};
