//! Domain DTOs for the todo collection resource.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! the mock-server crate; integration tests catch any drift between the two.
//! Items are owned by the server — the client only ever holds a transient,
//! read-only copy decoded from the most recent list response.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item as returned by the server.
///
/// `id` is assigned by the server and opaque to the client; `title` is set
/// at creation and never edited by this client. Servers may attach extra
/// fields beyond these; unknown fields are ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    /// Server-side flag, carried verbatim for rendering. Absent on older
    /// servers, hence the default.
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for creating a new todo. The server assigns `id` and
/// every other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_decodes_minimal_shape() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","title":"Buy milk"}"#,
        )
        .unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn todo_ignores_unknown_server_fields() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","title":"A","completed":true,"description":null,"created_at":"2024-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(todo.title, "A");
        assert!(todo.completed);
    }

    #[test]
    fn todo_rejects_missing_id() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"title":"No id"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_serializes_title_only() {
        let input = CreateTodo {
            title: "Walk dog".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Walk dog"}));
    }
}
