//! Stateless request builder and response parser for the collection API.
//!
//! # Design
//! `TodoApi` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`;
//! a transport executes the round trip in between. This is the only module
//! that interprets HTTP status codes.
//!
//! The collection lives at `{base}/todos/` — the upstream API routes with a
//! trailing slash. Create and delete accept any 2xx because servers in the
//! wild answer 200 as readily as 201/204; only the list body is decoded.

use uuid::Uuid;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo};

/// Stateless view of the remote collection resource.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/todos/", self.base_url)
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &CreateTodo) -> Result<HttpRequest, ClientError> {
        let body =
            serde_json::to_string(input).map_err(|e| ClientError::Serialize(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Decode the authoritative list. The returned order is the server's
    /// order, verbatim.
    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Todo>, ClientError> {
        check_success(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ClientError::MalformedBody(e.to_string()))
    }

    /// Create only checks the status; the body is server detail the client
    /// never merges (state comes from the follow-up refresh).
    pub fn parse_create(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_success(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_success(&response)
    }
}

/// Map non-2xx status codes to the appropriate `ClientError` variant.
fn check_success(response: &HttpResponse) -> Result<(), ClientError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ClientError::NotFound);
    }
    Err(ClientError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
