//! HTTP requests and responses as plain data.
//!
//! # Design
//! The protocol layer builds `HttpRequest` values and parses `HttpResponse`
//! values without ever touching the network; a transport (or a test) sits
//! between the two and performs the actual round trip. This keeps every
//! status-code and body decision deterministic and unit-testable.
//!
//! All fields are owned (`String`, `Vec`) so values can be moved freely
//! between the store, the transport, and test code.

/// HTTP method for a request. Only the methods this client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data, ready for a transport to
/// execute. `url` is absolute — base address resolution happens when the
/// request is built.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, produced by a transport and
/// consumed by the protocol layer's `parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
