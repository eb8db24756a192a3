//! Blocking HTTP transport backed by ureq.
//!
//! # Design
//! Executes the plain-data `HttpRequest` values the store builds and hands
//! back plain-data `HttpResponse` values. ureq's status-as-error behavior is
//! disabled so 4xx/5xx come back as data — status interpretation belongs to
//! the protocol layer, not the transport.
//!
//! A global per-request timeout bounds every round trip, and idempotent
//! requests (GET, DELETE) get a small retry budget for transport-level
//! failures. POST is never retried: a create whose connection died may
//! still have been applied server-side, and a duplicate item is worse than
//! a surfaced error.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_RETRIES: u32 = 2;

/// Blocking transport with a per-request timeout and a bounded retry
/// budget for idempotent requests.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    retries: u32,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport")
            .field("retries", &self.retries)
            .finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new(timeout: Duration, retries: u32) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent, retries }
    }

    /// Execute a request, retrying transport failures up to the budget for
    /// idempotent methods. Any response with a status, 2xx or not, is a
    /// transport success.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ClientError> {
        let budget = match request.method {
            HttpMethod::Get | HttpMethod::Delete => self.retries,
            HttpMethod::Post => 0,
        };
        let mut attempt = 0;
        loop {
            match self.call_once(request) {
                Ok(response) => {
                    debug!(url = %request.url, status = response.status, "request settled");
                    return Ok(response);
                }
                Err(err) if attempt < budget => {
                    attempt += 1;
                    warn!(url = %request.url, error = %err, attempt, "transport failure, retrying");
                }
                Err(err) => {
                    warn!(url = %request.url, error = %err, "transport failure");
                    return Err(ClientError::Transport(err.to_string()));
                }
            }
        }
    }

    fn call_once(&self, request: &HttpRequest) -> Result<HttpResponse, ureq::Error> {
        let mut response = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()?
            }
            HttpMethod::Delete => {
                let mut builder = self.agent.delete(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()?
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match &request.body {
                    Some(body) => builder.send(body.as_bytes())?,
                    None => builder.send_empty()?,
                }
            }
        };

        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        Ok(HttpResponse { status, body })
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_RETRIES)
    }
}
