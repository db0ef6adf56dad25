//! The I/O boundary: something that can execute an `HttpRequest`.
//!
//! `UreqTransport` is the blocking default. Tests substitute an in-memory
//! implementation.

use crate::error::BoxError;
use crate::http::{HttpRequest, TransportResponse};

/// Executes one request and returns the response with its body unread.
///
/// Implementations must not treat 4xx/5xx statuses as errors; those are
/// returned to the caller as data. An `Err` means no response was obtained.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<TransportResponse, BoxError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<TransportResponse, BoxError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq::Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Agent with ureq's defaults except that HTTP error statuses are
    /// returned as responses.
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a preconfigured agent, e.g. one with a global timeout. The agent
    /// should have `http_status_as_error(false)`.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<TransportResponse, BoxError> {
        let mut builder = ureq::http::Request::builder()
            .method(request.method.as_str())
            .uri(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = match request.body {
            Some(body) => self.agent.run(builder.body(body.as_slice())?)?,
            None => self.agent.run(builder.body(())?)?,
        };

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.into_body().into_reader();

        Ok(TransportResponse {
            status,
            headers,
            body: Box::new(body),
        })
    }
}
