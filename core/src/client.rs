//! Request shaping and the blocking send loop.
//!
//! # Design
//! `build_request` is pure: it validates the method and URI and decides where
//! query parameters and body go. `Requester` owns a `Transport` and performs
//! exactly one round-trip per `send`, then drains the body completely. The
//! body stream is dropped before `send` returns on every path.

use std::io::Read;

use tracing::{debug, warn};
use url::Url;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest, RequestOptions, Response};
use crate::transport::{Transport, UreqTransport};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Shape a request for `method` without touching the network.
///
/// GET puts `options.query` into the URI's query string and never carries a
/// body. POST and PUT leave the URI alone and send `options.body`, falling
/// back to the form-encoded query parameters. `options.headers` replaces the
/// default header set.
pub fn build_request(
    method: &str,
    uri: &str,
    options: &RequestOptions,
) -> Result<HttpRequest, RequestError> {
    let method: HttpMethod = method.parse()?;
    let mut url = Url::parse(uri).map_err(|source| RequestError::InvalidUri {
        uri: uri.to_string(),
        source,
    })?;

    let mut default_headers = Vec::new();
    let body = match method {
        HttpMethod::Get => {
            if let Some(query) = &options.query {
                if query.is_empty() {
                    url.set_query(None);
                } else {
                    url.set_query(Some(query.encode().as_str()));
                }
            }
            None
        }
        HttpMethod::Post | HttpMethod::Put => match (&options.body, &options.query) {
            (Some(body), _) => Some(body.clone()),
            (None, Some(query)) => {
                default_headers.push(("content-type".to_string(), FORM_CONTENT_TYPE.to_string()));
                Some(query.encode().into_bytes())
            }
            (None, None) => None,
        },
    };

    let headers = match &options.headers {
        Some(headers) => headers.clone().into_pairs(),
        None => default_headers,
    };

    Ok(HttpRequest {
        method,
        url: url.into(),
        headers,
        body,
    })
}

/// Sends GET, POST and PUT requests through a `Transport`.
#[derive(Debug, Clone)]
pub struct Requester<T> {
    transport: T,
}

impl Requester<UreqTransport> {
    pub fn with_default_transport() -> Self {
        Self::new(UreqTransport::new())
    }
}

impl<T: Transport> Requester<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request and return the fully drained response.
    ///
    /// The error's `status_code()` is 405 for an unsupported method, 500 when
    /// no response was obtained, and the peer's status when the body could
    /// not be read.
    pub fn send(
        &self,
        method: &str,
        uri: &str,
        options: &RequestOptions,
    ) -> Result<Response, RequestError> {
        let request = build_request(method, uri, options)?;
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = self.transport.execute(request).map_err(|err| {
            warn!(error = %err, uri, "request failed before a response was received");
            RequestError::Transport(err)
        })?;

        let status = response.status;
        let headers = response.headers;
        let mut stream = response.body;
        let mut body = Vec::new();
        let drained = stream.read_to_end(&mut body);
        drop(stream);

        match drained {
            Ok(_) => {
                debug!(status, bytes = body.len(), "response received");
                Ok(Response {
                    status,
                    headers,
                    body,
                })
            }
            Err(source) => {
                warn!(status, error = %source, uri, "failed to read response body");
                Err(RequestError::BodyRead { status, source })
            }
        }
    }
}

/// One-shot send through a freshly built ureq transport.
pub fn send_request(
    method: &str,
    uri: &str,
    options: &RequestOptions,
) -> Result<Response, RequestError> {
    Requester::with_default_transport().send(method, uri, options)
}
