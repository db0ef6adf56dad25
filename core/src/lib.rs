//! Small, unrelated helpers: a blocking HTTP request sender, index removal
//! and linear search over sequences, and environment lookups with fallbacks.
//!
//! # Overview
//! `Requester::send` shapes a GET, POST or PUT request from `RequestOptions`,
//! executes it through a `Transport`, and drains the full response body.
//! `send_request` does the same through a fresh ureq-backed transport.
//!
//! # Design
//! - Request shaping (`build_request`) is pure and returns plain data; only
//!   the `Transport` touches the network, so tests swap in a fake.
//! - Every request error reports a status code: 405 for unsupported methods,
//!   500 when no response arrived, the peer's status when the body failed.
//! - Sequence helpers are generic over slices. JSON values get separate entry
//!   points that check the value is an array.
//! - Nothing here installs a `tracing` subscriber.

pub mod client;
pub mod env;
pub mod error;
pub mod http;
pub mod seq;
pub mod transport;

pub use client::{build_request, send_request, Requester};
pub use env::{get_env, get_env_parsed};
pub use error::{BoxError, RequestError, SeqError, STATUS_METHOD_NOT_ALLOWED, STATUS_NO_RESPONSE};
pub use http::{Headers, HttpMethod, HttpRequest, QueryParams, RequestOptions, Response, TransportResponse};
pub use seq::{index_of, index_of_value, remove_at, remove_at_value};
pub use transport::{Transport, UreqTransport};
