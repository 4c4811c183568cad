//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the host executes the actual I/O. The
//! [`Transport`] trait is the seam: `TodoPage` drives a `Transport` to own
//! the full round trip, tests script one in memory, and the CLI plugs in a
//! ureq-backed implementation.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! between the page state and whatever executes the request.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` methods. A [`Transport`] executes this
/// request against the network and returns the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the [`Transport`] after executing an `HttpRequest`, then
/// passed to `TodoClient::parse_*` methods for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The backend could not be reached at all: connection refused, DNS failure,
/// broken pipe. Distinct from a response carrying an error status, which the
/// transport must return as a normal `HttpResponse`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Executes one HTTP round trip.
///
/// Implementations must return 4xx/5xx responses as `Ok(HttpResponse)` so
/// status interpretation stays in the client; `Err` is reserved for
/// transport-level failures.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
