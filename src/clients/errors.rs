//! HTTP-specific error types for the MRPeasy API client.
//!
//! # Error Handling
//!
//! Every failure of a request is reported through [`HttpError`]. Nothing is
//! retried or logged here; the caller decides what to do with the error.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`PaginationHeaderError`]: Missing or malformed `Content-Range` header
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use mrpeasy::clients::{HttpError, RequestContext};
//!
//! match client.fetch_all::<Customer>(&ctx, "customers").await {
//!     Ok(customers) => println!("{} customers", customers.len()),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.status),
//!     Err(HttpError::Cancelled(reason)) => println!("Gave up: {reason}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use std::fmt;

use reqwest::header::HeaderMap;
use thiserror::Error;

/// Why a [`RequestContext`](crate::clients::RequestContext) stopped a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancellationReason {
    /// The context was cancelled explicitly.
    Cancelled,
    /// The context's deadline passed.
    DeadlineExceeded,
}

impl fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "context canceled"),
            Self::DeadlineExceeded => write!(f, "context deadline exceeded"),
        }
    }
}

/// Error returned when the API answers with a status outside `200..=299`.
///
/// The response metadata is kept so callers can inspect the status and
/// headers; the body is never decoded.
///
/// # Example
///
/// ```rust
/// use mrpeasy::clients::HttpResponseError;
/// use reqwest::header::HeaderMap;
///
/// let error = HttpResponseError {
///     code: 404,
///     status: "404 Not Found".to_string(),
///     headers: HeaderMap::new(),
/// };
///
/// assert_eq!(error.to_string(), "response: 404 Not Found");
/// ```
#[derive(Debug, Error)]
#[error("response: {status}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The status line, e.g. `404 Not Found`.
    pub status: String,
    /// The response headers.
    pub headers: HeaderMap,
}

/// Error returned when a successful response lacks a usable `Content-Range` header.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationHeaderError {
    /// The header is absent or not valid UTF-8.
    #[error("response has no readable Content-Range header")]
    Missing,

    /// The header does not have the `<first>-<last>/<total>` shape.
    #[error("malformed Content-Range header '{value}'")]
    Malformed {
        /// The raw header value.
        value: String,
    },

    /// One of the numeric segments failed to parse.
    #[error("invalid {segment} '{found}' in Content-Range header '{value}'")]
    InvalidNumber {
        /// Which segment failed (`first index`, `last index` or `total`).
        segment: &'static str,
        /// The segment text that failed to parse.
        found: String,
        /// The raw header value.
        value: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The endpoint path could not be resolved against the base URL.
    #[error("could not resolve path '{path}': {source}")]
    UrlResolution {
        /// The relative path that was supplied.
        path: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The request body could not be serialized to JSON.
    #[error("could not encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// A request option produced an invalid header.
    #[error("invalid header '{name}'")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request context was cancelled or its deadline passed.
    #[error("{0}")]
    Cancelled(CancellationReason),

    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response lacked valid pagination metadata.
    #[error(transparent)]
    Pagination(#[from] PaginationHeaderError),

    /// The response body could not be copied into a raw sink.
    #[error("could not copy response body to writer: {0}")]
    BodyRead(#[source] std::io::Error),

    /// The response body could not be decoded as JSON.
    #[error("could not decode response body: {0}")]
    Decoding(#[source] serde_json::Error),
}

impl HttpError {
    /// Returns `true` if this error is the result of context cancellation.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }

    /// Returns the HTTP status code if this is an API error.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
