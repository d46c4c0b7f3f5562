//! HTTP client types for MRPeasy API communication.
//!
//! This module is the transport core of the crate: it builds authenticated
//! requests, executes them under a cancellation context, interprets the
//! `Content-Range` pagination header and decodes response bodies.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: Builds and executes requests, and drives paged fetches
//! - [`HttpRequest`]: A fully formed, authenticated request
//! - [`RequestOption`] / [`RangeOption`]: Modifiers such as the `Range` header
//! - [`HttpResponse`]: The envelope of a successful call
//! - [`PageCursor`]: Pagination state parsed from `Content-Range`
//! - [`DecodeTarget`]: Where a response body goes (raw writer or typed value)
//! - [`RequestContext`]: Caller-supplied cancellation and deadline
//! - [`HttpError`]: Every failure a call can produce
//!
//! # Example
//!
//! ```rust,ignore
//! use mrpeasy::clients::{HttpClient, HttpMethod, RequestContext, RequestOption};
//!
//! let client = HttpClient::new(&config)?;
//! let ctx = RequestContext::new();
//!
//! // One explicit range
//! let request = client
//!     .request(HttpMethod::Get, "items")
//!     .option(RequestOption::range_from_to(0, 9))
//!     .build()?;
//! let (items, response) = client.execute_json::<Vec<serde_json::Value>>(&ctx, request).await?;
//!
//! // Every page
//! let all: Vec<serde_json::Value> = client.fetch_all(&ctx, "items").await?;
//! ```
//!
//! # Retry Behavior
//!
//! Requests are never retried. Errors are returned to the caller unchanged.

mod context;
mod decode;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod paged;

pub use context::RequestContext;
pub use decode::DecodeTarget;
pub use errors::{CancellationReason, HttpError, HttpResponseError, PaginationHeaderError};
pub use http_client::HttpClient;
pub use http_request::{
    basic_auth_value, HttpMethod, HttpRequest, HttpRequestBuilder, RangeOption, RequestOption,
    CONTENT_TYPE_JSON, SDK_VERSION,
};
pub use http_response::{HttpResponse, PageCursor};
