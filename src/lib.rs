//! # MRPeasy API Rust Client
//!
//! A typed client for the MRPeasy REST API: Basic-authenticated requests,
//! `Content-Range` pagination, and JSON or raw body decoding under
//! caller-supplied cancellation.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`MrpEasyConfig`] and [`MrpEasyConfigBuilder`]
//! - Validated newtypes for API credentials and the base URL
//! - An async HTTP client ([`HttpClient`]) that builds, executes and pages requests
//! - Record types and list helpers for customers, customer orders, shipments
//!   and stock items in [`resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use mrpeasy::{MrpEasyConfig, ApiKey, ApiSecret};
//!
//! let config = MrpEasyConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret(ApiSecret::new("your-api-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Listing Resources
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use mrpeasy::{HttpClient, RequestContext};
//!
//! let client = HttpClient::new(&config)?;
//! let ctx = RequestContext::new().with_timeout(Duration::from_secs(60));
//!
//! // Follows Content-Range until every page is fetched
//! let customers = client.list_customers(&ctx).await?;
//! ```
//!
//! ## Making Raw Requests
//!
//! ```rust,ignore
//! use mrpeasy::{HttpMethod, RequestOption};
//!
//! let request = client
//!     .request(HttpMethod::Get, "items")
//!     .option(RequestOption::range_from_to(0, 9))
//!     .build()?;
//!
//! let mut out = Vec::new();
//! let response = client.execute_raw(&ctx, request, &mut out).await?;
//! println!("{} bytes, {} items total", out.len(), response.cursor.total_items);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No hidden retries**: Every error is returned to the caller as-is

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

pub use config::{ApiKey, ApiSecret, BaseUrl, MrpEasyConfig, MrpEasyConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    CancellationReason, DecodeTarget, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, PageCursor, PaginationHeaderError,
    RangeOption, RequestContext, RequestOption,
};

pub use resources::ListResource;
