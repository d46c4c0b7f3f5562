//! HTTP request types for the MRPeasy API client.
//!
//! This module provides the [`HttpRequest`] type and its builder. Building a
//! request resolves the endpoint path against the configured base URL,
//! serializes the optional JSON body, attaches Basic authorization and then
//! applies each [`RequestOption`] in order. No network I/O happens here.

use std::fmt;

use base64::prelude::*;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, RANGE, USER_AGENT,
};
use serde::Serialize;
use url::Url;

use crate::clients::errors::HttpError;
use crate::config::{ApiKey, ApiSecret, MrpEasyConfig};

/// Content type sent with every request body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP methods supported by the MRPeasy API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Which items of a collection to request.
///
/// Offsets are zero-based. The server chooses the page size for
/// [`RangeOption::From`].
///
/// # Example
///
/// ```rust
/// use mrpeasy::clients::RangeOption;
///
/// assert_eq!(RangeOption::From(100).header_value(), "items=100");
/// assert_eq!(RangeOption::FromTo(10, 14).header_value(), "items=10-14");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeOption {
    /// Items starting at the given offset.
    From(u64),
    /// Items between the two offsets, inclusive.
    FromTo(u64, u64),
}

impl RangeOption {
    /// Returns the value of the `Range` request header.
    #[must_use]
    pub fn header_value(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RangeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From(from) => write!(f, "items={from}"),
            Self::FromTo(from, to) => write!(f, "items={from}-{to}"),
        }
    }
}

/// A modifier applied to a request after its default headers are set.
///
/// Options run in the order they are given, so an option can override a
/// header set earlier, including `Authorization` and `Content-Type`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestOption {
    /// Sets the `Range` header.
    Range(RangeOption),
    /// Sets an arbitrary header.
    Header {
        /// Header name.
        name: String,
        /// Header value.
        value: String,
    },
}

impl RequestOption {
    /// Requests items starting at `from`.
    #[must_use]
    pub const fn range_from(from: u64) -> Self {
        Self::Range(RangeOption::From(from))
    }

    /// Requests items `from` through `to`, inclusive.
    #[must_use]
    pub const fn range_from_to(from: u64, to: u64) -> Self {
        Self::Range(RangeOption::FromTo(from, to))
    }

    /// Sets an arbitrary header.
    #[must_use]
    pub fn header(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Header {
            name: name.into(),
            value: value.into(),
        }
    }

    fn apply(&self, headers: &mut HeaderMap) -> Result<(), HttpError> {
        match self {
            Self::Range(range) => {
                let value = HeaderValue::from_str(&range.header_value()).map_err(|_| {
                    HttpError::InvalidHeader {
                        name: RANGE.to_string(),
                    }
                })?;
                headers.insert(RANGE, value);
            }
            Self::Header { name, value } => {
                let invalid = || HttpError::InvalidHeader { name: name.clone() };
                let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
                let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
                headers.insert(header_name, header_value);
            }
        }
        Ok(())
    }
}

/// Returns the `Authorization` header value for a key/secret pair.
///
/// # Example
///
/// ```rust
/// use mrpeasy::{ApiKey, ApiSecret};
/// use mrpeasy::clients::basic_auth_value;
///
/// let value = basic_auth_value(
///     &ApiKey::new("key").unwrap(),
///     &ApiSecret::new("secret").unwrap(),
/// );
/// assert_eq!(value, "Basic a2V5OnNlY3JldA==");
/// ```
#[must_use]
pub fn basic_auth_value(api_key: &ApiKey, api_secret: &ApiSecret) -> String {
    let credentials = format!("{}:{}", api_key.as_ref(), api_secret.as_ref());
    format!("Basic {}", BASE64_STANDARD.encode(credentials))
}

/// A fully formed request, ready to be executed.
///
/// Use [`HttpRequest::builder`] or
/// [`HttpClient::request`](crate::clients::HttpClient::request) to construct
/// one.
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute target URL.
    pub url: Url,
    /// The serialized JSON body, if any.
    pub body: Option<Vec<u8>>,
    /// Request headers. Always contains `Authorization`.
    pub headers: HeaderMap,
}

impl HttpRequest {
    /// Creates a new builder for a request to `path`, relative to the
    /// configured base URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mrpeasy::{ApiKey, ApiSecret, MrpEasyConfig};
    /// use mrpeasy::clients::{HttpMethod, HttpRequest, RequestOption};
    ///
    /// let config = MrpEasyConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret(ApiSecret::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let request = HttpRequest::builder(&config, HttpMethod::Get, "customers")
    ///     .option(RequestOption::range_from(100))
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(request.url.as_str(), "https://api.mrpeasy.com/rest/v1/customers");
    /// assert_eq!(request.header("range"), Some("items=100"));
    /// ```
    #[must_use]
    pub fn builder<'a>(
        config: &'a MrpEasyConfig,
        method: HttpMethod,
        path: impl Into<String>,
    ) -> HttpRequestBuilder<'a> {
        HttpRequestBuilder::new(config, method, path)
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder<'a> {
    config: &'a MrpEasyConfig,
    method: HttpMethod,
    path: String,
    body: Option<Result<Vec<u8>, serde_json::Error>>,
    options: Vec<RequestOption>,
}

impl<'a> HttpRequestBuilder<'a> {
    fn new(config: &'a MrpEasyConfig, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            config,
            method,
            path: path.into(),
            body: None,
            options: Vec::new(),
        }
    }

    /// Sets the JSON request body.
    ///
    /// Serialization errors are reported by [`build`](Self::build).
    #[must_use]
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_vec(body));
        self
    }

    /// Appends a request option.
    #[must_use]
    pub fn option(mut self, option: RequestOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends several request options, preserving their order.
    #[must_use]
    pub fn options(mut self, options: impl IntoIterator<Item = RequestOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Builds the [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// - [`HttpError::UrlResolution`] if the path cannot be joined to the base URL
    /// - [`HttpError::Encoding`] if the body failed to serialize
    /// - [`HttpError::InvalidHeader`] if an option produced an invalid header
    pub fn build(self) -> Result<HttpRequest, HttpError> {
        let url = self
            .config
            .base_url()
            .join(&self.path)
            .map_err(|source| HttpError::UrlResolution {
                path: self.path.clone(),
                source,
            })?;

        let body = self.body.transpose().map_err(HttpError::Encoding)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(USER_AGENT, user_agent(self.config)?);

        let authorization = basic_auth_value(self.config.api_key(), self.config.api_secret());
        let mut authorization =
            HeaderValue::from_str(&authorization).map_err(|_| HttpError::InvalidHeader {
                name: AUTHORIZATION.to_string(),
            })?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        }

        for option in &self.options {
            option.apply(&mut headers)?;
        }

        Ok(HttpRequest {
            method: self.method,
            url,
            body,
            headers,
        })
    }
}

fn user_agent(config: &MrpEasyConfig) -> Result<HeaderValue, HttpError> {
    let prefix = config
        .user_agent_prefix()
        .map_or(String::new(), |prefix| format!("{prefix} | "));
    let value = format!("{prefix}MRPeasy API Library v{SDK_VERSION} | Rust");
    HeaderValue::from_str(&value).map_err(|_| HttpError::InvalidHeader {
        name: USER_AGENT.to_string(),
    })
}
