//! HTTP client for MRPeasy API communication.
//!
//! This module provides the [`HttpClient`] type, which builds authenticated
//! requests and executes them under a caller-supplied [`RequestContext`].

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::clients::context::RequestContext;
use crate::clients::decode::{decode_json, DecodeTarget};
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
use crate::clients::http_response::{HttpResponse, PageCursor};
use crate::config::MrpEasyConfig;

/// HTTP client for making requests to the MRPeasy API.
///
/// The client holds the configuration and a pooled `reqwest` client. It has
/// no mutable state, so one instance can serve any number of concurrent
/// calls.
///
/// # Example
///
/// ```rust,ignore
/// use mrpeasy::{ApiKey, ApiSecret, MrpEasyConfig};
/// use mrpeasy::clients::{HttpClient, HttpMethod, RequestContext};
///
/// let config = MrpEasyConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret(ApiSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
/// let ctx = RequestContext::new();
///
/// let request = client.request(HttpMethod::Get, "items").build()?;
/// let (items, response) = client.execute_json::<Vec<serde_json::Value>>(&ctx, request).await?;
/// println!("{} of {} items", items.len(), response.cursor.total_items);
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Credentials and transport settings.
    config: MrpEasyConfig,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new client with a default `reqwest` client using the
    /// configured per-call timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying client cannot be
    /// created (e.g. TLS initialization failure).
    pub fn new(config: &MrpEasyConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        tracing::debug!(
            base_url = %config.base_url(),
            timeout_ms = config.timeout().as_millis(),
            "Created MRPeasy HTTP client"
        );

        Ok(Self::with_http_client(config, client))
    }

    /// Creates a new client around a caller-supplied `reqwest` client.
    ///
    /// The configured timeout is not applied; the supplied client's own
    /// settings are used as-is.
    #[must_use]
    pub fn with_http_client(config: &MrpEasyConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    /// Returns the configuration of this client.
    #[must_use]
    pub const fn config(&self) -> &MrpEasyConfig {
        &self.config
    }

    /// Starts building an authenticated request to `path`, relative to the
    /// configured base URL.
    #[must_use]
    pub fn request(&self, method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder<'_> {
        HttpRequest::builder(&self.config, method, path)
    }

    /// Executes a request and routes a successful body into `target`.
    ///
    /// The whole exchange, including reading the body, races against `ctx`.
    /// The response body is released on every return path.
    ///
    /// - `None`: the body is not read.
    /// - [`DecodeTarget::Raw`]: the body is copied into the writer.
    /// - [`DecodeTarget::Typed`]: the body is decoded as JSON. An empty body
    ///   is not an error and leaves the value untouched.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Cancelled`] if `ctx` is done before the exchange
    ///   completes, or a transport error happens after it is done
    /// - [`HttpError::Network`] on any other transport failure
    /// - [`HttpError::Response`] if the status is outside `200..=299`; the
    ///   body is not decoded
    /// - [`HttpError::Pagination`] if a successful response has no valid
    ///   `Content-Range` header
    /// - [`HttpError::BodyRead`] if the body cannot be read or written while
    ///   copying into a [`DecodeTarget::Raw`] writer
    /// - [`HttpError::Decoding`] if the body is not valid JSON for `T`, or
    ///   breaks off while being read for a [`DecodeTarget::Typed`] value
    pub async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
        target: Option<DecodeTarget<'_, T>>,
    ) -> Result<HttpResponse, HttpError> {
        if let Some(reason) = ctx.err() {
            return Err(HttpError::Cancelled(reason));
        }

        tracing::debug!(method = %request.method, url = %request.url, "Sending MRPeasy request");

        tokio::select! {
            biased;
            reason = ctx.done() => Err(HttpError::Cancelled(reason)),
            result = self.exchange(ctx, request, target) => result,
        }
    }

    /// Executes a request without reading the response body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn send(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> Result<HttpResponse, HttpError> {
        self.execute::<()>(ctx, request, None).await
    }

    /// Executes a request and decodes the body as JSON into a new `T`.
    ///
    /// An empty body yields `T::default()`.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn execute_json<T: DeserializeOwned + Default>(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
    ) -> Result<(T, HttpResponse), HttpError> {
        let mut value = T::default();
        let response = self
            .execute(ctx, request, Some(DecodeTarget::Typed(&mut value)))
            .await?;
        Ok((value, response))
    }

    /// Executes a request and copies the raw body into `writer`.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn execute_raw<W: AsyncWrite + Unpin + Send>(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
        writer: &mut W,
    ) -> Result<HttpResponse, HttpError> {
        self.execute::<()>(ctx, request, Some(DecodeTarget::Raw(writer)))
            .await
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        request: HttpRequest,
        target: Option<DecodeTarget<'_, T>>,
    ) -> Result<HttpResponse, HttpError> {
        let HttpRequest {
            method,
            url,
            body,
            headers,
        } = request;

        let mut req_builder = self.client.request(method.into(), url).headers(headers);
        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        let mut response = match req_builder.send().await {
            Ok(response) => response,
            Err(e) => return Err(transport_error(ctx, e)),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Response(HttpResponseError {
                code: status.as_u16(),
                status: status_line(status),
                headers: response.headers().clone(),
            }));
        }

        let headers = response.headers().clone();
        let cursor = PageCursor::from_headers(&headers)?;

        match target {
            None => {}
            Some(DecodeTarget::Raw(writer)) => copy_body(ctx, &mut response, writer).await?,
            Some(DecodeTarget::Typed(slot)) => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|e| decode_read_error(ctx, e))?;
                decode_json(&bytes, slot)?;
            }
        }

        Ok(HttpResponse::new(status.as_u16(), headers, cursor))
    }
}

/// Streams the body chunk by chunk into `writer`, then flushes it.
async fn copy_body(
    ctx: &RequestContext,
    response: &mut reqwest::Response,
    writer: &mut (dyn AsyncWrite + Unpin + Send),
) -> Result<(), HttpError> {
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| body_read_error(ctx, e))?
    {
        writer.write_all(&chunk).await.map_err(HttpError::BodyRead)?;
    }
    writer.flush().await.map_err(HttpError::BodyRead)
}

/// A transport failure after the context is done is reported as cancellation.
fn transport_error(ctx: &RequestContext, error: reqwest::Error) -> HttpError {
    ctx.err()
        .map_or(HttpError::Network(error), HttpError::Cancelled)
}

fn body_read_error(ctx: &RequestContext, error: reqwest::Error) -> HttpError {
    ctx.err().map_or_else(
        || HttpError::BodyRead(std::io::Error::other(error)),
        HttpError::Cancelled,
    )
}

/// A body that breaks off while being decoded is a decode failure.
fn decode_read_error(ctx: &RequestContext, error: reqwest::Error) -> HttpError {
    ctx.err().map_or_else(
        || HttpError::Decoding(serde::de::Error::custom(error)),
        HttpError::Cancelled,
    )
}

/// Formats a status like `404 Not Found`.
fn status_line(status: StatusCode) -> String {
    status.canonical_reason().map_or_else(
        || status.as_str().to_string(),
        |reason| format!("{} {reason}", status.as_str()),
    )
}
