//! Configuration types for the MRPeasy API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`MrpEasyConfig`]: The configuration struct holding credentials and transport settings
//! - [`MrpEasyConfigBuilder`]: A builder for constructing [`MrpEasyConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`ApiSecret`]: A validated API secret newtype with masked debug output
//! - [`BaseUrl`]: A validated base URL that endpoint paths are resolved against
//!
//! # Example
//!
//! ```rust
//! use mrpeasy::{MrpEasyConfig, ApiKey, ApiSecret};
//!
//! let config = MrpEasyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_secret(ApiSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiSecret, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Base URL of the hosted MRPeasy REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.mrpeasy.com/rest/v1/";

/// Default per-call timeout applied to the underlying HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the MRPeasy API client.
///
/// `MrpEasyConfig` is `Clone`, `Send`, and `Sync`. It is constructed once and
/// passed by reference to [`HttpClient`](crate::clients::HttpClient).
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use mrpeasy::{MrpEasyConfig, ApiKey, ApiSecret};
///
/// let config = MrpEasyConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_secret(ApiSecret::new("your-secret").unwrap())
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.timeout(), Duration::from_secs(30));
/// ```
#[derive(Clone, Debug)]
pub struct MrpEasyConfig {
    api_key: ApiKey,
    api_secret: ApiSecret,
    base_url: BaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl MrpEasyConfig {
    /// Creates a new builder for constructing a `MrpEasyConfig`.
    #[must_use]
    pub fn builder() -> MrpEasyConfigBuilder {
        MrpEasyConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret.
    #[must_use]
    pub const fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the per-call timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify MrpEasyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MrpEasyConfig>();
};

/// Builder for constructing [`MrpEasyConfig`] instances.
///
/// Required fields are `api_key` and `api_secret`.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: [`DEFAULT_TIMEOUT`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct MrpEasyConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret: Option<ApiSecret>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl MrpEasyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret (required).
    #[must_use]
    pub fn api_secret(mut self, secret: ApiSecret) -> Self {
        self.api_secret = Some(secret);
        self
    }

    /// Overrides the base URL, e.g. to point at a proxy or a mock server.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the per-call timeout of the default HTTP client.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MrpEasyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_secret` are not set.
    pub fn build(self) -> Result<MrpEasyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret = self
            .api_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_secret",
            })?;
        let base_url = match self.base_url {
            Some(base_url) => base_url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(MrpEasyConfig {
            api_key,
            api_secret,
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = MrpEasyConfigBuilder::new()
            .api_secret(ApiSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_requires_api_secret() {
        let result = MrpEasyConfigBuilder::new()
            .api_key(ApiKey::new("key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "api_secret"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = MrpEasyConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret(ApiSecret::new("secret").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = MrpEasyConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret(ApiSecret::new("secret").unwrap())
            .base_url(BaseUrl::new("http://127.0.0.1:8080/rest/v1/").unwrap())
            .timeout(Duration::from_millis(500))
            .user_agent_prefix("Warehouse/2.1")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://127.0.0.1:8080/rest/v1/");
        assert_eq!(config.timeout(), Duration::from_millis(500));
        assert_eq!(config.user_agent_prefix(), Some("Warehouse/2.1"));
    }

    #[test]
    fn test_config_debug_masks_secret() {
        let config = MrpEasyConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .api_secret(ApiSecret::new("hunter2").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("MrpEasyConfig"));
        assert!(!debug_str.contains("hunter2"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MrpEasyConfig>();
    }
}
