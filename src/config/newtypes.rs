//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;
use url::Url;

/// A validated MRPeasy API key.
///
/// # Example
///
/// ```rust
/// use mrpeasy::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated MRPeasy API secret.
///
/// The `Debug` implementation masks the secret value, displaying only
/// `ApiSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use mrpeasy::ApiSecret;
///
/// let secret = ApiSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ApiSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiSecret(String);

impl ApiSecret {
    /// Creates a new validated API secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyApiSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ApiSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiSecret(*****)")
    }
}

/// A validated base URL that relative endpoint paths are resolved against.
///
/// The path is normalized to end with `/`, so that resolving `customers`
/// against `https://api.mrpeasy.com/rest/v1` yields
/// `https://api.mrpeasy.com/rest/v1/customers` rather than replacing the
/// last segment.
///
/// # Example
///
/// ```rust
/// use mrpeasy::BaseUrl;
///
/// let base = BaseUrl::new("https://api.mrpeasy.com/rest/v1").unwrap();
/// assert_eq!(base.as_ref(), "https://api.mrpeasy.com/rest/v1/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value is not an
    /// absolute URL that can serve as a base.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let mut parsed = Url::parse(&raw).map_err(|_| ConfigError::InvalidBaseUrl {
            url: raw.clone(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl { url: raw });
        }
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }
        Ok(Self(parsed))
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// Resolves a relative path against this base.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error if the joined URL is malformed.
    pub fn join(&self, path: &str) -> Result<Url, url::ParseError> {
        self.0.join(path)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_secret_rejects_empty() {
        assert!(matches!(ApiSecret::new(""), Err(ConfigError::EmptyApiSecret)));
    }

    #[test]
    fn test_api_secret_debug_is_masked() {
        let secret = ApiSecret::new("super-secret").unwrap();
        let debug = format!("{secret:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(debug, "ApiSecret(*****)");
    }

    #[test]
    fn test_base_url_appends_trailing_slash() {
        let base = BaseUrl::new("https://api.mrpeasy.com/rest/v1").unwrap();
        assert_eq!(base.as_ref(), "https://api.mrpeasy.com/rest/v1/");
    }

    #[test]
    fn test_base_url_keeps_existing_trailing_slash() {
        let base = BaseUrl::new("https://api.mrpeasy.com/rest/v1/").unwrap();
        assert_eq!(base.as_ref(), "https://api.mrpeasy.com/rest/v1/");
    }

    #[test]
    fn test_base_url_join_resolves_relative_path() {
        let base = BaseUrl::new("https://api.mrpeasy.com/rest/v1/").unwrap();
        let joined = base.join("customer-orders").unwrap();
        assert_eq!(
            joined.as_str(),
            "https://api.mrpeasy.com/rest/v1/customer-orders"
        );
    }

    #[test]
    fn test_base_url_rejects_relative_value() {
        let result = BaseUrl::new("rest/v1");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_base_url_rejects_non_base_scheme() {
        let result = BaseUrl::new("mailto:ops@example.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }
}
