//! Configuration types for the DoorDash Drive SDK.
//!
//! # Overview
//!
//! - [`DriveConfig`]: all settings needed to build an [`HttpClient`](crate::HttpClient)
//! - [`DriveConfigBuilder`]: a builder for constructing [`DriveConfig`] instances
//! - [`ApiToken`]: a validated bearer token with masked debug output
//! - [`BaseUrl`]: a validated absolute base endpoint
//!
//! # Example
//!
//! ```rust
//! use doordash_drive::{ApiToken, DriveConfig};
//! use std::time::Duration;
//!
//! let config = DriveConfig::builder()
//!     .credentials(ApiToken::new("my-token").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://openapi.doordash.com/");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl, DEFAULT_BASE_URL};

use std::time::Duration;

use crate::auth::Credentials;
use crate::error::ConfigError;

/// Default transport timeout for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the DoorDash Drive SDK.
///
/// `DriveConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct DriveConfig {
    credentials: Credentials,
    base_url: BaseUrl,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl DriveConfig {
    /// Creates a new builder for constructing a `DriveConfig`.
    #[must_use]
    pub fn builder() -> DriveConfigBuilder {
        DriveConfigBuilder::new()
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the base endpoint.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the request timeout.
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

// Verify DriveConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DriveConfig>();
};

/// Builder for constructing [`DriveConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: one minute
/// - `user_agent_prefix`: `None`
///
/// `credentials` is required.
#[derive(Debug, Default)]
pub struct DriveConfigBuilder {
    credentials: Option<Credentials>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl DriveConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credentials (required).
    ///
    /// Accepts an [`ApiToken`], an [`AccessKey`](crate::auth::AccessKey) or
    /// a [`Credentials`] value.
    #[must_use]
    pub fn credentials(mut self, credentials: impl Into<Credentials>) -> Self {
        self.credentials = Some(credentials.into());
        self
    }

    /// Overrides the base endpoint.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DriveConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no credentials were set.
    pub fn build(self) -> Result<DriveConfig, ConfigError> {
        let credentials = self
            .credentials
            .ok_or(ConfigError::MissingRequiredField {
                field: "credentials",
            })?;

        let base_url = match self.base_url {
            Some(base_url) => base_url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(DriveConfig {
            credentials,
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
    fn test_build_requires_credentials() {
        let result = DriveConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_build_applies_defaults() {
        let config = DriveConfig::builder()
            .credentials(ApiToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_build_with_overrides() {
        let config = DriveConfig::builder()
            .credentials(ApiToken::new("token").unwrap())
            .base_url(BaseUrl::new("http://localhost:8080/").unwrap())
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:8080/");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_token() {
        let config = DriveConfig::builder()
            .credentials(ApiToken::new("very-secret-token").unwrap())
            .build()
            .unwrap();
        assert!(!format!("{config:?}").contains("very-secret-token"));
    }
}
