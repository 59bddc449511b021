//! Validated newtype wrappers for configuration values.
//!
//! Invalid values are rejected on construction with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use std::fmt;

/// The production DoorDash Drive endpoint.
pub const DEFAULT_BASE_URL: &str = "https://openapi.doordash.com/";

/// A validated bearer token for the DoorDash Drive API.
///
/// The token is opaque to the SDK. Its `Debug` output is masked so it does
/// not leak into logs.
///
/// # Example
///
/// ```rust
/// use doordash_drive::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty, or
    /// [`ConfigError::InvalidAccessToken`] if it contains anything other than
    /// visible ASCII.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        if !token.chars().all(|c| c.is_ascii_graphic()) {
            return Err(ConfigError::InvalidAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated base endpoint for API requests.
///
/// The URL must be absolute and use `http` or `https`. Whether its path ends
/// with `/` is checked when a request is constructed, not here, so that a
/// misconfigured base fails each call deterministically before any I/O.
///
/// Host-only URLs such as `https://openapi.doordash.com` are normalized by
/// the URL parser to a `/` path and are therefore valid bases.
///
/// # Example
///
/// ```rust
/// use doordash_drive::BaseUrl;
///
/// let base = BaseUrl::new("https://openapi.doordash.com/").unwrap();
/// assert!(base.has_trailing_slash());
///
/// let base = BaseUrl::new("https://example.com/api").unwrap();
/// assert!(!base.has_trailing_slash());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Parses and validates a base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// is not `http`/`https`, or cannot be used as a base.
    pub fn new(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref();
        let invalid = || ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
        };

        let parsed = Url::parse(raw.trim()).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(invalid());
        }

        Ok(Self(parsed))
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }

    /// Returns `true` if the URL path ends with `/`.
    #[must_use]
    pub fn has_trailing_slash(&self) -> bool {
        self.0.path().ends_with('/')
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_rejects_empty() {
        assert_eq!(ApiToken::new(""), Err(ConfigError::EmptyAccessToken));
    }

    #[test]
    fn test_api_token_rejects_header_unsafe_characters() {
        for token in ["tok\nen", "tok en", "tok\u{7f}", "tökén", "token\r"] {
            assert_eq!(ApiToken::new(token), Err(ConfigError::InvalidAccessToken));
        }
        assert!(ApiToken::new("abc.DEF-123_~+/=").is_ok());
    }

    #[test]
    fn test_api_token_debug_is_masked() {
        let token = ApiToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_base_url_production_host_is_valid() {
        let base = BaseUrl::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(base.as_ref(), DEFAULT_BASE_URL);
        assert!(base.has_trailing_slash());
    }

    #[test]
    fn test_base_url_rejects_relative_url() {
        assert!(matches!(
            BaseUrl::new("developer/v1"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_rejects_non_http_scheme() {
        assert!(matches!(
            BaseUrl::new("ftp://openapi.doordash.com/"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("mailto:drive@doordash.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_without_trailing_slash_is_accepted_but_flagged() {
        let base = BaseUrl::new("https://openapi.doordash.com/drive").unwrap();
        assert!(!base.has_trailing_slash());
    }

    #[test]
    fn test_base_url_host_only_normalizes_to_root_path() {
        let base = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(base.url().path(), "/");
        assert!(base.has_trailing_slash());
    }
}
