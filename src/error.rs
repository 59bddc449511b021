//! Error types for the DoorDash Drive SDK.
//!
//! This module contains error types used throughout the SDK for configuration
//! and credential validation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use doordash_drive::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant is raised before any network activity takes place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid DoorDash Drive bearer token.")]
    EmptyAccessToken,

    /// Access token contains characters that cannot be sent in a header.
    #[error("Access token must contain only visible ASCII characters (no whitespace or control characters).")]
    InvalidAccessToken,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://openapi.doordash.com/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The DoorDash access key could not be used.
    #[error("Invalid access key: {reason}")]
    InvalidAccessKey {
        /// Why the access key was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let message = ConfigError::EmptyAccessToken.to_string();
        assert!(message.contains("Access token cannot be empty"));
    }

    #[test]
    fn test_invalid_access_token_error_message() {
        let message = ConfigError::InvalidAccessToken.to_string();
        assert!(message.contains("visible ASCII"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("absolute"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "credentials",
        };
        let message = error.to_string();
        assert!(message.contains("credentials"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_access_key_error_message() {
        let error = ConfigError::InvalidAccessKey {
            reason: "key_id is empty".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid access key: key_id is empty");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
