//! HTTP-specific error types for the DoorDash Drive SDK.
//!
//! # Error Handling
//!
//! - [`InvalidHttpRequestError`]: a request could not be constructed (bad
//!   base URL or unresolvable path); raised before any I/O
//! - [`HttpError`]: unified error type for every client operation
//!
//! The client never retries and never adds context to an error: whatever
//! fails is returned to the caller as-is.
//!
//! # Example
//!
//! ```rust,ignore
//! use doordash_drive::HttpError;
//!
//! match client.get_delivery_status("D-12345").await {
//!     Ok(delivery) => println!("Status: {:?}", delivery.delivery_status),
//!     Err(HttpError::InvalidRequest(e)) => println!("Bad configuration: {e}"),
//!     Err(HttpError::Network(e)) => println!("Transport failure: {e}"),
//!     Err(HttpError::Decode(e)) => println!("Unexpected response body: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// Error returned when a request cannot be constructed.
///
/// # Example
///
/// ```rust
/// use doordash_drive::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingTrailingSlash {
///     base_url: "https://example.com/api".to_string(),
/// };
/// assert!(error.to_string().contains("trailing slash"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The base URL path does not end with `/`.
    #[error("Base URL must have a trailing slash, but \"{base_url}\" does not.")]
    MissingTrailingSlash {
        /// The offending base URL.
        base_url: String,
    },

    /// The relative path could not be resolved against the base URL.
    #[error("Cannot resolve path \"{path}\" against the base URL: {reason}")]
    InvalidPath {
        /// The path that failed to resolve.
        path: String,
        /// Why resolution failed.
        reason: String,
    },
}

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request construction failed before any I/O.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Client configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request payload could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Network, connection or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A non-empty response body did not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
