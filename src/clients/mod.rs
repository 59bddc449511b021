//! HTTP client types for DoorDash Drive API communication.
//!
//! This module provides the shared request-construction and
//! response-decoding path used by every resource operation.
//!
//! # Overview
//!
//! - [`HttpClient`]: the async client; owns the base URL, credentials and
//!   pooled transport
//! - [`HttpRequest`]: a constructed request that has not been sent
//! - [`HttpResponse`]: a fully read response with tolerant JSON decoding
//! - [`HttpMethod`]: methods used by the Drive API
//! - [`HttpError`] / [`InvalidHttpRequestError`]: error types
//!
//! # Example
//!
//! ```rust,ignore
//! use doordash_drive::{HttpClient, HttpMethod, BusinessInfo};
//!
//! let client = HttpClient::from_token("my-token")?;
//!
//! // Two-step form: construct, then execute
//! let request = client.new_request(HttpMethod::Get, "/developer/v1/businesses/B-1", None::<&()>)?;
//! let response = client.execute(request).await?;
//! let business: Option<BusinessInfo> = response.decode()?;
//!
//! // One-step form used by the resource methods
//! let business: BusinessInfo = client
//!     .make_request(HttpMethod::Get, "/developer/v1/businesses/B-1", &[], None::<&()>)
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call makes exactly one attempt, bounded by the
//! configured timeout; retrying is left to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, CONTENT_TYPE_JSON};
pub use http_response::HttpResponse;
