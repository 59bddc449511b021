//! HTTP response types for the DoorDash Drive SDK.
//!
//! This module provides the [`HttpResponse`] type and the tolerant JSON
//! decoding shared by every resource operation.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpError;

/// An HTTP response from the Drive API.
///
/// The body has already been read in full, so the underlying connection has
/// been released back to the pool.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (lowercased names; headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the body is empty or whitespace only.
    #[must_use]
    pub fn is_empty_body(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes the body as JSON.
    ///
    /// Returns `Ok(None)` for an empty body, which is not treated as an error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if a non-empty body is malformed or does
    /// not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, HttpError> {
        if self.is_empty_body() {
            return Ok(None);
        }
        serde_json::from_slice(&self.body)
            .map(Some)
            .map_err(HttpError::Decode)
    }

    /// Decodes the body into an existing destination.
    ///
    /// The destination is only overwritten when decoding succeeds; an empty
    /// body or a decode error leaves it exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] under the same conditions as [`decode`](Self::decode).
    pub fn decode_into<T: DeserializeOwned>(&self, destination: &mut T) -> Result<(), HttpError> {
        if let Some(value) = self.decode()? {
            *destination = value;
        }
        Ok(())
    }
}
