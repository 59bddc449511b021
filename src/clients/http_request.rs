//! HTTP request types for the DoorDash Drive SDK.
//!
//! An [`HttpRequest`] is produced by
//! [`HttpClient::new_request`](crate::HttpClient::new_request): the URL is
//! already resolved, headers are attached and the body is serialized. Nothing
//! has been sent yet.

use std::collections::HashMap;
use std::fmt;

use reqwest::Url;

/// MIME type used for every request body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP methods used by the Drive API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method (used by the API to cancel deliveries).
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
}

impl HttpMethod {
    /// Returns the method token as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
        }
    }

    pub(crate) const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully formed request that has not been sent.
///
/// The `Debug` output masks the `Authorization` header.
#[derive(Clone)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The resolved absolute URL.
    pub url: Url,
    /// Headers to send.
    pub headers: HashMap<String, String>,
    /// The serialized JSON body, if any.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Appends query parameters to the URL, preserving their order.
    ///
    /// An empty slice leaves the URL untouched (no dangling `?`).
    pub fn append_query<K, V>(&mut self, params: &[(K, V)])
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if params.is_empty() {
            return;
        }
        let mut pairs = self.url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key.as_ref(), value.as_ref());
        }
    }

    /// Returns the body as UTF-8 text, if present.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|body| std::str::from_utf8(body).ok())
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case("authorization") {
                    (key.as_str(), "Bearer *****")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("HttpRequest")
            .field("http_method", &self.http_method)
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .field("body", &self.body_text())
            .finish()
    }
}
