//! HTTP client for DoorDash Drive API communication.
//!
//! This module provides the [`HttpClient`] type. Every resource operation
//! funnels through [`HttpClient::make_request`], which constructs one
//! request, sends it once and decodes the body.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::Credentials;
use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest, CONTENT_TYPE_JSON};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiToken, BaseUrl, DriveConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the DoorDash Drive API.
///
/// The client handles:
/// - Relative path resolution against the base URL
/// - Bearer token injection (static or freshly minted per request)
/// - JSON request bodies and tolerant JSON response decoding
///
/// It never retries, caches or paginates. Configuration is fixed at
/// construction time.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The underlying `reqwest::Client` pools
/// connections, so one client can serve many concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use doordash_drive::HttpClient;
///
/// let client = HttpClient::from_token("my-token")?;
/// let delivery = client.get_delivery_status("D-12345").await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base endpoint every path is resolved against.
    base_url: BaseUrl,
    /// Source of the bearer token.
    credentials: Credentials,
    /// Headers included in all requests (everything except `Authorization`).
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying transport cannot be
    /// created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use doordash_drive::{ApiToken, DriveConfig, HttpClient};
    ///
    /// let config = DriveConfig::builder()
    ///     .credentials(ApiToken::new("my-token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config).unwrap();
    /// assert_eq!(client.base_url().as_ref(), "https://openapi.doordash.com/");
    /// ```
    pub fn new(config: &DriveConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}DoorDash Drive Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), CONTENT_TYPE_JSON.to_string());
        default_headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            credentials: config.credentials().clone(),
            default_headers,
        })
    }

    /// Creates a client for the production endpoint with a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Config`] if the token is empty, or
    /// [`HttpError::Network`] if the transport cannot be created.
    pub fn from_token(token: impl Into<String>) -> Result<Self, HttpError> {
        let config = DriveConfig::builder()
            .credentials(ApiToken::new(token)?)
            .build()?;
        Self::new(&config)
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Constructs a request without sending it.
    ///
    /// `path` is resolved against the base URL with standard relative-URL
    /// rules: a leading `/` replaces the base path, anything else is
    /// appended after the base's last `/`. A supplied body is serialized to
    /// JSON as-is (no HTML escaping).
    ///
    /// # Errors
    ///
    /// - [`InvalidHttpRequestError::MissingTrailingSlash`] if the base URL
    ///   path does not end with `/`
    /// - [`InvalidHttpRequestError::InvalidPath`] if `path` cannot be resolved
    /// - [`HttpError::Serialization`] if the body or a minted token cannot be
    ///   encoded
    ///
    /// # Example
    ///
    /// ```rust
    /// use doordash_drive::{HttpClient, HttpMethod};
    ///
    /// let client = HttpClient::from_token("my-token").unwrap();
    /// let request = client
    ///     .new_request(HttpMethod::Get, "drive/v2/deliveries/D-1", None::<&()>)
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     request.url.as_str(),
    ///     "https://openapi.doordash.com/drive/v2/deliveries/D-1"
    /// );
    /// ```
    pub fn new_request<B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest, HttpError>
    where
        B: Serialize + ?Sized,
    {
        if !self.base_url.has_trailing_slash() {
            return Err(InvalidHttpRequestError::MissingTrailingSlash {
                base_url: self.base_url.to_string(),
            }
            .into());
        }

        let url = self
            .base_url
            .url()
            .join(path)
            .map_err(|e| InvalidHttpRequestError::InvalidPath {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(HttpError::Serialization)?;

        let token = self
            .credentials
            .bearer_token()
            .map_err(HttpError::Serialization)?;

        let mut headers = self.default_headers.clone();
        headers.insert("Authorization".to_string(), format!("Bearer {token}"));

        Ok(HttpRequest {
            http_method: method,
            url,
            headers,
            body,
        })
    }

    /// Sends a constructed request and reads the full response.
    ///
    /// Exactly one attempt is made. The response body is read to the end,
    /// which releases the connection whatever the outcome. Non-2xx statuses
    /// are logged but are not errors; inspect [`HttpResponse::code`] if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] on connection failure, timeout, or an
    /// error while reading the body.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let HttpRequest {
            http_method,
            url,
            headers,
            body,
        } = request;

        tracing::debug!("Sending {} request to {}", http_method, url.path());

        let mut req_builder = self.client.request(http_method.as_reqwest(), url.clone());
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = body {
            req_builder = req_builder.body(body);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!("Received {} from {} {}", code, http_method, url.path());
        if !(200..=299).contains(&code) {
            tracing::warn!(
                "DoorDash Drive API returned status {} for {} {}",
                code,
                http_method,
                url.path()
            );
        }

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Constructs, sends and decodes a single request.
    ///
    /// `query` pairs are appended to the resolved URL in order. An empty
    /// response body yields `T::default()`.
    ///
    /// # Errors
    ///
    /// Any error from [`new_request`](Self::new_request),
    /// [`execute`](Self::execute) or [`HttpResponse::decode`], unmodified.
    pub async fn make_request<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let mut request = self.new_request(method, path, body)?;
        request.append_query(query);

        let response = self.execute(request).await?;
        Ok(response.decode()?.unwrap_or_default())
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
