//! # DoorDash Drive Rust SDK
//!
//! A typed async client for the DoorDash Drive delivery-logistics API:
//! businesses, stores, deliveries and delivery quotes.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`DriveConfig`] and [`DriveConfigBuilder`]
//! - Validated newtypes for the bearer token and base URL
//! - Bearer authentication with a static token or a developer [`AccessKey`]
//!   that mints a fresh JWT for every request
//! - A single request path ([`HttpClient::new_request`],
//!   [`HttpClient::execute`], [`HttpClient::make_request`]) shared by every
//!   resource operation
//! - Typed request and response records in [`resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use doordash_drive::{ApiToken, BaseUrl, DriveConfig, HttpClient};
//!
//! let config = DriveConfig::builder()
//!     .credentials(ApiToken::new("my-token").unwrap())
//!     .base_url(BaseUrl::new("https://openapi.doordash.com/").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config).unwrap();
//! ```
//!
//! ## Access Keys
//!
//! Drive credentials issued in the developer portal consist of a developer
//! ID, a key ID and a signing secret. Configure them instead of a token and
//! each request is signed with a short-lived JWT:
//!
//! ```rust
//! use doordash_drive::auth::{AccessKey, Credentials};
//! use doordash_drive::{DriveConfig, HttpClient};
//!
//! let key = AccessKey::new(
//!     "developer-id",
//!     "key-id",
//!     "ZHJpdmUtdGVzdC1zaWduaW5nLXNlY3JldC0wMTIzNDU2Nzg5",
//! )
//! .unwrap();
//!
//! let config = DriveConfig::builder()
//!     .credentials(Credentials::AccessKey(key))
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config).unwrap();
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use doordash_drive::{HttpClient, NewQuote};
//!
//! let client = HttpClient::from_token("my-token")?;
//!
//! let quote = client
//!     .create_delivery_quote(&NewQuote {
//!         external_delivery_id: Some("D-12345".to_string()),
//!         pickup_address: Some("901 Market Street 6th Floor San Francisco, CA 94103".to_string()),
//!         dropoff_address: Some("901 Market Street 6th Floor San Francisco, CA 94103".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Fee: {:?}", quote.fee);
//!
//! let delivery = client.accept_delivery_quote("D-12345").await?;
//! println!("Status: {:?}", delivery.delivery_status);
//! ```
//!
//! Request construction problems surface before anything is sent:
//!
//! ```rust
//! use doordash_drive::clients::InvalidHttpRequestError;
//! use doordash_drive::{ApiToken, BaseUrl, DriveConfig, HttpClient, HttpError, HttpMethod};
//!
//! let config = DriveConfig::builder()
//!     .credentials(ApiToken::new("my-token").unwrap())
//!     .base_url(BaseUrl::new("https://example.com/api").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config).unwrap();
//!
//! let result = client.new_request(HttpMethod::Get, "drive/v2/deliveries", None::<&()>);
//! assert!(matches!(
//!     result,
//!     Err(HttpError::InvalidRequest(InvalidHttpRequestError::MissingTrailingSlash { .. }))
//! ));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: the client is `Send + Sync` and never mutated after
//!   construction
//! - **Async-first**: designed for use with the Tokio runtime
//! - **No hidden behavior**: one attempt per call; no retries, caching or
//!   pagination

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::{AccessKey, Credentials};
pub use config::{ApiToken, BaseUrl, DriveConfig, DriveConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, InvalidHttpRequestError,
};

// Re-export resource records
pub use resources::{
    BusinessInfo, BusinessInfoList, BusinessUpdate, DeliveryInfo, DeliveryUpdate,
    ExternalMetadata, NewBusiness, NewDelivery, NewQuote, NewStore, StoreInfo, StoreInfoList,
    StoreUpdate, TimeWindow,
};
