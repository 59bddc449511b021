//! Business resource.
//!
//! A business is a merchant account identified by an externally supplied
//! business ID. Stores are registered underneath it.
//!
//! # Example
//!
//! ```rust,ignore
//! use doordash_drive::{HttpClient, NewBusiness};
//!
//! let client = HttpClient::from_token("my-token")?;
//!
//! let business = client
//!     .create_business(&NewBusiness {
//!         external_business_id: Some("B-12345".to_string()),
//!         name: Some("Neighborhood Deli".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let page = client.list_businesses(Some("active"), None).await?;
//! for business in &page.result {
//!     println!("{:?}", business.name);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::resources::{list_query, NO_BODY};

const BUSINESSES_PATH: &str = "/developer/v1/businesses";

/// Payload for creating a business.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NewBusiness {
    /// Caller-chosen unique identifier for the business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_business_id: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `"active"` or `"inactive"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_status: Option<String>,
}

/// Payload for updating a business.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BusinessUpdate {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `"active"` or `"inactive"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_status: Option<String>,
}

/// A business as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BusinessInfo {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Caller-chosen unique identifier for the business.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_business_id: Option<String>,

    /// `"active"` or `"inactive"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_status: Option<String>,

    /// When the business was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the business was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,

    /// Whether this business lives in the sandbox environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,

    /// Additional information attached by DoorDash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_metadata: Option<ExternalMetadata>,
}

/// Metadata nested in [`BusinessInfo`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExternalMetadata {
    /// Number of stores registered under the business.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_stores: Option<u32>,

    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,

    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone_number: Option<String>,
}

/// One page of businesses.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BusinessInfoList {
    /// Businesses on this page, in server order.
    #[serde(default)]
    pub result: Vec<BusinessInfo>,

    /// Token for the next page; pass it back to
    /// [`HttpClient::list_businesses`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,

    /// Number of results reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_count: Option<u32>,
}

impl HttpClient {
    /// Creates a business.
    ///
    /// `POST /developer/v1/businesses`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn create_business(&self, business: &NewBusiness) -> Result<BusinessInfo, HttpError> {
        self.make_request(HttpMethod::Post, BUSINESSES_PATH, &[], Some(business))
            .await
    }

    /// Lists businesses, one page at a time.
    ///
    /// `GET /developer/v1/businesses?activation_status=..&pagination_token=..`
    ///
    /// Parameters left as `None` are not sent.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn list_businesses(
        &self,
        activation_status: Option<&str>,
        pagination_token: Option<&str>,
    ) -> Result<BusinessInfoList, HttpError> {
        let query = list_query(activation_status, pagination_token);
        self.make_request(HttpMethod::Get, BUSINESSES_PATH, &query, NO_BODY)
            .await
    }

    /// Fetches a business.
    ///
    /// `GET /developer/v1/businesses/{external_business_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn get_business(&self, external_business_id: &str) -> Result<BusinessInfo, HttpError> {
        let path = format!("{BUSINESSES_PATH}/{external_business_id}");
        self.make_request(HttpMethod::Get, &path, &[], NO_BODY).await
    }

    /// Updates a business.
    ///
    /// `PATCH /developer/v1/businesses/{external_business_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn update_business(
        &self,
        external_business_id: &str,
        update: &BusinessUpdate,
    ) -> Result<BusinessInfo, HttpError> {
        let path = format!("{BUSINESSES_PATH}/{external_business_id}");
        self.make_request(HttpMethod::Patch, &path, &[], Some(update))
            .await
    }
}
