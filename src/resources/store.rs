//! Store resource.
//!
//! A store is a pickup location that belongs to a business. Both are
//! addressed by caller-chosen external IDs, so every store path is nested
//! under `/developer/v1/businesses/{external_business_id}/stores`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::resources::{list_query, NO_BODY};

fn stores_path(external_business_id: &str) -> String {
    format!("/developer/v1/businesses/{external_business_id}/stores")
}

/// Payload for creating a store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NewStore {
    /// Caller-chosen identifier, unique within the business.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_store_id: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Store phone number in E.164 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Full street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Payload for updating a store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StoreUpdate {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Store phone number in E.164 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Full street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A store as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StoreInfo {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The owning business.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_business_id: Option<String>,

    /// Caller-chosen identifier, unique within the business.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_store_id: Option<String>,

    /// Store phone number in E.164 format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Full street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// `"active"` or `"inactive"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Whether this store lives in the sandbox environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,

    /// When the store was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the store was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,
}

/// One page of stores.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StoreInfoList {
    /// Stores on this page, in server order.
    #[serde(default)]
    pub result: Vec<StoreInfo>,

    /// Token for the next page; pass it back to [`HttpClient::list_stores`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,

    /// Number of results reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_count: Option<u32>,
}

impl HttpClient {
    /// Creates a store under a business.
    ///
    /// `POST /developer/v1/businesses/{external_business_id}/stores`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn create_store(
        &self,
        external_business_id: &str,
        store: &NewStore,
    ) -> Result<StoreInfo, HttpError> {
        let path = stores_path(external_business_id);
        self.make_request(HttpMethod::Post, &path, &[], Some(store))
            .await
    }

    /// Lists the stores of a business, one page at a time.
    ///
    /// `GET /developer/v1/businesses/{external_business_id}/stores`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn list_stores(
        &self,
        external_business_id: &str,
        activation_status: Option<&str>,
        pagination_token: Option<&str>,
    ) -> Result<StoreInfoList, HttpError> {
        let path = stores_path(external_business_id);
        let query = list_query(activation_status, pagination_token);
        self.make_request(HttpMethod::Get, &path, &query, NO_BODY)
            .await
    }

    /// Fetches a store.
    ///
    /// `GET /developer/v1/businesses/{external_business_id}/stores/{external_store_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn get_store(
        &self,
        external_business_id: &str,
        external_store_id: &str,
    ) -> Result<StoreInfo, HttpError> {
        let path = format!("{}/{external_store_id}", stores_path(external_business_id));
        self.make_request(HttpMethod::Get, &path, &[], NO_BODY).await
    }

    /// Updates a store.
    ///
    /// `PATCH /developer/v1/businesses/{external_business_id}/stores/{external_store_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn update_store(
        &self,
        external_business_id: &str,
        external_store_id: &str,
        update: &StoreUpdate,
    ) -> Result<StoreInfo, HttpError> {
        let path = format!("{}/{external_store_id}", stores_path(external_business_id));
        self.make_request(HttpMethod::Patch, &path, &[], Some(update))
            .await
    }
}
