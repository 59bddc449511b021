//! Delivery resource.
//!
//! A delivery moves goods from a pickup location to a dropoff location and
//! moves through a status lifecycle (`quote`, `created`, `picked_up`,
//! `delivered`, `cancelled`, ...). Deliveries are addressed by the
//! caller-chosen `external_delivery_id`.
//!
//! Monetary amounts (`order_value`, `tip`, `fee`) are in the smallest unit
//! of the currency, e.g. cents.
//!
//! # Example
//!
//! ```rust,ignore
//! use doordash_drive::{HttpClient, NewDelivery};
//!
//! let client = HttpClient::from_token("my-token")?;
//!
//! let delivery = client
//!     .create_delivery(&NewDelivery {
//!         external_delivery_id: Some("D-12345".to_string()),
//!         pickup_address: Some("901 Market Street 6th Floor San Francisco, CA 94103".to_string()),
//!         dropoff_address: Some("901 Market Street 6th Floor San Francisco, CA 94103".to_string()),
//!         order_value: Some(1999),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("Tracking: {:?}", delivery.tracking_url);
//!
//! client.cancel_delivery("D-12345").await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::resources::NO_BODY;

const DELIVERIES_PATH: &str = "drive/v2/deliveries";

/// A pickup or dropoff time window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TimeWindow {
    /// Start of the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// End of the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Payload for creating a delivery (also used for quotes).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NewDelivery {
    /// Caller-chosen unique identifier for the delivery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_delivery_id: Option<String>,

    /// Language for Dasher and customer communication, e.g. `"en-US"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_business_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,

    /// Reference shown to the Dasher at pickup (e.g. an order number).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_reference_tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_external_business_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_external_store_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_business_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_contact_given_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_contact_family_name: Option<String>,

    /// Whether the recipient receives SMS updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_contact_send_notifications: Option<bool>,

    /// Order value in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_value: Option<i64>,

    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_window: Option<TimeWindow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_window: Option<TimeWindow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contactless_dropoff: Option<bool>,

    /// E.g. `"return_to_pickup"` or `"dispose"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_if_undeliverable: Option<String>,

    /// Dasher tip in cents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<i64>,
}

/// Payload for updating a delivery.
///
/// Same fields as [`NewDelivery`] minus the identifier and locale.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeliveryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_business_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_reference_tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_external_business_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_external_store_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_business_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_phone_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_contact_given_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_contact_family_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_contact_send_notifications: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contactless_dropoff: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_if_undeliverable: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_value: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_window: Option<TimeWindow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropoff_window: Option<TimeWindow>,
}

/// A delivery or quote as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeliveryInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_delivery_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_business_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_reference_tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_external_business_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_external_store_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_business_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_contact_given_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_contact_family_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_contact_send_notifications: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_value: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Lifecycle status, e.g. `"quote"`, `"created"`, `"delivered"`, `"cancelled"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time_estimated: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time_actual: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_time_estimated: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_time_actual: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_time_estimated: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_time_actual: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_address: Option<String>,

    /// Delivery fee in cents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_verification_image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_verification_image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contactless_dropoff: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_if_undeliverable: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<i64>,
}

impl HttpClient {
    /// Creates a delivery.
    ///
    /// `POST drive/v2/deliveries`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn create_delivery(&self, delivery: &NewDelivery) -> Result<DeliveryInfo, HttpError> {
        self.make_request(HttpMethod::Post, DELIVERIES_PATH, &[], Some(delivery))
            .await
    }

    /// Fetches the current state of a delivery.
    ///
    /// `GET drive/v2/deliveries/{external_delivery_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn get_delivery_status(
        &self,
        external_delivery_id: &str,
    ) -> Result<DeliveryInfo, HttpError> {
        let path = format!("{DELIVERIES_PATH}/{external_delivery_id}");
        self.make_request(HttpMethod::Get, &path, &[], NO_BODY).await
    }

    /// Updates a delivery.
    ///
    /// `PATCH drive/v2/deliveries/{external_delivery_id}`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn update_delivery(
        &self,
        external_delivery_id: &str,
        update: &DeliveryUpdate,
    ) -> Result<DeliveryInfo, HttpError> {
        let path = format!("{DELIVERIES_PATH}/{external_delivery_id}");
        self.make_request(HttpMethod::Patch, &path, &[], Some(update))
            .await
    }

    /// Cancels a delivery.
    ///
    /// `PUT drive/v2/deliveries/{external_delivery_id}` with no body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn cancel_delivery(
        &self,
        external_delivery_id: &str,
    ) -> Result<DeliveryInfo, HttpError> {
        let path = format!("{DELIVERIES_PATH}/{external_delivery_id}");
        self.make_request(HttpMethod::Put, &path, &[], NO_BODY).await
    }
}
