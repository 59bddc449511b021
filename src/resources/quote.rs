//! Quote resource.
//!
//! A quote prices a prospective delivery without dispatching a Dasher.
//! Accepting the quote turns it into a real delivery with the same
//! `external_delivery_id`.

use crate::clients::{HttpClient, HttpError, HttpMethod};
use crate::resources::{DeliveryInfo, NewDelivery, NO_BODY};

const QUOTES_PATH: &str = "drive/v2/quotes";

/// Payload for requesting a quote; identical in shape to [`NewDelivery`].
pub type NewQuote = NewDelivery;

/// Builds the accept path.
///
/// There is no `/` between the collection and the ID. This matches the
/// path the upstream client has always sent and is kept as-is.
fn accept_path(external_delivery_id: &str) -> String {
    format!("{QUOTES_PATH}{external_delivery_id}/accept")
}

impl HttpClient {
    /// Requests a delivery quote.
    ///
    /// `POST drive/v2/quotes`
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn create_delivery_quote(&self, quote: &NewQuote) -> Result<DeliveryInfo, HttpError> {
        self.make_request(HttpMethod::Post, QUOTES_PATH, &[], Some(quote))
            .await
    }

    /// Accepts a previously created quote.
    ///
    /// `POST drive/v2/quotes{external_delivery_id}/accept` with no body.
    /// Note the missing separator before the ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request cannot be built, sent or decoded.
    pub async fn accept_delivery_quote(
        &self,
        external_delivery_id: &str,
    ) -> Result<DeliveryInfo, HttpError> {
        let path = accept_path(external_delivery_id);
        self.make_request(HttpMethod::Post, &path, &[], NO_BODY).await
    }
}
