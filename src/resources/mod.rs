//! Typed DoorDash Drive resources.
//!
//! Each submodule declares the request and response records for one part of
//! the API and adds the matching operations to [`HttpClient`](crate::HttpClient):
//!
//! | Module | Operations |
//! |---|---|
//! | [`business`] | `create_business`, `list_businesses`, `get_business`, `update_business` |
//! | [`store`] | `create_store`, `list_stores`, `get_store`, `update_store` |
//! | [`delivery`] | `create_delivery`, `get_delivery_status`, `update_delivery`, `cancel_delivery` |
//! | [`quote`] | `create_delivery_quote`, `accept_delivery_quote` |
//!
//! All record fields are optional on the wire. Absent fields decode to
//! `None` (or an empty list) and `None` fields are left out when a payload
//! is serialized.
//!
//! API reference: <https://developer.doordash.com/en-US/api/drive>

pub mod business;
pub mod delivery;
pub mod quote;
pub mod store;

pub use business::{BusinessInfo, BusinessInfoList, BusinessUpdate, ExternalMetadata, NewBusiness};
pub use delivery::{DeliveryInfo, DeliveryUpdate, NewDelivery, TimeWindow};
pub use quote::NewQuote;
pub use store::{NewStore, StoreInfo, StoreInfoList, StoreUpdate};

/// Placeholder payload for requests without a body.
pub(crate) const NO_BODY: Option<&()> = None;

/// Query pairs shared by the business and store list endpoints.
///
/// Parameters that are `None` are not sent.
pub(crate) fn list_query<'a>(
    activation_status: Option<&'a str>,
    pagination_token: Option<&'a str>,
) -> Vec<(&'static str, &'a str)> {
    [
        ("activation_status", activation_status),
        ("pagination_token", pagination_token),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|value| (key, value)))
    .collect()
}
