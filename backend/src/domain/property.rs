//! Property catalogue data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::estimate::PropertyType;

/// Sale status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Listed and open for offers.
    Available,
    /// Offer accepted, sale in progress.
    Pending,
    /// Sale closed.
    Sold,
}

/// One marketplace listing.
///
/// Immutable once seeded; the demo catalogue has no write path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListing {
    /// Stable identifier for the listing.
    #[schema(value_type = String)]
    pub id: Uuid,
    /// Marketing title.
    pub title: String,
    /// Asking price in whole currency units.
    pub price: i64,
    /// Human-readable location.
    pub location: String,
    /// Kind of property advertised.
    pub property_type: PropertyType,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms, half-steps allowed.
    pub bathrooms: f64,
    /// Interior area in square feet.
    pub area: f64,
    /// Sale status.
    pub status: ListingStatus,
    /// Whether an investigation verified the listing.
    pub verified: bool,
    /// Listing agent's name.
    pub agent: String,
    /// Advertised features.
    pub features: Vec<String>,
    /// Aggregate review rating in `0.0..=5.0`.
    pub rating: f32,
}
