//! Seed record types for property listings and investigations.
//!
//! These mirror the backend's catalogue and investigation aggregates without
//! creating a dependency on its domain crate. Enumerations use the same wire
//! names the backend expects so converted records deserialize cleanly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SeedDataError;

/// Kind of property a listing advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyKindSeed {
    /// Detached single-family house.
    SingleFamily,
    /// Condominium unit.
    Condo,
    /// Townhouse.
    Townhouse,
    /// Duplex.
    Duplex,
    /// Villa.
    Villa,
}

/// Sale status of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatusSeed {
    /// Listed and open for offers.
    #[default]
    Available,
    /// Offer accepted, sale in progress.
    Pending,
    /// Sale closed.
    Sold,
}

/// Workflow status of an investigation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestigationStatusSeed {
    /// Requested but not yet picked up.
    #[default]
    Pending,
    /// An investigator is working the request.
    InProgress,
    /// Investigation finished with findings.
    Completed,
    /// Request declined.
    Rejected,
}

/// A seed record for one property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSeed {
    /// Stable identifier for the listing.
    pub id: Uuid,
    /// Marketing title.
    pub title: String,
    /// Asking price in whole currency units.
    pub price: i64,
    /// Human-readable location, e.g. `"Downtown, New York"`.
    pub location: String,
    /// Kind of property advertised.
    pub kind: PropertyKindSeed,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms, in half-step increments.
    pub bathrooms: f64,
    /// Interior area in square feet.
    pub area: f64,
    /// Sale status.
    pub status: ListingStatusSeed,
    /// Whether an investigator has verified the listing.
    pub verified: bool,
    /// Listing agent's name.
    pub agent: String,
    /// Advertised features, e.g. `"City View"`.
    pub features: Vec<String>,
    /// Aggregate review rating in `0.0..=5.0`.
    pub rating: f32,
}

impl ListingSeed {
    /// Validates the record's numeric ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SeedDataError::RatingOutOfRange`] when the rating falls
    /// outside `0.0..=5.0`.
    pub fn validate(&self) -> Result<(), SeedDataError> {
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(SeedDataError::RatingOutOfRange { value: self.rating });
        }
        Ok(())
    }
}

/// A seed record for one investigation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigationSeed {
    /// Stable identifier for the request.
    pub id: Uuid,
    /// Listing the request targets.
    pub property_id: Uuid,
    /// Account assigned to investigate.
    pub investigator_id: Uuid,
    /// Workflow status.
    pub status: InvestigationStatusSeed,
    /// Findings recorded so far, one entry per observation.
    pub findings: Vec<String>,
    /// Confidence score in `0..=100`.
    pub score: u32,
}

impl InvestigationSeed {
    /// Validates the record's numeric ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SeedDataError::ScoreOutOfRange`] when the score exceeds 100.
    pub const fn validate(&self) -> Result<(), SeedDataError> {
        if self.score > 100 {
            return Err(SeedDataError::ScoreOutOfRange { value: self.score });
        }
        Ok(())
    }
}

/// Returns the curated flagship listings shown on every demo install.
///
/// Identifiers are stable across runs so bookmarked listing pages keep
/// working after a restart.
#[must_use]
pub fn curated_listings() -> Vec<ListingSeed> {
    vec![
        ListingSeed {
            id: Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_1001),
            title: "Modern Downtown Apartment".to_owned(),
            price: 450_000,
            location: "Downtown, New York".to_owned(),
            kind: PropertyKindSeed::Condo,
            bedrooms: 2,
            bathrooms: 2.0,
            area: 1200.0,
            status: ListingStatusSeed::Available,
            verified: true,
            agent: "Sarah Johnson".to_owned(),
            features: vec![
                "City View".to_owned(),
                "Modern Kitchen".to_owned(),
                "Parking".to_owned(),
                "Gym Access".to_owned(),
            ],
            rating: 4.8,
        },
        ListingSeed {
            id: Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_1002),
            title: "Suburban Family House".to_owned(),
            price: 650_000,
            location: "Westfield, New Jersey".to_owned(),
            kind: PropertyKindSeed::SingleFamily,
            bedrooms: 4,
            bathrooms: 3.0,
            area: 2400.0,
            status: ListingStatusSeed::Available,
            verified: false,
            agent: "Michael Chen".to_owned(),
            features: vec![
                "Backyard".to_owned(),
                "Garage".to_owned(),
                "School District".to_owned(),
                "Fireplace".to_owned(),
            ],
            rating: 4.5,
        },
        ListingSeed {
            id: Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_1003),
            title: "Luxury Waterfront Condo".to_owned(),
            price: 1_200_000,
            location: "Miami Beach, Florida".to_owned(),
            kind: PropertyKindSeed::Condo,
            bedrooms: 3,
            bathrooms: 3.0,
            area: 1800.0,
            status: ListingStatusSeed::Pending,
            verified: true,
            agent: "Elena Rodriguez".to_owned(),
            features: vec![
                "Ocean View".to_owned(),
                "Private Balcony".to_owned(),
                "Concierge".to_owned(),
                "Pool".to_owned(),
            ],
            rating: 4.9,
        },
    ]
}
