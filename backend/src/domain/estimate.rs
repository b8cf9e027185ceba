//! Property estimate calculator.
//!
//! A pure, deterministic valuation formula over a property description and a
//! service tier. The inbound adapter validates numeric fields before calling
//! [`estimate`]; this module assumes finite, range-checked inputs and never
//! fails: unrecognised enum values fall back to a neutral multiplier.
//!
//! The pricing table is the canonical one recorded in `DESIGN.md`. Steps are
//! applied in a fixed order so results are reproducible:
//!
//! 1. tier base price
//! 2. × property-type coefficient
//! 3. + square footage × per-square-foot rate
//! 4. + bedrooms and bathrooms × per-room rates
//! 5. × age penalty (0.9 beyond 20 years, a further 0.85 beyond 50)
//! 6. × condition multiplier
//! 7. non-basic tiers only: + lot size × 50, × market-trend multiplier
//! 8. round to the nearest whole currency unit

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service tier selecting the pricing table and which optional fields apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Quick ballpark; ignores lot size and market trend.
    Basic,
    /// Standard valuation.
    Professional,
    /// Full valuation with the strongest condition weighting.
    Premium,
}

impl Tier {
    /// Whether lot size and market trend participate in the formula.
    pub fn uses_extended_fields(self) -> bool {
        !matches!(self, Self::Basic)
    }
}

/// Kind of property being valued.
///
/// `house` and `apartment` are accepted as aliases for
/// [`PropertyType::SingleFamily`] and [`PropertyType::Condo`]; unrecognised
/// wire values deserialize to [`PropertyType::Other`], which carries a
/// neutral coefficient rather than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    #[serde(alias = "house")]
    SingleFamily,
    #[serde(alias = "apartment")]
    Condo,
    Townhouse,
    Duplex,
    Villa,
    Commercial,
    #[serde(other)]
    Other,
}

/// Reported condition of the property.
///
/// `needs-renovation` is accepted as an alias for [`Condition::Poor`];
/// unrecognised values fall back to a neutral multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    #[serde(alias = "needs-renovation")]
    Poor,
    #[serde(other)]
    Other,
}

/// Direction of the local market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarketTrend {
    Rising,
    Stable,
    Declining,
    #[serde(other)]
    Other,
}

/// A structured property description, the calculator's sole input besides
/// the tier and valuation year.
///
/// Transient: exists for the duration of one calculation and is never
/// persisted. Numeric fields are validated by the inbound adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescription {
    /// Kind of property.
    pub property_type: PropertyType,
    /// Free-text location; informational only, no pricing effect.
    pub location: String,
    /// Interior area in square feet.
    pub square_footage: f64,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms, half-steps allowed.
    pub bathrooms: f64,
    /// Year of construction.
    pub year_built: i32,
    /// Reported condition.
    pub condition: Condition,
    /// Lot size in square feet. Ignored on the basic tier.
    pub lot_size: f64,
    /// Market direction. Ignored on the basic tier.
    pub market_trend: MarketTrend,
    /// Advertised features; informational only.
    #[serde(default)]
    pub features: String,
    /// Free-text notes; informational only.
    #[serde(default)]
    pub notes: String,
}

/// The outcome of one estimate calculation. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    /// Estimated value rounded to the nearest whole currency unit.
    pub value: i64,
    /// Tier the estimate was computed under.
    pub tier: Tier,
}

const fn base_price(tier: Tier) -> f64 {
    match tier {
        Tier::Basic => 200_000.0,
        Tier::Professional => 225_000.0,
        Tier::Premium => 250_000.0,
    }
}

const fn per_square_foot(tier: Tier) -> f64 {
    match tier {
        Tier::Basic => 100.0,
        Tier::Professional => 160.0,
        Tier::Premium => 200.0,
    }
}

const fn per_bedroom(tier: Tier) -> f64 {
    match tier {
        Tier::Basic => 10_000.0,
        Tier::Professional => 15_000.0,
        Tier::Premium => 20_000.0,
    }
}

const fn per_bathroom(tier: Tier) -> f64 {
    match tier {
        Tier::Basic => 5_000.0,
        Tier::Professional => 7_500.0,
        Tier::Premium => 10_000.0,
    }
}

const fn type_coefficient(property_type: PropertyType) -> f64 {
    match property_type {
        PropertyType::SingleFamily | PropertyType::Other => 1.0,
        PropertyType::Condo => 0.85,
        PropertyType::Townhouse => 0.9,
        PropertyType::Duplex => 1.1,
        PropertyType::Villa | PropertyType::Commercial => 1.5,
    }
}

const fn condition_multiplier(tier: Tier, condition: Condition) -> f64 {
    match (tier, condition) {
        (_, Condition::Good | Condition::Other) => 1.0,
        (Tier::Basic, Condition::Excellent) => 1.1,
        (Tier::Basic, Condition::Fair) => 0.9,
        (Tier::Basic, Condition::Poor) => 0.8,
        (Tier::Professional, Condition::Excellent) => 1.15,
        (Tier::Professional, Condition::Fair) => 0.85,
        (Tier::Professional, Condition::Poor) => 0.7,
        (Tier::Premium, Condition::Excellent) => 1.2,
        (Tier::Premium, Condition::Fair) => 0.8,
        (Tier::Premium, Condition::Poor) => 0.6,
    }
}

const fn trend_multiplier(trend: MarketTrend) -> f64 {
    match trend {
        MarketTrend::Rising => 1.08,
        MarketTrend::Declining => 0.95,
        MarketTrend::Stable | MarketTrend::Other => 1.0,
    }
}

/// Per-square-foot rate applied to the lot on non-basic tiers.
const LOT_RATE: f64 = 50.0;

/// Age beyond which the first depreciation step applies.
const AGE_PENALTY_THRESHOLD: i32 = 20;
/// Age beyond which the second, compounding depreciation step applies.
const AGE_HEAVY_PENALTY_THRESHOLD: i32 = 50;

/// Computes a property estimate.
///
/// Deterministic: identical `(description, tier, valuation_year)` inputs
/// always yield identical results. The valuation year is a parameter rather
/// than read from a clock so callers and tests control it explicitly.
pub fn estimate(
    description: &PropertyDescription,
    tier: Tier,
    valuation_year: i32,
) -> EstimateResult {
    let mut value = base_price(tier);
    value *= type_coefficient(description.property_type);
    value += description.square_footage * per_square_foot(tier);
    value += f64::from(description.bedrooms) * per_bedroom(tier);
    value += description.bathrooms * per_bathroom(tier);

    let age = valuation_year - description.year_built;
    if age > AGE_PENALTY_THRESHOLD {
        value *= 0.9;
    }
    if age > AGE_HEAVY_PENALTY_THRESHOLD {
        value *= 0.85;
    }

    value *= condition_multiplier(tier, description.condition);

    if tier.uses_extended_fields() {
        value += description.lot_size * LOT_RATE;
        value *= trend_multiplier(description.market_trend);
    }

    // Validated inputs keep the value far below i64::MAX.
    let value = value.round() as i64;
    EstimateResult { value, tier }
}
