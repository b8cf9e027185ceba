//! Deterministic listing and investigation generation.
//!
//! The same seed value always produces identical output, so demo installs
//! and tests can rely on stable catalogues without shipping fixture files.

use fake::Fake;
use fake::faker::address::raw::CityName;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::listing::{
    InvestigationSeed, InvestigationStatusSeed, ListingSeed, ListingStatusSeed, PropertyKindSeed,
};

const KINDS: [PropertyKindSeed; 5] = [
    PropertyKindSeed::SingleFamily,
    PropertyKindSeed::Condo,
    PropertyKindSeed::Townhouse,
    PropertyKindSeed::Duplex,
    PropertyKindSeed::Villa,
];

const TITLE_LEADS: [&str; 6] = [
    "Charming", "Sunlit", "Renovated", "Spacious", "Cosy", "Elegant",
];

const FEATURE_POOL: [&str; 8] = [
    "Garage",
    "Garden",
    "Fireplace",
    "Parking",
    "Balcony",
    "Pool",
    "Gym Access",
    "Smart Home",
];

/// Price per square foot used when deriving asking prices.
const PRICE_PER_SQFT: i64 = 280;

/// Generates `count` reproducible property listings.
///
/// Identifiers, prices, agents, and features are all derived from the seed,
/// so the same `(seed, count)` pair yields an identical catalogue.
///
/// # Example
///
/// ```
/// use demo_data::generate_listings;
///
/// let listings = generate_listings(7, 4);
/// assert_eq!(listings.len(), 4);
/// assert_eq!(listings, generate_listings(7, 4));
/// ```
#[must_use]
pub fn generate_listings(seed: u64, count: usize) -> Vec<ListingSeed> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| generate_listing(&mut rng)).collect()
}

fn generate_listing(rng: &mut ChaCha8Rng) -> ListingSeed {
    let kind = KINDS.choose(rng).copied().unwrap_or(PropertyKindSeed::Condo);
    let bedrooms: u32 = rng.random_range(1..=5);
    // Half-step bathrooms, never more than bedrooms + 1.
    let bathrooms = f64::from(rng.random_range(2..=(bedrooms * 2 + 2))) / 2.0;
    let area = f64::from(rng.random_range(600_u32..=3_600));
    let city: String = CityName(EN).fake_with_rng(rng);
    let agent_first: String = FirstName(EN).fake_with_rng(rng);
    let agent_last: String = LastName(EN).fake_with_rng(rng);
    let lead = TITLE_LEADS.choose(rng).copied().unwrap_or("Charming");

    let status = match rng.random_range(0_u8..10) {
        0 => ListingStatusSeed::Sold,
        1 | 2 => ListingStatusSeed::Pending,
        _ => ListingStatusSeed::Available,
    };

    let feature_count = rng.random_range(2_usize..=4);
    let mut features: Vec<String> = FEATURE_POOL
        .choose_multiple(rng, feature_count)
        .map(|feature| (*feature).to_owned())
        .collect();
    features.sort_unstable();

    #[expect(
        clippy::cast_possible_truncation,
        reason = "area stays far below i64::MAX; truncation cannot occur"
    )]
    let price = (area * PRICE_PER_SQFT as f64) as i64 + i64::from(bedrooms) * 15_000;

    ListingSeed {
        id: Uuid::from_u128(rng.random()),
        title: format!("{lead} {} in {city}", kind_label(kind)),
        price,
        location: city.clone(),
        kind,
        bedrooms,
        bathrooms,
        area,
        status,
        verified: rng.random_bool(0.4),
        agent: format!("{agent_first} {agent_last}"),
        features,
        rating: f32::from(rng.random_range(30_u8..=50)) / 10.0,
    }
}

const fn kind_label(kind: PropertyKindSeed) -> &'static str {
    match kind {
        PropertyKindSeed::SingleFamily => "Family House",
        PropertyKindSeed::Condo => "Condo",
        PropertyKindSeed::Townhouse => "Townhouse",
        PropertyKindSeed::Duplex => "Duplex",
        PropertyKindSeed::Villa => "Villa",
    }
}

/// Generates reproducible investigation requests over the given listings.
///
/// Every unverified listing receives a request assigned to
/// `investigator_id`; roughly one third are already in progress and a
/// further third completed with findings and a score.
#[must_use]
pub fn generate_investigations(
    seed: u64,
    listings: &[ListingSeed],
    investigator_id: Uuid,
) -> Vec<InvestigationSeed> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    listings
        .iter()
        .filter(|listing| !listing.verified)
        .map(|listing| generate_investigation(&mut rng, listing.id, investigator_id))
        .collect()
}

fn generate_investigation(
    rng: &mut ChaCha8Rng,
    property_id: Uuid,
    investigator_id: Uuid,
) -> InvestigationSeed {
    let status = match rng.random_range(0_u8..3) {
        0 => InvestigationStatusSeed::Pending,
        1 => InvestigationStatusSeed::InProgress,
        _ => InvestigationStatusSeed::Completed,
    };
    let (findings, score) = if status == InvestigationStatusSeed::Completed {
        (
            vec![
                "Title deed matches the land registry".to_owned(),
                "No outstanding liens found".to_owned(),
            ],
            rng.random_range(55_u32..=98),
        )
    } else {
        (Vec::new(), 0)
    };

    InvestigationSeed {
        id: Uuid::from_u128(rng.random()),
        property_id,
        investigator_id,
        status,
        findings,
        score,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::listing::curated_listings;

    #[rstest]
    #[case(0, 1)]
    #[case(42, 8)]
    #[case(u64::MAX, 3)]
    fn generation_is_deterministic(#[case] seed: u64, #[case] count: usize) {
        assert_eq!(generate_listings(seed, count), generate_listings(seed, count));
    }

    #[test]
    fn generated_listings_pass_validation() {
        for listing in generate_listings(42, 20) {
            listing.validate().expect("generated listing valid");
            assert!(listing.bedrooms >= 1);
            assert!(listing.bathrooms >= 1.0);
            assert!(listing.price > 0);
        }
    }

    #[test]
    fn distinct_seeds_disagree() {
        assert_ne!(generate_listings(1, 5), generate_listings(2, 5));
    }

    #[test]
    fn investigations_cover_unverified_listings_only() {
        let listings = curated_listings();
        let investigator = Uuid::from_u128(2);
        let investigations = generate_investigations(9, &listings, investigator);
        let unverified = listings.iter().filter(|l| !l.verified).count();
        assert_eq!(investigations.len(), unverified);
        for investigation in &investigations {
            investigation.validate().expect("generated request valid");
            assert_eq!(investigation.investigator_id, investigator);
            assert!(listings.iter().any(|l| l.id == investigation.property_id));
        }
    }
}
