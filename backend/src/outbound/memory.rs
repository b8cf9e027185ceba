//! In-memory catalogue and investigation stores.
//!
//! This deployment has no database: listings and investigation requests
//! live in process memory, seeded deterministically from the `demo-data`
//! crate at startup. Locks are held only for the duration of a copy.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{
    CatalogueError, InvestigationRepository, InvestigationStoreError, PropertyCatalogue,
};
use crate::domain::{
    Investigation, InvestigationStatus, ListingStatus, PropertyListing, PropertyType, Score,
    UserId,
};

fn listing_from_seed(seed: &demo_data::ListingSeed) -> PropertyListing {
    PropertyListing {
        id: seed.id,
        title: seed.title.clone(),
        price: seed.price,
        location: seed.location.clone(),
        property_type: property_type_from_seed(seed.kind),
        bedrooms: seed.bedrooms,
        bathrooms: seed.bathrooms,
        area: seed.area,
        status: listing_status_from_seed(seed.status),
        verified: seed.verified,
        agent: seed.agent.clone(),
        features: seed.features.clone(),
        rating: seed.rating,
    }
}

const fn property_type_from_seed(kind: demo_data::PropertyKindSeed) -> PropertyType {
    match kind {
        demo_data::PropertyKindSeed::SingleFamily => PropertyType::SingleFamily,
        demo_data::PropertyKindSeed::Condo => PropertyType::Condo,
        demo_data::PropertyKindSeed::Townhouse => PropertyType::Townhouse,
        demo_data::PropertyKindSeed::Duplex => PropertyType::Duplex,
        demo_data::PropertyKindSeed::Villa => PropertyType::Villa,
    }
}

const fn listing_status_from_seed(status: demo_data::ListingStatusSeed) -> ListingStatus {
    match status {
        demo_data::ListingStatusSeed::Available => ListingStatus::Available,
        demo_data::ListingStatusSeed::Pending => ListingStatus::Pending,
        demo_data::ListingStatusSeed::Sold => ListingStatus::Sold,
    }
}

const fn status_from_seed(status: demo_data::InvestigationStatusSeed) -> InvestigationStatus {
    match status {
        demo_data::InvestigationStatusSeed::Pending => InvestigationStatus::Pending,
        demo_data::InvestigationStatusSeed::InProgress => InvestigationStatus::InProgress,
        demo_data::InvestigationStatusSeed::Completed => InvestigationStatus::Completed,
        demo_data::InvestigationStatusSeed::Rejected => InvestigationStatus::Rejected,
    }
}

fn investigation_from_seed(
    seed: &demo_data::InvestigationSeed,
    now: DateTime<Utc>,
) -> Option<Investigation> {
    let score = match Score::new(seed.score) {
        Ok(score) => score,
        Err(err) => {
            warn!(id = %seed.id, error = %err, "skipping invalid investigation seed");
            return None;
        }
    };
    let status = status_from_seed(seed.status);
    Some(Investigation {
        id: seed.id,
        property_id: seed.property_id,
        investigator_id: UserId::from(seed.investigator_id),
        status,
        request_date: now,
        completion_date: (status == InvestigationStatus::Completed).then_some(now),
        findings: seed.findings.clone(),
        score,
    })
}

/// Immutable in-memory property catalogue.
pub struct InMemoryCatalogue {
    listings: Vec<PropertyListing>,
}

impl InMemoryCatalogue {
    /// Build a catalogue from seed listings, preserving seed order.
    pub fn from_seeds(seeds: &[demo_data::ListingSeed]) -> Self {
        Self {
            listings: seeds.iter().map(listing_from_seed).collect(),
        }
    }
}

#[async_trait]
impl PropertyCatalogue for InMemoryCatalogue {
    async fn list(&self) -> Result<Vec<PropertyListing>, CatalogueError> {
        Ok(self.listings.clone())
    }

    async fn get(&self, id: Uuid) -> Result<PropertyListing, CatalogueError> {
        self.listings
            .iter()
            .find(|listing| listing.id == id)
            .cloned()
            .ok_or(CatalogueError::NotFound { id })
    }
}

/// Mutable in-memory investigation store.
pub struct InMemoryInvestigations {
    records: RwLock<HashMap<Uuid, Investigation>>,
    order: Vec<Uuid>,
}

impl InMemoryInvestigations {
    /// Build a store from seed records, preserving seed order for listings.
    pub fn from_seeds(seeds: &[demo_data::InvestigationSeed], now: DateTime<Utc>) -> Self {
        let mut records = HashMap::new();
        let mut order = Vec::with_capacity(seeds.len());
        for seed in seeds {
            if let Some(investigation) = investigation_from_seed(seed, now) {
                order.push(investigation.id);
                records.insert(investigation.id, investigation);
            }
        }
        Self {
            records: RwLock::new(records),
            order,
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, Investigation>> {
        self.records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Investigation>> {
        self.records
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl InvestigationRepository for InMemoryInvestigations {
    async fn list(&self) -> Result<Vec<Investigation>, InvestigationStoreError> {
        let records = self.read();
        Ok(self
            .order
            .iter()
            .filter_map(|id| records.get(id).cloned())
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Investigation, InvestigationStoreError> {
        self.read()
            .get(&id)
            .cloned()
            .ok_or(InvestigationStoreError::NotFound { id })
    }

    async fn transition(
        &self,
        id: Uuid,
        target: InvestigationStatus,
        now: DateTime<Utc>,
    ) -> Result<Investigation, InvestigationStoreError> {
        let mut records = self.write();
        let record = records
            .get_mut(&id)
            .ok_or(InvestigationStoreError::NotFound { id })?;
        record.transition(target, now)?;
        Ok(record.clone())
    }
}
