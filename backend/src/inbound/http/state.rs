//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without infrastructure.

use std::sync::Arc;

use crate::domain::ports::{AuthService, InvestigationRepository, PropertyCatalogue};
use crate::outbound::{DemoAuthService, InMemoryCatalogue, InMemoryInvestigations};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Login/signup port.
    pub auth: Arc<dyn AuthService>,
    /// Catalogue read port.
    pub properties: Arc<dyn PropertyCatalogue>,
    /// Investigation read/write port.
    pub investigations: Arc<dyn InvestigationRepository>,
}

impl HttpState {
    /// Assemble state from explicit port implementations.
    pub fn new(
        auth: Arc<dyn AuthService>,
        properties: Arc<dyn PropertyCatalogue>,
        investigations: Arc<dyn InvestigationRepository>,
    ) -> Self {
        Self {
            auth,
            properties,
            investigations,
        }
    }

    /// Assemble state over the standard demo adapters, seeded from
    /// `demo-data` with the given seed.
    pub fn demo(seed: u64, generated_listings: usize) -> Self {
        let mut listings = demo_data::curated_listings();
        listings.extend(demo_data::generate_listings(seed, generated_listings));
        let investigations = demo_data::generate_investigations(
            seed,
            &listings,
            demo_data::INVESTIGATOR_ACCOUNT_ID,
        );
        Self::new(
            Arc::new(DemoAuthService::with_demo_directory()),
            Arc::new(InMemoryCatalogue::from_seeds(&listings)),
            Arc::new(InMemoryInvestigations::from_seeds(
                &investigations,
                chrono::Utc::now(),
            )),
        )
    }
}
