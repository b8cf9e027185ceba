//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (the demo account directory, the in-memory catalogue and investigation
//! stores). Each trait exposes strongly typed errors so adapters map their
//! failures into predictable variants.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use super::auth::{LoginCredentials, SignupDetails};
use super::error::Error;
use super::investigation::{Investigation, InvestigationStatus, InvestigationTransitionError};
use super::property::PropertyListing;
use super::user::Identity;

/// Authenticates callers and fabricates demo identities.
///
/// Login fails only on a wrong secret; see the demo adapter for the
/// deliberate auto-provision behaviour. Signup always succeeds.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Validate credentials and return the authenticated identity.
    async fn login(&self, credentials: &LoginCredentials) -> Result<Identity, Error>;

    /// Fabricate an identity for the given signup details.
    async fn signup(&self, details: &SignupDetails) -> Result<Identity, Error>;
}

/// Errors surfaced by the property catalogue adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// No listing exists under the requested identifier.
    #[error("listing {id} not found")]
    NotFound {
        /// Identifier the caller asked for.
        id: Uuid,
    },
}

/// Read access to the marketplace catalogue.
#[async_trait]
pub trait PropertyCatalogue: Send + Sync {
    /// All listings, in stable order.
    async fn list(&self) -> Result<Vec<PropertyListing>, CatalogueError>;

    /// One listing by id.
    async fn get(&self, id: Uuid) -> Result<PropertyListing, CatalogueError>;
}

/// Errors surfaced by the investigation store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvestigationStoreError {
    /// No investigation exists under the requested identifier.
    #[error("investigation {id} not found")]
    NotFound {
        /// Identifier the caller asked for.
        id: Uuid,
    },
    /// The requested status move is not in the transition relation.
    #[error(transparent)]
    IllegalTransition(#[from] InvestigationTransitionError),
}

/// Read/write access to investigation requests.
#[async_trait]
pub trait InvestigationRepository: Send + Sync {
    /// All investigations, in stable order.
    async fn list(&self) -> Result<Vec<Investigation>, InvestigationStoreError>;

    /// One investigation by id.
    async fn get(&self, id: Uuid) -> Result<Investigation, InvestigationStoreError>;

    /// Move an investigation to `target`, returning the updated record.
    async fn transition(
        &self,
        id: Uuid,
        target: InvestigationStatus,
        now: DateTime<Utc>,
    ) -> Result<Investigation, InvestigationStoreError>;
}
