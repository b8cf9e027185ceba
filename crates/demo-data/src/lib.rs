//! Deterministic demo data for the OpenHome marketplace.
//!
//! This crate supplies the fixed demo account directory and reproducible
//! property listing and investigation generation used to seed the backend's
//! in-memory adapters. It is independent of backend domain types to avoid
//! circular dependencies: the backend converts seed records into its own
//! validated types at the point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - A fixed directory of demo accounts (buyer, investigator, admin) and the
//!   shared demo secret
//! - A curated set of flagship property listings with stable identifiers
//! - Deterministic generation of additional listings and investigation
//!   requests using a named seed
//!
//! # Example
//!
//! ```
//! use demo_data::{demo_accounts, generate_listings, DEMO_SECRET};
//!
//! let accounts = demo_accounts();
//! assert_eq!(accounts.len(), 3);
//! assert_eq!(DEMO_SECRET, "demo123");
//!
//! let listings = generate_listings(42, 5);
//! assert_eq!(listings, generate_listings(42, 5));
//! ```

mod accounts;
mod error;
mod generator;
mod listing;

pub use accounts::{
    ADMIN_ACCOUNT_ID, BUYER_ACCOUNT_ID, DEMO_SECRET, DemoAccount, INVESTIGATOR_ACCOUNT_ID,
    demo_accounts,
};
pub use error::SeedDataError;
pub use generator::{generate_investigations, generate_listings};
pub use listing::{
    InvestigationSeed, InvestigationStatusSeed, ListingSeed, ListingStatusSeed, PropertyKindSeed,
    curated_listings,
};
