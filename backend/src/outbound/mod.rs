//! Outbound adapters implementing domain ports.
//!
//! Adapters are thin translators between domain types and the demo data
//! that backs this deployment. They contain no business logic:
//!
//! - **demo_directory**: the fixed demo account directory plus the demo
//!   auto-provision login behaviour
//! - **memory**: in-memory catalogue and investigation stores seeded from
//!   the `demo-data` crate

pub mod demo_directory;
pub mod memory;

pub use demo_directory::DemoAuthService;
pub use memory::{InMemoryCatalogue, InMemoryInvestigations};
