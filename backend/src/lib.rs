//! OpenHome backend library.
//!
//! A session-authenticated HTTP API for the property marketplace demo:
//! demo login with auto-provisioning, a catalogue of seeded listings, a
//! pure estimate calculator, and the listing investigation workflow.
//! Layered hexagonally: `domain` holds the model and ports, `inbound`
//! adapts HTTP onto it, `outbound` supplies the demo adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware applied to the whole application.
pub use middleware::Trace;
