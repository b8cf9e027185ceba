//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: every endpoint from the inbound layer, the shared error
//! schema, and the session cookie security scheme. The generated document
//! backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::estimate::{
    Condition, EstimateResult, MarketTrend, PropertyDescription, PropertyType, Tier,
};
use crate::domain::{
    Error, ErrorCode, Identity, Investigation, InvestigationStatus, ListingStatus,
    PropertyListing, Role, Score,
};
use crate::inbound::http::auth::{LoginRequest, SignupRequest};
use crate::inbound::http::estimates::EstimateRequest;
use crate::inbound::http::investigations::StatusChangeRequest;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login or /api/v1/signup.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "OpenHome backend API",
        description = "HTTP interface for the property marketplace demo: \
            session-authenticated catalogue access, estimates, and the \
            investigation workflow."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::me,
        crate::inbound::http::estimates::compute_estimate,
        crate::inbound::http::properties::list_properties,
        crate::inbound::http::properties::get_property,
        crate::inbound::http::investigations::list_investigations,
        crate::inbound::http::investigations::change_status,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Identity,
        Role,
        LoginRequest,
        SignupRequest,
        EstimateRequest,
        EstimateResult,
        PropertyDescription,
        PropertyType,
        Condition,
        MarketTrend,
        Tier,
        PropertyListing,
        ListingStatus,
        Investigation,
        InvestigationStatus,
        Score,
        StatusChangeRequest,
    )),
    tags(
        (name = "auth", description = "Login, signup, and session endpoints"),
        (name = "properties", description = "Catalogue browsing"),
        (name = "estimates", description = "Property valuation"),
        (name = "investigations", description = "Listing verification workflow"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_names() -> Vec<String> {
        ApiDoc::openapi()
            .components
            .as_ref()
            .expect("components")
            .schemas
            .keys()
            .cloned()
            .collect()
    }

    #[test]
    fn document_registers_all_api_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for path in [
            "/api/v1/login",
            "/api/v1/signup",
            "/api/v1/logout",
            "/api/v1/me",
            "/api/v1/estimates",
            "/api/v1/properties",
            "/api/v1/properties/{id}",
            "/api/v1/investigations",
            "/api/v1/investigations/{id}/status",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn document_registers_core_schemas() {
        let names = schema_names();
        for fragment in ["Error", "Identity", "PropertyListing", "Investigation"] {
            assert!(
                names.iter().any(|name| name.contains(fragment)),
                "missing schema {fragment}"
            );
        }
    }
}
