//! Investigation workflow endpoints.
//!
//! ```text
//! GET  /api/v1/investigations
//! POST /api/v1/investigations/{id}/status {"status":"in-progress"}
//! ```
//!
//! Only investigators and admins are admitted. Illegal status moves come
//! back as `409 Conflict` so clients can distinguish workflow races from
//! bad payloads.

use actix_web::{get, post, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::domain::ports::InvestigationStoreError;
use crate::domain::{Error, Investigation, InvestigationStatus, Role};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Roles admitted to the investigation workflow.
const WORKFLOW_ROLES: &[Role] = &[Role::Investigator, Role::Admin];

/// Request body for `POST /api/v1/investigations/{id}/status`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRequest {
    /// Target workflow status.
    pub status: InvestigationStatus,
}

fn map_store_error(err: InvestigationStoreError) -> Error {
    match err {
        InvestigationStoreError::NotFound { id } => {
            Error::not_found(format!("investigation {id} not found"))
        }
        InvestigationStoreError::IllegalTransition(inner) => Error::conflict(inner.to_string()),
    }
}

/// List all investigation requests in stable order.
#[utoipa::path(
    get,
    path = "/api/v1/investigations",
    responses(
        (status = 200, description = "Investigations", body = [Investigation]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["investigations"],
    operation_id = "listInvestigations"
)]
#[get("/investigations")]
pub async fn list_investigations(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Investigation>>> {
    session.require_role(WORKFLOW_ROLES)?;
    let investigations = state
        .investigations
        .list()
        .await
        .map_err(map_store_error)?;
    Ok(web::Json(investigations))
}

/// Move an investigation to a new workflow status.
#[utoipa::path(
    post,
    path = "/api/v1/investigations/{id}/status",
    params(("id" = String, Path, description = "Investigation identifier")),
    request_body = StatusChangeRequest,
    responses(
        (status = 200, description = "Updated investigation", body = Investigation),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 409, description = "Illegal status move", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["investigations"],
    operation_id = "changeInvestigationStatus"
)]
#[post("/investigations/{id}/status")]
pub async fn change_status(
    session: SessionContext,
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
    payload: web::Json<StatusChangeRequest>,
) -> ApiResult<web::Json<Investigation>> {
    let identity = session.require_role(WORKFLOW_ROLES)?;
    let id = id.into_inner();
    let target = payload.status;
    let updated = state
        .investigations
        .transition(id, target, Utc::now())
        .await
        .map_err(map_store_error)?;
    info!(
        user_id = %identity.id,
        investigation_id = %id,
        status = %updated.status,
        "investigation status changed"
    );
    Ok(web::Json(updated))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use demo_data::{InvestigationSeed, InvestigationStatusSeed};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::inbound::http::auth::{LoginRequest, login};
    use crate::inbound::http::test_utils;
    use crate::outbound::{DemoAuthService, InMemoryCatalogue, InMemoryInvestigations};

    const PENDING_ID: Uuid = Uuid::from_u128(0xA1);
    const IN_PROGRESS_ID: Uuid = Uuid::from_u128(0xA2);

    fn seed(id: Uuid, status: InvestigationStatusSeed) -> InvestigationSeed {
        InvestigationSeed {
            id,
            property_id: Uuid::from_u128(0x1002),
            investigator_id: demo_data::INVESTIGATOR_ACCOUNT_ID,
            status,
            findings: Vec::new(),
            score: 0,
        }
    }

    fn fixture_state() -> web::Data<HttpState> {
        let listings = demo_data::curated_listings();
        let investigations = vec![
            seed(PENDING_ID, InvestigationStatusSeed::Pending),
            seed(IN_PROGRESS_ID, InvestigationStatusSeed::InProgress),
        ];
        web::Data::new(HttpState::new(
            Arc::new(DemoAuthService::with_demo_directory()),
            Arc::new(InMemoryCatalogue::from_seeds(&listings)),
            Arc::new(InMemoryInvestigations::from_seeds(
                &investigations,
                Utc::now(),
            )),
        ))
    }

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(fixture_state())
            .wrap(test_utils::test_session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(login)
                    .service(list_investigations)
                    .service(change_status),
            )
    }

    async fn login_cookie(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        email: &str,
        role: &str,
    ) -> actix_web::cookie::Cookie<'static> {
        let res = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(&LoginRequest {
                    email: email.into(),
                    password: "demo123".into(),
                    role: role.into(),
                })
                .to_request(),
        )
        .await;
        assert!(res.status().is_success());
        res.response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    #[rstest]
    #[case("buyer@demo.com", "buyer", StatusCode::FORBIDDEN)]
    #[case("investigator@demo.com", "investigator", StatusCode::OK)]
    #[case("admin@demo.com", "admin", StatusCode::OK)]
    #[actix_web::test]
    async fn listing_is_gated_by_role(
        #[case] email: &str,
        #[case] role: &str,
        #[case] expected: StatusCode,
    ) {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app, email, role).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/investigations")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), expected);
    }

    #[actix_web::test]
    async fn anonymous_listing_is_unauthorised() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/investigations")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn listing_returns_seeded_records_in_order() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app, "investigator@demo.com", "investigator").await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/investigations")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("investigations");
        let statuses: Vec<&str> = value
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|inv| inv.get("status").and_then(Value::as_str))
            .collect();
        assert_eq!(statuses, ["pending", "in-progress"]);
    }

    #[actix_web::test]
    async fn pending_requests_walk_to_completed() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app, "investigator@demo.com", "investigator").await;
        let id = PENDING_ID;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/v1/investigations/{id}/status"))
                .cookie(cookie.clone())
                .set_json(json!({ "status": "in-progress" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("investigation");
        assert_eq!(
            value.get("status").and_then(Value::as_str),
            Some("in-progress")
        );
        assert!(value.get("completionDate").is_none());

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/v1/investigations/{id}/status"))
                .cookie(cookie)
                .set_json(json!({ "status": "completed" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("investigation");
        assert_eq!(
            value.get("status").and_then(Value::as_str),
            Some("completed")
        );
        assert!(value.get("completionDate").and_then(Value::as_str).is_some());
    }

    #[actix_web::test]
    async fn skipping_a_step_is_a_conflict() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app, "investigator@demo.com", "investigator").await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/v1/investigations/{PENDING_ID}/status"))
                .cookie(cookie)
                .set_json(json!({ "status": "completed" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CONFLICT);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("error payload");
        assert_eq!(value.get("code").and_then(Value::as_str), Some("conflict"));
    }

    #[actix_web::test]
    async fn unknown_investigation_is_not_found() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app, "admin@demo.com", "admin").await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/investigations/00000000-0000-0000-0000-00000000dead/status")
                .cookie(cookie)
                .set_json(json!({ "status": "in-progress" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
