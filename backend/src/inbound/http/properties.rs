//! Property catalogue endpoints.
//!
//! ```text
//! GET /api/v1/properties
//! GET /api/v1/properties/{id}
//! ```
//!
//! The catalogue is read-only over HTTP and visible to any authenticated
//! role.

use actix_web::{get, web};
use uuid::Uuid;

use crate::domain::ports::CatalogueError;
use crate::domain::{Error, PropertyListing};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

fn map_catalogue_error(err: CatalogueError) -> Error {
    match err {
        CatalogueError::NotFound { id } => Error::not_found(format!("listing {id} not found")),
    }
}

/// List all catalogue listings in stable order.
#[utoipa::path(
    get,
    path = "/api/v1/properties",
    responses(
        (status = 200, description = "Listings", body = [PropertyListing]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["properties"],
    operation_id = "listProperties"
)]
#[get("/properties")]
pub async fn list_properties(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PropertyListing>>> {
    session.require_identity()?;
    let listings = state
        .properties
        .list()
        .await
        .map_err(map_catalogue_error)?;
    Ok(web::Json(listings))
}

/// Fetch one listing by id.
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}",
    params(("id" = String, Path, description = "Listing identifier")),
    responses(
        (status = 200, description = "Listing", body = PropertyListing),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["properties"],
    operation_id = "getProperty"
)]
#[get("/properties/{id}")]
pub async fn get_property(
    session: SessionContext,
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<PropertyListing>> {
    session.require_identity()?;
    let listing = state
        .properties
        .get(id.into_inner())
        .await
        .map_err(map_catalogue_error)?;
    Ok(web::Json(listing))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::Value;

    use super::*;
    use crate::inbound::http::auth::{LoginRequest, login};
    use crate::inbound::http::test_utils;

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
            .app_data(test_utils::test_state())
            .wrap(test_utils::test_session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(login)
                    .service(list_properties)
                    .service(get_property),
            )
    }

    async fn login_cookie(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) -> actix_web::cookie::Cookie<'static> {
        let res = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/v1/login")
                .set_json(&LoginRequest {
                    email: "buyer@demo.com".into(),
                    password: "demo123".into(),
                    role: "buyer".into(),
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

    #[actix_web::test]
    async fn listing_requires_a_session() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/properties")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn list_then_fetch_by_id() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;

        let list_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/properties")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert_eq!(list_res.status(), StatusCode::OK);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(list_res).await).expect("listings");
        let listings = value.as_array().expect("array");
        // Three curated listings plus the generated batch.
        assert!(listings.len() >= 3);
        let first_id = listings[0]
            .get("id")
            .and_then(Value::as_str)
            .expect("listing id")
            .to_owned();

        let get_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/v1/properties/{first_id}"))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        let listing: Value =
            serde_json::from_slice(&actix_test::read_body(get_res).await).expect("listing");
        assert_eq!(
            listing.get("id").and_then(Value::as_str),
            Some(first_id.as_str())
        );
        assert!(listing.get("propertyType").is_some());
    }

    #[actix_web::test]
    async fn missing_listing_is_not_found() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = login_cookie(&app).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/properties/00000000-0000-0000-0000-00000000dead")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("error payload");
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("not_found")
        );
    }
}
