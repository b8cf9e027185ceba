//! Authentication endpoints: login, signup, logout, and the session probe.
//!
//! ```text
//! POST /api/v1/login  {"email":"buyer@demo.com","password":"demo123","role":"buyer"}
//! POST /api/v1/signup {"email":"new@demo.com","password":"pw","role":"buyer","name":"New User"}
//! POST /api/v1/logout
//! GET  /api/v1/me
//! ```
//!
//! Login and signup replace any identity already in the session wholesale;
//! logout is idempotent and always succeeds.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::{
    AuthValidationError, Error, Identity, LoginCredentials, Role, SignupDetails,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email used for the directory lookup.
    pub email: String,
    /// Shared demo secret.
    pub password: String,
    /// Role the caller wants the session to carry.
    pub role: String,
}

/// Signup request body for `POST /api/v1/signup`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Email for the new account.
    pub email: String,
    /// Chosen password; never stored in the demo environment.
    pub password: String,
    /// Role for the new account.
    pub role: String,
    /// Display name for the new account.
    pub name: String,
}

fn parse_role(raw: &str) -> Result<Role, Error> {
    Role::parse(raw).ok_or_else(|| {
        Error::invalid_request(format!("unknown role: {raw}"))
            .with_details(json!({ "field": "role", "code": "unknown_role" }))
    })
}

fn map_auth_validation_error(err: AuthValidationError) -> Error {
    match err {
        AuthValidationError::Email(inner) => Error::invalid_request(inner.to_string())
            .with_details(json!({ "field": "email", "code": "invalid_email" })),
        AuthValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
        AuthValidationError::Name(inner) => Error::invalid_request(inner.to_string())
            .with_details(json!({ "field": "name", "code": "invalid_name" })),
    }
}

/// Authenticate the caller and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = Identity,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<Identity>> {
    let payload = payload.into_inner();
    let role = parse_role(&payload.role)?;
    let credentials = LoginCredentials::try_from_parts(&payload.email, &payload.password, role)
        .map_err(map_auth_validation_error)?;
    let identity = state.auth.login(&credentials).await?;
    session.persist_identity(&identity)?;
    info!(user_id = %identity.id, role = %identity.role, "session established");
    Ok(web::Json(identity))
}

/// Create a demo account and establish a session for it.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Signup success", body = Identity,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<web::Json<Identity>> {
    let payload = payload.into_inner();
    let role = parse_role(&payload.role)?;
    let details =
        SignupDetails::try_from_parts(&payload.email, &payload.password, role, &payload.name)
            .map_err(map_auth_validation_error)?;
    let identity = state.auth.signup(&details).await?;
    session.persist_identity(&identity)?;
    info!(user_id = %identity.id, role = %identity.role, "account fabricated");
    Ok(web::Json(identity))
}

/// Destroy the session. Safe to call anonymously.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 204, description = "Session destroyed"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

/// Return the identity attached to the current session.
#[utoipa::path(
    get,
    path = "/api/v1/me",
    responses(
        (status = 200, description = "Current identity", body = Identity),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "currentIdentity"
)]
#[get("/me")]
pub async fn me(session: SessionContext) -> ApiResult<web::Json<Identity>> {
    Ok(web::Json(session.require_identity()?))
}
