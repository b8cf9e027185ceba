//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, SessionKeyError, key_fingerprint, load_session_key, parse_same_site};

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::auth::{login, logout, me, signup};
use crate::inbound::http::estimates::compute_estimate;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::investigations::{change_status, list_investigations};
use crate::inbound::http::properties::{get_property, list_properties};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

/// Everything one worker needs to assemble the application.
#[derive(Clone)]
pub struct AppDependencies {
    /// Shared probe state.
    pub health_state: web::Data<HealthState>,
    /// Handler state over the domain ports.
    pub http_state: web::Data<HttpState>,
    /// Session cookie signing key.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// `SameSite` policy for session cookies.
    pub same_site: SameSite,
}

/// Assemble the application: trace middleware, cookie sessions, the
/// `/api/v1` surface, health probes, and (debug builds only) Swagger UI.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(login)
        .service(signup)
        .service(logout)
        .service(me)
        .service(compute_estimate)
        .service(list_properties)
        .service(get_property)
        .service(list_investigations)
        .service(change_status);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from the given configuration.
///
/// Seeds the demo dataset once, shares it across workers, and marks the
/// service ready after the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        seed,
        generated_listings,
    } = config;

    info!(
        %bind_addr,
        key_fingerprint = %key_fingerprint(&key),
        seed,
        "starting server"
    );

    let http_state = web::Data::new(HttpState::demo(seed, generated_listings));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
