//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: persisting, reading, and clearing the active
//! [`Identity`], and admitting requests by role. The identity lives in the
//! session cookie under a single fixed key; its absence means anonymous.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, Identity, Role};

/// Fixed session key the serialised identity is stored under.
pub(crate) const IDENTITY_KEY: &str = "openhome_user";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated identity in the session cookie.
    ///
    /// Replaces any previous identity wholesale; there is no partial
    /// update path.
    pub fn persist_identity(&self, identity: &Identity) -> Result<(), Error> {
        self.0
            .insert(IDENTITY_KEY, identity)
            .map_err(|err| Error::internal(format!("failed to persist session: {err}")))
    }

    /// Fetch the current identity from the session, if present.
    ///
    /// A stored value that no longer deserialises is logged and treated as
    /// anonymous rather than surfaced as an error.
    pub fn identity(&self) -> Option<Identity> {
        match self.0.get::<Identity>(IDENTITY_KEY) {
            Ok(identity) => identity,
            Err(err) => {
                tracing::warn!(error = %err, "invalid identity in session cookie");
                None
            }
        }
    }

    /// Remove the persisted identity. A no-op for anonymous sessions.
    pub fn clear(&self) {
        self.0.remove(IDENTITY_KEY);
    }

    /// Require an authenticated identity or return `401 Unauthorized`.
    pub fn require_identity(&self) -> Result<Identity, Error> {
        self.identity()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Admit the request only when the identity's role is in `allowed`.
    ///
    /// Anonymous callers get `401 Unauthorized`; authenticated callers
    /// outside the set get `403 Forbidden`.
    pub fn require_role(&self, allowed: &[Role]) -> Result<Identity, Error> {
        let identity = self.require_identity()?;
        if allowed.contains(&identity.role) {
            Ok(identity)
        } else {
            Err(Error::forbidden(format!(
                "role {} is not permitted here",
                identity.role
            )))
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    use super::*;
    use crate::domain::{DisplayName, EmailAddress, UserId};

    fn identity(role: Role) -> Identity {
        Identity::new(
            UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("fixture id"),
            EmailAddress::new("buyer@demo.com").expect("fixture email"),
            role,
            DisplayName::new("John Doe").expect("fixture name"),
        )
    }

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().wrap(crate::inbound::http::test_utils::test_session_middleware())
    }

    #[actix_web::test]
    async fn round_trips_the_identity() {
        let app = test::init_service(
            session_test_app()
                .route(
                    "/set",
                    web::get().to(|session: SessionContext| async move {
                        session.persist_identity(&identity(Role::Buyer))?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/get",
                    web::get().to(|session: SessionContext| async move {
                        let identity = session.require_identity()?;
                        Ok::<_, Error>(HttpResponse::Ok().body(identity.email.to_string()))
                    }),
                ),
        )
        .await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        assert_eq!(set_res.status(), StatusCode::OK);
        let cookie = set_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned();

        let get_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/get")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(get_res.status(), StatusCode::OK);
        let body = test::read_body(get_res).await;
        assert_eq!(body, "buyer@demo.com");
    }

    #[actix_web::test]
    async fn anonymous_requests_are_unauthorised() {
        let app = test::init_service(session_test_app().route(
            "/guarded",
            web::get().to(|session: SessionContext| async move {
                session.require_identity()?;
                Ok::<_, Error>(HttpResponse::Ok())
            }),
        ))
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/guarded").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn role_admission_denies_members_outside_the_set() {
        let app = test::init_service(
            session_test_app()
                .route(
                    "/set",
                    web::get().to(|session: SessionContext| async move {
                        session.persist_identity(&identity(Role::Investigator))?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/buyers-only",
                    web::get().to(|session: SessionContext| async move {
                        session.require_role(&[Role::Buyer])?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                ),
        )
        .await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        let cookie = set_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned();

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/buyers-only")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn clear_removes_the_identity() {
        let app = test::init_service(
            session_test_app()
                .route(
                    "/set",
                    web::get().to(|session: SessionContext| async move {
                        session.persist_identity(&identity(Role::Buyer))?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route(
                    "/clear",
                    web::get().to(|session: SessionContext| async move {
                        session.clear();
                        HttpResponse::Ok()
                    }),
                )
                .route(
                    "/get",
                    web::get().to(|session: SessionContext| async move {
                        session.require_identity()?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                ),
        )
        .await;

        let set_res =
            test::call_service(&app, test::TestRequest::get().uri("/set").to_request()).await;
        let cookie = set_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned();

        let clear_res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/clear")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let cleared_cookie = clear_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(actix_web::cookie::Cookie::into_owned);

        let mut request = test::TestRequest::get().uri("/get");
        if let Some(cleared) = cleared_cookie {
            request = request.cookie(cleared);
        }
        let res = test::call_service(&app, request.to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
