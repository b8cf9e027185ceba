//! Domain primitives and aggregates.
//!
//! Purpose: define strongly typed domain entities used by the inbound HTTP
//! adapters and the in-memory stores. Keep types immutable and document
//! invariants and serialisation contracts (serde) in each type's Rustdoc.

pub mod auth;
pub mod error;
pub mod estimate;
pub mod investigation;
pub mod ports;
pub mod property;
pub mod user;

pub use self::auth::{AuthValidationError, LoginCredentials, SignupDetails};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::estimate::{
    Condition, EstimateResult, MarketTrend, PropertyDescription, PropertyType, Tier, estimate,
};
pub use self::investigation::{
    Investigation, InvestigationStatus, InvestigationTransitionError, Score,
};
pub use self::property::{ListingStatus, PropertyListing};
pub use self::user::{
    DisplayName, EmailAddress, Identity, IdentityValidationError, Role, UserId,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use openhome_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
