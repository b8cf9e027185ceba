//! Estimate endpoint: validate the description, run the calculator, return
//! the result. Nothing is persisted.
//!
//! ```text
//! POST /api/v1/estimates {"tier":"basic","property":{...}}
//! ```

use actix_web::{post, web};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::estimate::{EstimateResult, PropertyDescription, Tier, estimate};
use crate::domain::{Error, Identity};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::validation::{FieldName, require_in_range, require_non_negative};

/// Accepted construction years. The lower bound predates any listing the
/// marketplace carries; the upper bound allows new builds sold off-plan.
const YEAR_BUILT_RANGE: std::ops::RangeInclusive<i32> = 1800..=2100;

/// Request body for `POST /api/v1/estimates`.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    /// Service tier the estimate is computed under.
    pub tier: Tier,
    /// Property being valued.
    pub property: PropertyDescription,
}

fn validate(request: &EstimateRequest) -> Result<(), Error> {
    let property = &request.property;
    require_non_negative(FieldName::new("squareFootage"), property.square_footage)?;
    require_non_negative(FieldName::new("bathrooms"), property.bathrooms)?;
    require_non_negative(FieldName::new("lotSize"), property.lot_size)?;
    require_in_range(FieldName::new("yearBuilt"), property.year_built, YEAR_BUILT_RANGE)?;
    Ok(())
}

/// Compute a property estimate for the authenticated caller.
#[utoipa::path(
    post,
    path = "/api/v1/estimates",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Computed estimate", body = EstimateResult),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["estimates"],
    operation_id = "computeEstimate"
)]
#[post("/estimates")]
pub async fn compute_estimate(
    session: SessionContext,
    payload: web::Json<EstimateRequest>,
) -> ApiResult<web::Json<EstimateResult>> {
    let identity: Identity = session.require_identity()?;
    let request = payload.into_inner();
    validate(&request)?;
    let result = estimate(&request.property, request.tier, Utc::now().year());
    debug!(
        user_id = %identity.id,
        tier = ?request.tier,
        value = result.value,
        "estimate computed"
    );
    Ok(web::Json(result))
}
