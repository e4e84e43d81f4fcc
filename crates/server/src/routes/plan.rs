use crate::config::validation_config;
use crate::dtos::plan::{PlanRequest, PlanValidationResponse};
use axum::{Json, http::StatusCode};
use database::{db::create_connection, services::catalog::CatalogService};
use log::warn;
use models::plan::Plan;
use models::validate;

/// Validate a student's multi-year plan against the course catalog.
///
/// An internally inconsistent plan is still a successful validation: the
/// findings come back in the response body. Only malformed input (400) or
/// an unreachable catalog store (500) fail the call.
#[utoipa::path(
    post,
    path = "/validate-plan",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Validation completed", body = PlanValidationResponse),
        (status = 400, description = "Malformed plan input"),
        (status = 500, description = "Catalog store unavailable")
    ),
    tag = "Planning"
)]
pub async fn validate_plan(
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanValidationResponse>, (StatusCode, String)> {
    let db = create_connection().await.map_err(|e| {
        warn!("Catalog store unavailable: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "catalog store unavailable".to_string(),
        )
    })?;

    let catalog = CatalogService::load_snapshot(&db).await.map_err(|e| {
        warn!("Failed to load catalog snapshot: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "catalog store unavailable".to_string(),
        )
    })?;

    let plan = Plan::from(request);
    let config = validation_config();

    let report = validate::validate_plan(&plan, &catalog, &config)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    Ok(Json(PlanValidationResponse::from(report)))
}
