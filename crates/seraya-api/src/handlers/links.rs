//! Claim link handlers
//!
//! Link status and submissions. A submission answers with the outcome's
//! own status code rather than going through [`ApiError`](crate::response::ApiError).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use seraya_core::RedemptionOutcome;
use seraya_service::{
    LinkStatusResponse, RedemptionService, SubmissionResponse, SubmitRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/check-link/:link_id
pub async fn check_link(
    State(state): State<AppState>,
    Path(link_id): Path<String>,
) -> ApiResult<Json<LinkStatusResponse>> {
    let status = RedemptionService::new(state.service_context())
        .check_link(&link_id)
        .await?;
    Ok(Json(status))
}

/// POST /api/submit/:link_id
pub async fn submit(
    State(state): State<AppState>,
    Path(link_id): Path<String>,
    ValidatedJson(request): ValidatedJson<SubmitRequest>,
) -> ApiResult<(StatusCode, Json<SubmissionResponse>)> {
    let ctx = state.service_context();
    let outcome = RedemptionService::new(ctx).submit(&link_id, request).await?;

    let body = SubmissionResponse::from_outcome(&outcome, ctx.display_zone());
    Ok((outcome_status(&outcome), Json(body)))
}

fn outcome_status(outcome: &RedemptionOutcome) -> StatusCode {
    match outcome {
        RedemptionOutcome::Won { .. } => StatusCode::OK,
        RedemptionOutcome::NotFound => StatusCode::NOT_FOUND,
        RedemptionOutcome::NotStarted { .. }
        | RedemptionOutcome::Expired { .. }
        | RedemptionOutcome::AlreadyClaimed { .. } => StatusCode::BAD_REQUEST,
    }
}
