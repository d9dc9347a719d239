//! Public read-only handlers

use axum::{extract::State, Json};
use seraya_service::{
    EventService, NextEventResponse, PublicWinnerResponse, StatsResponse, StatsService,
    WinnerService,
};

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/public/winners
pub async fn list_winners(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PublicWinnerResponse>>> {
    let winners = WinnerService::new(state.service_context())
        .list_public()
        .await?;
    Ok(Json(winners))
}

/// GET /api/public/next-event
pub async fn next_event(State(state): State<AppState>) -> ApiResult<Json<NextEventResponse>> {
    let response = EventService::new(state.service_context()).next_event().await?;
    Ok(Json(response))
}

/// GET /api/public/stats
pub async fn stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let stats = StatsService::new(state.service_context()).stats().await?;
    Ok(Json(stats))
}
