//! Admin handlers
//!
//! Login plus the endpoints that require an admin token.

use axum::{extract::State, Json};
use seraya_common::AdminToken;
use seraya_service::{
    AddEventRequest, AdminLoginRequest, AuthService, EventCreatedResponse, EventService,
    GeneratedLinkResponse, WinnerResponse, WinnerService,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AdminLoginRequest>,
) -> ApiResult<Json<AdminToken>> {
    let token = AuthService::new(state.service_context()).login(request).await?;
    Ok(Json(token))
}

/// POST /api/admin/add-event
pub async fn add_event(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(request): ValidatedJson<AddEventRequest>,
) -> ApiResult<Json<EventCreatedResponse>> {
    tracing::debug!(admin = %admin.username, "Adding event");
    let response = EventService::new(state.service_context())
        .add_event(request)
        .await?;
    Ok(Json(response))
}

/// POST /api/generate-link
pub async fn generate_link(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<GeneratedLinkResponse>> {
    let response = EventService::new(state.service_context())
        .generate_link()
        .await?;
    Ok(Json(response))
}

/// GET /api/winners
pub async fn list_winners(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<WinnerResponse>>> {
    let winners = WinnerService::new(state.service_context()).list_all().await?;
    Ok(Json(winners))
}
