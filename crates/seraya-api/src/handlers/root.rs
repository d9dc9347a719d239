use axum::{extract::State, Json};
use seraya_service::ServiceInfoResponse;

use crate::state::AppState;

/// GET /
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse::running(&state.config().app.name))
}
