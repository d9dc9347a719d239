//! Route definitions
//!
//! Every route shares the general per-IP quota. Login and submission carry
//! a stricter quota of their own on top.

use axum::{
    routing::{get, post},
    Router,
};
use seraya_common::{AppError, RateLimitConfig};

use crate::handlers::{admin, health, links, public, root};
use crate::middleware::{rate_limit, Quota};
use crate::state::AppState;

/// Create the main router with all routes and rate limits
pub fn create_router(limits: &RateLimitConfig) -> Result<Router<AppState>, AppError> {
    let login = rate_limit(
        Router::new().route("/api/admin/login", post(admin::login)),
        Quota::per_15_minutes(limits.login_per_15_minutes),
    )?;
    let submit = rate_limit(
        Router::new().route("/api/submit/:link_id", post(links::submit)),
        Quota::per_hour(limits.submit_per_hour),
    )?;

    let router = Router::new()
        .route("/", get(root::service_info))
        .merge(health_routes())
        .merge(admin_routes())
        .merge(public_routes())
        .merge(link_routes())
        .merge(login)
        .merge(submit);

    rate_limit(router, Quota::per_minute(limits.general_per_minute))
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Routes behind the admin token
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/add-event", post(admin::add_event))
        .route("/api/generate-link", post(admin::generate_link))
        .route("/api/winners", get(admin::list_winners))
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/public/winners", get(public::list_winners))
        .route("/api/public/next-event", get(public::next_event))
        .route("/api/public/stats", get(public::stats))
}

fn link_routes() -> Router<AppState> {
    Router::new().route("/api/check-link/:link_id", get(links::check_link))
}
