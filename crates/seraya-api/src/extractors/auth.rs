//! Admin authentication extractor
//!
//! Extracts and validates the admin JWT from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use seraya_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// The authenticated admin
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let claims = AuthService::new(app_state.service_context())
            .verify_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected admin token");
                ApiError::from(e)
            })?;

        Ok(Self {
            username: claims.sub,
        })
    }
}
