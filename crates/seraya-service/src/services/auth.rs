//! Admin authentication service
//!
//! There is exactly one admin account, configured at startup.

use seraya_common::auth::{AdminToken, Claims, PasswordService};
use seraya_common::AppError;
use tracing::{info, instrument, warn};

use crate::dto::AdminLoginRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Exchange admin credentials for a bearer token
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: AdminLoginRequest) -> ServiceResult<AdminToken> {
        let admin = self.ctx.admin();

        // The hash check runs for every username
        let password_ok = match PasswordService::new()
            .verify_or_error(&request.password, &admin.password_hash)
        {
            Ok(()) => true,
            Err(AppError::InvalidCredentials) => false,
            Err(e) => return Err(e.into()),
        };

        if request.username != admin.username || !password_ok {
            warn!("Admin login failed");
            return Err(AppError::InvalidCredentials.into());
        }

        let token = self.ctx.jwt_service().issue(&admin.username)?;
        info!("Admin logged in");

        Ok(token)
    }

    /// Validate a bearer token issued by [`Self::login`]
    pub fn verify_token(&self, token: &str) -> ServiceResult<Claims> {
        let claims = self.ctx.jwt_service().decode_token(token)?;

        if claims.sub != self.ctx.admin().username {
            return Err(AppError::InvalidToken.into());
        }

        Ok(claims)
    }
}
