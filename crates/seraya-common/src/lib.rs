//! # seraya-common
//!
//! Shared utilities: configuration, error handling, admin authentication,
//! telemetry and the display time zone.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod time;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, AdminToken, Claims, JwtService, PasswordService};
pub use config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, DisplayConfig,
    Environment, GiveawayConfig, JwtConfig, RateLimitConfig, ServerConfig, WebhookConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
pub use time::DisplayZone;
