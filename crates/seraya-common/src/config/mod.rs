//! Configuration structs

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, DisplayConfig,
    Environment, GiveawayConfig, JwtConfig, RateLimitConfig, ServerConfig, WebhookConfig,
};
