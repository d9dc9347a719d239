//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub admin: AdminConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub webhook: WebhookConfig,
    pub giveaway: GiveawayConfig,
    pub display: DisplayConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// JWT configuration for admin tokens
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,
}

/// The single admin account
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,
    /// Argon2 PHC string
    pub password_hash: String,
}

/// Per-IP request quotas
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_general_per_minute")]
    pub general_per_minute: u32,
    #[serde(default = "default_login_per_15_minutes")]
    pub login_per_15_minutes: u32,
    #[serde(default = "default_submit_per_hour")]
    pub submit_per_hour: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            general_per_minute: default_general_per_minute(),
            login_per_15_minutes: default_login_per_15_minutes(),
            submit_per_hour: default_submit_per_hour(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Winner webhook configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Notifications are disabled when unset
    #[serde(default)]
    pub discord_url: Option<String>,
    #[serde(default = "default_webhook_timeout")]
    pub timeout_secs: u64,
}

/// Giveaway settings
#[derive(Debug, Clone, Deserialize)]
pub struct GiveawayConfig {
    /// Falls back to the built-in catalog when unset
    #[serde(default)]
    pub reward_roles: Option<Vec<String>>,
    #[serde(default)]
    pub seed_demo_event: bool,
}

/// Fixed offset used when rendering instants for people
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
    #[serde(default = "default_zone_label")]
    pub zone_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
            zone_label: default_zone_label(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "seraya".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_token_expiry() -> i64 {
    3600 // 1 hour
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_general_per_minute() -> u32 {
    30
}

fn default_login_per_15_minutes() -> u32 {
    5
}

fn default_submit_per_hour() -> u32 {
    10
}

fn default_webhook_timeout() -> u64 {
    10
}

fn default_utc_offset_hours() -> i32 {
    7
}

fn default_zone_label() -> String {
    "WIB".to_string()
}

/// Split a comma-separated variable, dropping blank entries
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Reads variables through a lookup function so tests need not touch the
/// process environment.
struct EnvSource<F> {
    lookup: F,
}

impl<F> EnvSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key).filter(|v| !v.trim().is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::MissingVar(key))
    }

    fn string_or(&self, key: &str, default: impl FnOnce() -> String) -> String {
        self.get(key).unwrap_or_else(default)
    }

    fn parse_or<T>(&self, key: &'static str, default: impl FnOnce() -> T) -> Result<T, ConfigError>
    where
        T: FromStr,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw)),
            None => Ok(default()),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or
    /// a variable cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let src = EnvSource { lookup };

        let env = match src.get("APP_ENV") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("APP_ENV", raw))?,
            None => Environment::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: src.string_or("APP_NAME", default_app_name),
                env,
            },
            api: ServerConfig {
                host: src.string_or("API_HOST", default_host),
                port: src.parse_or("PORT", default_port)?,
            },
            database: DatabaseConfig {
                url: src.required("DATABASE_URL")?,
                max_connections: src
                    .parse_or("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: src
                    .parse_or("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
            },
            jwt: JwtConfig {
                secret: src.required("JWT_SECRET")?,
                token_expiry: src.parse_or("JWT_EXPIRY", default_token_expiry)?,
            },
            admin: AdminConfig {
                username: src.string_or("ADMIN_USERNAME", default_admin_username),
                password_hash: src.required("ADMIN_PASSWORD_HASH")?,
            },
            rate_limit: RateLimitConfig {
                general_per_minute: src
                    .parse_or("RATE_LIMIT_GENERAL_PER_MINUTE", default_general_per_minute)?,
                login_per_15_minutes: src
                    .parse_or("RATE_LIMIT_LOGIN_PER_15_MINUTES", default_login_per_15_minutes)?,
                submit_per_hour: src
                    .parse_or("RATE_LIMIT_SUBMIT_PER_HOUR", default_submit_per_hour)?,
            },
            cors: CorsConfig {
                allowed_origins: src
                    .get("CORS_ALLOWED_ORIGINS")
                    .map(|s| split_list(&s))
                    .unwrap_or_default(),
            },
            webhook: WebhookConfig {
                discord_url: src.get("DISCORD_WEBHOOK_URL"),
                timeout_secs: src.parse_or("WEBHOOK_TIMEOUT_SECS", default_webhook_timeout)?,
            },
            giveaway: GiveawayConfig {
                reward_roles: src.get("REWARD_ROLES").map(|s| split_list(&s)),
                seed_demo_event: src.parse_or("SEED_DEMO_EVENT", || false)?,
            },
            display: DisplayConfig {
                utc_offset_hours: src
                    .parse_or("DISPLAY_UTC_OFFSET_HOURS", default_utc_offset_hours)?,
                zone_label: src.string_or("DISPLAY_ZONE_LABEL", default_zone_label),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
