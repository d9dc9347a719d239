//! # seraya-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Idempotent schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use seraya_db::{create_pool, ensure_schema, DatabaseConfig, PgLinkRepository};
//! use seraya_common::AppConfig;
//! use seraya_core::traits::LinkRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
//!     ensure_schema(&pool).await?;
//!     let links = PgLinkRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{check_connection, create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgEventRepository, PgLinkRepository};
pub use schema::ensure_schema;
