//! Service context - dependency container for services
//!
//! Holds the repositories, the notifier, the clock and the configuration
//! values the services need.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use seraya_common::auth::JwtService;
use seraya_common::{AdminConfig, DisplayZone};
use seraya_core::traits::{Clock, EventRepository, LinkRepository, SystemClock, WinnerNotifier};
use seraya_core::RewardCatalog;
use seraya_db::PgPool;

use crate::notifier::DisabledNotifier;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (absent when running on other repositories)
    pool: Option<PgPool>,

    // Repositories
    event_repo: Arc<dyn EventRepository>,
    link_repo: Arc<dyn LinkRepository>,

    // Collaborators
    notifier: Arc<dyn WinnerNotifier>,
    clock: Arc<dyn Clock>,
    jwt_service: Arc<JwtService>,

    // Settings
    admin: Arc<AdminConfig>,
    reward_catalog: Arc<RewardCatalog>,
    display_zone: Arc<DisplayZone>,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if the context runs on one
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    pub fn link_repo(&self) -> &dyn LinkRepository {
        self.link_repo.as_ref()
    }

    // === Collaborators ===

    /// Shared handle to the notifier, for moving into background tasks
    pub fn notifier(&self) -> Arc<dyn WinnerNotifier> {
        Arc::clone(&self.notifier)
    }

    /// Current instant according to the configured clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    // === Settings ===

    pub fn admin(&self) -> &AdminConfig {
        self.admin.as_ref()
    }

    pub fn reward_catalog(&self) -> &RewardCatalog {
        self.reward_catalog.as_ref()
    }

    pub fn display_zone(&self) -> &DisplayZone {
        self.display_zone.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("reward_catalog", &self.reward_catalog.len())
            .field("display_zone", &self.display_zone.label())
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
///
/// Repositories, the JWT service and the admin account are required. The
/// notifier defaults to disabled, the clock to the system clock, the
/// catalog to the built-in roles and the display zone to WIB.
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    event_repo: Option<Arc<dyn EventRepository>>,
    link_repo: Option<Arc<dyn LinkRepository>>,
    notifier: Option<Arc<dyn WinnerNotifier>>,
    clock: Option<Arc<dyn Clock>>,
    jwt_service: Option<Arc<JwtService>>,
    admin: Option<AdminConfig>,
    reward_catalog: Option<RewardCatalog>,
    display_zone: Option<DisplayZone>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn link_repo(mut self, repo: Arc<dyn LinkRepository>) -> Self {
        self.link_repo = Some(repo);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn WinnerNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn admin(mut self, admin: AdminConfig) -> Self {
        self.admin = Some(admin);
        self
    }

    pub fn reward_catalog(mut self, catalog: RewardCatalog) -> Self {
        self.reward_catalog = Some(catalog);
        self
    }

    pub fn display_zone(mut self, zone: DisplayZone) -> Self {
        self.display_zone = Some(zone);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            event_repo: self
                .event_repo
                .ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            link_repo: self
                .link_repo
                .ok_or_else(|| ServiceError::validation("link_repo is required"))?,
            notifier: self.notifier.unwrap_or_else(|| Arc::new(DisabledNotifier)),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            admin: Arc::new(
                self.admin
                    .ok_or_else(|| ServiceError::validation("admin is required"))?,
            ),
            reward_catalog: Arc::new(self.reward_catalog.unwrap_or_default()),
            display_zone: Arc::new(self.display_zone.unwrap_or_default()),
        })
    }
}
