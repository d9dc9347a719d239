//! In-memory collaborators for service tests
//!
//! `MemoryStore` keeps events and links behind one lock, so its conditional
//! claim is atomic per row just like the SQL version.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::Mutex;
use tokio::sync::mpsc;

use seraya_common::auth::{hash_password, JwtService};
use seraya_common::AdminConfig;
use seraya_core::entities::{ClaimTiming, Event, Link, LinkWithEvent, Winner};
use seraya_core::error::DomainError;
use seraya_core::events::WinnerAnnounced;
use seraya_core::traits::{Clock, EventRepository, LinkRepository, RepoResult, WinnerNotifier};
use seraya_core::LinkId;

use crate::services::{ServiceContext, ServiceContextBuilder};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse battery";

/// Fixed reference instant for tests
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 0).unwrap()
}

// ============================================================================
// Clock
// ============================================================================

#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock() = now;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

// ============================================================================
// Notifiers
// ============================================================================

pub struct RecordingNotifier {
    tx: mpsc::UnboundedSender<WinnerAnnounced>,
}

impl RecordingNotifier {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<WinnerAnnounced>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

#[async_trait]
impl WinnerNotifier for RecordingNotifier {
    async fn notify(&self, notice: &WinnerAnnounced) -> Result<(), DomainError> {
        self.tx
            .send(notice.clone())
            .map_err(|e| DomainError::NotificationError(e.to_string()))
    }
}

pub struct FailingNotifier;

#[async_trait]
impl WinnerNotifier for FailingNotifier {
    async fn notify(&self, _notice: &WinnerAnnounced) -> Result<(), DomainError> {
        Err(DomainError::NotificationError("webhook returned 503".to_string()))
    }
}

// ============================================================================
// Repositories
// ============================================================================

#[derive(Default)]
struct State {
    events: Vec<Event>,
    links: Vec<Link>,
}

pub struct MemoryStore {
    state: Mutex<State>,
    clock: Arc<ManualClock>,
}

impl MemoryStore {
    pub fn new(clock: Arc<ManualClock>) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(State::default()),
            clock,
        })
    }

    /// Insert an event with one link and return both
    pub fn insert_event(&self, event_date: DateTime<Utc>, expires_at: DateTime<Utc>) -> (Event, Link) {
        let mut state = self.state.lock();
        let event = Event {
            id: i64::try_from(state.events.len()).unwrap() + 1,
            event_date,
            created_at: self.clock.now(),
        };
        let link = Link::new(event.id, expires_at);
        state.events.push(event.clone());
        state.links.push(link.clone());
        (event, link)
    }

    pub fn link(&self, id: LinkId) -> Option<Link> {
        self.state.lock().links.iter().find(|l| l.id == id).cloned()
    }
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>> {
        Ok(self.state.lock().events.iter().find(|e| e.id == id).cloned())
    }

    async fn find_next_upcoming(&self, now: DateTime<Utc>) -> RepoResult<Option<Event>> {
        Ok(self
            .state
            .lock()
            .events
            .iter()
            .filter(|e| e.is_upcoming(now))
            .min_by_key(|e| e.event_date)
            .cloned())
    }

    async fn create_with_link(
        &self,
        event_date: DateTime<Utc>,
        link_expires_at: DateTime<Utc>,
    ) -> RepoResult<(Event, Link)> {
        Ok(self.insert_event(event_date, link_expires_at))
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(i64::try_from(self.state.lock().events.len()).unwrap())
    }
}

#[async_trait]
impl LinkRepository for MemoryStore {
    async fn find_by_id(&self, id: LinkId) -> RepoResult<Option<Link>> {
        Ok(self.link(id))
    }

    async fn find_with_event(&self, id: LinkId) -> RepoResult<Option<LinkWithEvent>> {
        let state = self.state.lock();
        let Some(link) = state.links.iter().find(|l| l.id == id) else {
            return Ok(None);
        };
        Ok(state
            .events
            .iter()
            .find(|e| e.id == link.event_id)
            .map(|e| LinkWithEvent {
                link: link.clone(),
                event_date: e.event_date,
            }))
    }

    async fn create(&self, link: &Link) -> RepoResult<()> {
        let mut state = self.state.lock();
        if !state.events.iter().any(|e| e.id == link.event_id) {
            return Err(DomainError::EventNotFound(link.event_id));
        }
        state.links.push(link.clone());
        Ok(())
    }

    async fn find_first_for_event(&self, event_id: i64) -> RepoResult<Option<Link>> {
        Ok(self
            .state
            .lock()
            .links
            .iter()
            .find(|l| l.event_id == event_id)
            .cloned())
    }

    async fn record_attempt(&self, id: LinkId) -> RepoResult<Option<Link>> {
        let mut state = self.state.lock();
        Ok(state.links.iter_mut().find(|l| l.id == id).map(|link| {
            link.attempt_count += 1;
            link.clone()
        }))
    }

    async fn claim(&self, id: LinkId, winner: &Winner) -> RepoResult<Option<i32>> {
        let mut state = self.state.lock();
        let Some(link) = state.links.iter_mut().find(|l| l.id == id && !l.is_used()) else {
            return Ok(None);
        };
        link.winner = Some(winner.clone());
        link.claimed_at = Some(self.clock.now());
        link.attempt_count += 1;
        Ok(Some(link.attempt_count))
    }

    async fn find_winners(&self, limit: Option<i64>) -> RepoResult<Vec<Link>> {
        let mut winners: Vec<Link> = self
            .state
            .lock()
            .links
            .iter()
            .filter(|l| l.is_used())
            .cloned()
            .collect();
        winners.sort_by(|a, b| b.claimed_at.cmp(&a.claimed_at));
        if let Some(limit) = limit {
            winners.truncate(usize::try_from(limit).unwrap());
        }
        Ok(winners)
    }

    async fn count_claimed(&self) -> RepoResult<i64> {
        let state = self.state.lock();
        Ok(i64::try_from(state.links.iter().filter(|l| l.is_used()).count()).unwrap())
    }

    async fn claim_timings(&self) -> RepoResult<Vec<ClaimTiming>> {
        let state = self.state.lock();
        Ok(state
            .links
            .iter()
            .filter_map(|link| {
                let claimed_at = link.claimed_at?;
                let event = state.events.iter().find(|e| e.id == link.event_id)?;
                Some(ClaimTiming {
                    claimed_at,
                    event_date: event.event_date,
                })
            })
            .collect())
    }
}

/// Which link writes should fail as if the database dropped the connection
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkFaults {
    pub claim: bool,
    pub record_attempt: bool,
}

/// Delegates to a `MemoryStore`, except for the writes named in `LinkFaults`
pub struct FaultyLinks {
    inner: Arc<MemoryStore>,
    faults: LinkFaults,
}

impl FaultyLinks {
    fn connection_reset() -> DomainError {
        DomainError::DatabaseError("connection reset".to_string())
    }
}

#[async_trait]
impl LinkRepository for FaultyLinks {
    async fn find_by_id(&self, id: LinkId) -> RepoResult<Option<Link>> {
        LinkRepository::find_by_id(self.inner.as_ref(), id).await
    }

    async fn find_with_event(&self, id: LinkId) -> RepoResult<Option<LinkWithEvent>> {
        self.inner.find_with_event(id).await
    }

    async fn create(&self, link: &Link) -> RepoResult<()> {
        self.inner.create(link).await
    }

    async fn find_first_for_event(&self, event_id: i64) -> RepoResult<Option<Link>> {
        self.inner.find_first_for_event(event_id).await
    }

    async fn record_attempt(&self, id: LinkId) -> RepoResult<Option<Link>> {
        if self.faults.record_attempt {
            return Err(Self::connection_reset());
        }
        self.inner.record_attempt(id).await
    }

    async fn claim(&self, id: LinkId, winner: &Winner) -> RepoResult<Option<i32>> {
        if self.faults.claim {
            return Err(Self::connection_reset());
        }
        self.inner.claim(id, winner).await
    }

    async fn find_winners(&self, limit: Option<i64>) -> RepoResult<Vec<Link>> {
        self.inner.find_winners(limit).await
    }

    async fn count_claimed(&self) -> RepoResult<i64> {
        self.inner.count_claimed().await
    }

    async fn claim_timings(&self) -> RepoResult<Vec<ClaimTiming>> {
        self.inner.claim_timings().await
    }
}

// ============================================================================
// Context
// ============================================================================

pub fn admin_config() -> AdminConfig {
    AdminConfig {
        username: ADMIN_USERNAME.to_string(),
        password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
    }
}

/// Everything a service test needs, wired to in-memory collaborators
pub struct Harness {
    pub ctx: ServiceContext,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    pub fn with(notifier: Arc<dyn WinnerNotifier>, admin: AdminConfig) -> Self {
        Self::build(notifier, admin, LinkFaults::default())
    }

    /// Harness whose link repository fails the given writes
    pub fn with_link_faults(faults: LinkFaults) -> Self {
        let (notifier, _) = RecordingNotifier::new();
        let admin = AdminConfig {
            username: ADMIN_USERNAME.to_string(),
            password_hash: String::new(),
        };
        Self::build(notifier, admin, faults)
    }

    fn build(notifier: Arc<dyn WinnerNotifier>, admin: AdminConfig, faults: LinkFaults) -> Self {
        let clock = ManualClock::new(t0());
        let store = MemoryStore::new(Arc::clone(&clock));
        let links: Arc<dyn LinkRepository> = Arc::new(FaultyLinks {
            inner: store.clone(),
            faults,
        });
        let ctx = ServiceContextBuilder::new()
            .event_repo(store.clone())
            .link_repo(links)
            .notifier(notifier)
            .clock(clock.clone())
            .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
            .admin(admin)
            .build()
            .unwrap();

        Self { ctx, store, clock }
    }

    /// Harness whose notifier always fails and whose admin cannot log in
    pub fn new() -> Self {
        Self::with_notifier(Arc::new(FailingNotifier))
    }

    pub fn with_notifier(notifier: Arc<dyn WinnerNotifier>) -> Self {
        let admin = AdminConfig {
            username: ADMIN_USERNAME.to_string(),
            password_hash: String::new(),
        };
        Self::with(notifier, admin)
    }

    /// Event starting at `t0()` with a link valid for one hour
    pub fn standard_event(&self) -> (Event, Link) {
        self.store.insert_event(t0(), t0() + Duration::hours(1))
    }
}
