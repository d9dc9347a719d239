//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{ClaimTiming, Event, Link, LinkWithEvent, Winner};
use crate::error::DomainError;
use crate::value_objects::LinkId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Event>>;

    /// Earliest event strictly after `now`
    async fn find_next_upcoming(&self, now: DateTime<Utc>) -> RepoResult<Option<Event>>;

    /// Insert an event and its first link in one transaction
    async fn create_with_link(
        &self,
        event_date: DateTime<Utc>,
        link_expires_at: DateTime<Utc>,
    ) -> RepoResult<(Event, Link)>;

    /// Total number of events
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Link Repository
// ============================================================================

#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Find link by ID
    async fn find_by_id(&self, id: LinkId) -> RepoResult<Option<Link>>;

    /// Find link together with its event's start instant
    async fn find_with_event(&self, id: LinkId) -> RepoResult<Option<LinkWithEvent>>;

    /// Insert a fresh link
    async fn create(&self, link: &Link) -> RepoResult<()>;

    /// Oldest link of an event, if any
    async fn find_first_for_event(&self, event_id: i64) -> RepoResult<Option<Link>>;

    /// Atomically add one to `attempt_count` and return the updated row.
    ///
    /// Returns `None` if the link does not exist.
    async fn record_attempt(&self, id: LinkId) -> RepoResult<Option<Link>>;

    /// Conditional claim: mark the link used and store the winner only if
    /// it is still unused at write time, counting the attempt in the same
    /// statement.
    ///
    /// Returns the new `attempt_count` on success and `None` when another
    /// redemption got there first (or the link is gone).
    async fn claim(&self, id: LinkId, winner: &Winner) -> RepoResult<Option<i32>>;

    /// Claimed links, most recent claim first
    async fn find_winners(&self, limit: Option<i64>) -> RepoResult<Vec<Link>>;

    /// Number of claimed links
    async fn count_claimed(&self) -> RepoResult<i64>;

    /// Claim instants of every claimed link next to its event start
    async fn claim_timings(&self) -> RepoResult<Vec<ClaimTiming>>;
}
