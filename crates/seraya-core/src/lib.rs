//! # seraya-core
//!
//! Domain layer for the giveaway service: events, single-use claim links,
//! the redemption window policy, the reward catalog and the ports
//! (repository, notifier, clock) the outer layers implement.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ClaimTiming, Event, Link, LinkWithEvent, Winner};
pub use error::DomainError;
pub use events::WinnerAnnounced;
pub use policy::{average_claim_speed, classify, RedemptionOutcome, WindowStatus};
pub use traits::{
    Clock, EventRepository, LinkRepository, RepoResult, SystemClock, WinnerNotifier,
};
pub use value_objects::{LinkId, RewardCatalog};
