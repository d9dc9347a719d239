//! Domain entities - core business objects

mod event;
mod link;

pub use event::{Event, DEFAULT_CLAIM_WINDOW_SECS};
pub use link::{ClaimTiming, Link, LinkWithEvent, Winner};
