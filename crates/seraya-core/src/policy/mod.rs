//! Redemption rules that do not touch storage
//!
//! - [`classify`]: where an instant falls relative to a link's claim window
//! - [`RedemptionOutcome`]: every user-facing result of a claim attempt
//! - [`average_claim_speed`]: post-hoc timing statistics over past winners

mod outcome;
mod speed;
mod window;

pub use outcome::RedemptionOutcome;
pub use speed::{average_claim_speed, SPEED_WINDOW_AFTER_SECS, SPEED_WINDOW_BEFORE_SECS};
pub use window::{classify, WindowStatus};
