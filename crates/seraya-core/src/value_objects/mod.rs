//! Value objects - immutable types that represent domain concepts

mod link_id;
mod reward_catalog;

pub use link_id::{LinkId, LinkIdParseError};
pub use reward_catalog::{RewardCatalog, DEFAULT_ROLES};
