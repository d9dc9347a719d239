//! Display time zone

mod display_zone;

pub use display_zone::DisplayZone;
