//! Domain events - notices emitted when domain state changes

mod winner;

pub use winner::WinnerAnnounced;
