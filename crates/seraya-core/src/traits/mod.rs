//! Ports - the interfaces the domain needs from the outside world

mod clock;
mod notifier;
mod repositories;

pub use clock::{Clock, SystemClock};
pub use notifier::WinnerNotifier;
pub use repositories::{EventRepository, LinkRepository, RepoResult};
