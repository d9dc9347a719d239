//! Claim speed statistics

use crate::entities::ClaimTiming;

/// Claims earlier than this many seconds before the event are ignored
pub const SPEED_WINDOW_BEFORE_SECS: i64 = 5 * 60;
/// Claims later than this many seconds after the event are ignored
pub const SPEED_WINDOW_AFTER_SECS: i64 = 60 * 60;

/// Average distance in whole seconds between event start and claim.
///
/// Only claims whose signed offset lies in `[-300, 3600]` count, and each
/// contributes its absolute offset. Rounds to the nearest second and
/// returns 0 when nothing qualifies.
pub fn average_claim_speed(timings: &[ClaimTiming]) -> i64 {
    let offsets: Vec<f64> = timings
        .iter()
        .map(|t| (t.claimed_at - t.event_date).num_milliseconds() as f64 / 1000.0)
        .filter(|secs| {
            (-(SPEED_WINDOW_BEFORE_SECS as f64)..=SPEED_WINDOW_AFTER_SECS as f64).contains(secs)
        })
        .map(f64::abs)
        .collect();

    if offsets.is_empty() {
        return 0;
    }

    (offsets.iter().sum::<f64>() / offsets.len() as f64).round() as i64
}
