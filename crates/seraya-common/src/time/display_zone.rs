//! Rendering UTC instants for people
//!
//! Everything is stored and compared in UTC. Only text shown to users goes
//! through a fixed display offset (UTC+7, "WIB", unless configured).

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Offset, TimeZone, Utc};

use crate::config::{ConfigError, DisplayConfig};

const SECONDS_PER_HOUR: i32 = 3600;

/// Fixed-offset zone with a label, e.g. `+07:00 "WIB"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayZone {
    offset: FixedOffset,
    label: String,
}

impl DisplayZone {
    /// Build a zone from a whole-hour offset
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if the offset is outside +-23 hours
    pub fn new(utc_offset_hours: i32, label: impl Into<String>) -> Result<Self, ConfigError> {
        let offset = utc_offset_hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                ConfigError::InvalidValue("DISPLAY_UTC_OFFSET_HOURS", utc_offset_hours.to_string())
            })?;

        Ok(Self {
            offset,
            label: label.into(),
        })
    }

    pub fn from_config(config: &DisplayConfig) -> Result<Self, ConfigError> {
        Self::new(config.utc_offset_hours, config.zone_label.clone())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Format as `17 October 2026 15:00:00 WIB`
    pub fn format(&self, instant: DateTime<Utc>) -> String {
        format!(
            "{} {}",
            instant.with_timezone(&self.offset).format("%d %B %Y %H:%M:%S"),
            self.label
        )
    }

    /// Instant `days_ahead` days after `now` at the given wall-clock time in
    /// this zone
    pub fn wall_clock_after(&self, now: DateTime<Utc>, days_ahead: i64, time: NaiveTime) -> DateTime<Utc> {
        let local_date = (now.with_timezone(&self.offset) + Duration::days(days_ahead)).date_naive();
        let naive = local_date.and_time(time);

        // A fixed offset has no gaps or folds, so the mapping is unique
        self.offset
            .from_local_datetime(&naive)
            .single()
            .map_or_else(|| naive.and_utc(), |dt| dt.with_timezone(&Utc))
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self {
            offset: FixedOffset::east_opt(7 * SECONDS_PER_HOUR).unwrap_or_else(|| Utc.fix()),
            label: "WIB".to_string(),
        }
    }
}
