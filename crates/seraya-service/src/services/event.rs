//! Event service
//!
//! Schedules events and mints their claim links.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use tracing::{info, instrument};

use seraya_core::entities::{Event, Link, DEFAULT_CLAIM_WINDOW_SECS};
use seraya_core::error::DomainError;

use crate::dto::{AddEventRequest, EventCreatedResponse, GeneratedLinkResponse, NextEventResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Demo event: two days ahead at 15:00 display time
const DEMO_DAYS_AHEAD: i64 = 2;
const DEMO_HOUR: u32 = 15;
/// Demo links stay claimable for a full day
const DEMO_CLAIM_WINDOW_HOURS: i64 = 24;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Schedule an event and its first link in one transaction
    #[instrument(skip(self, request), fields(event_date = %request.event_date))]
    pub async fn add_event(&self, request: AddEventRequest) -> ServiceResult<EventCreatedResponse> {
        let event_date = parse_event_date(&request.event_date)?;
        let expires_at = event_date + Duration::seconds(DEFAULT_CLAIM_WINDOW_SECS);

        let (event, link) = self
            .ctx
            .event_repo()
            .create_with_link(event_date, expires_at)
            .await?;

        info!(event_id = event.id, link_id = %link.id, "Event created");

        let zone = self.ctx.display_zone();
        Ok(EventCreatedResponse {
            message: "Event and link created".to_string(),
            link_id: link.id,
            event_id: event.id,
            event_date: event.event_date,
            event_date_formatted: zone.format(event.event_date),
            expires_at: link.expires_at,
            expires_at_formatted: zone.format(link.expires_at),
        })
    }

    /// Mint another link for the next upcoming event
    #[instrument(skip(self))]
    pub async fn generate_link(&self) -> ServiceResult<GeneratedLinkResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_next_upcoming(self.ctx.now())
            .await?
            .ok_or(DomainError::NoUpcomingEvent)?;

        let link = Link::new(event.id, event.default_link_expiry());
        self.ctx.link_repo().create(&link).await?;

        info!(event_id = event.id, link_id = %link.id, "Link generated");

        let zone = self.ctx.display_zone();
        Ok(GeneratedLinkResponse {
            link_id: link.id,
            event_id: event.id,
            event_date: zone.format(event.event_date),
            expires_at: zone.format(link.expires_at),
        })
    }

    /// Next event after now, with its first link
    pub async fn next_event(&self) -> ServiceResult<NextEventResponse> {
        let now = self.ctx.now();
        let zone = self.ctx.display_zone();

        let Some(event) = self.ctx.event_repo().find_next_upcoming(now).await? else {
            return Ok(NextEventResponse::none(now, zone));
        };
        let link = self.ctx.link_repo().find_first_for_event(event.id).await?;

        Ok(NextEventResponse::found(now, &event, link.as_ref(), zone))
    }

    /// Create the demo event when no event exists yet
    ///
    /// Returns the created event, or `None` if the store already had one.
    #[instrument(skip(self))]
    pub async fn seed_demo_if_empty(&self) -> ServiceResult<Option<Event>> {
        if self.ctx.event_repo().count().await? > 0 {
            return Ok(None);
        }

        let start = NaiveTime::from_hms_opt(DEMO_HOUR, 0, 0).unwrap_or_default();
        let event_date =
            self.ctx
                .display_zone()
                .wall_clock_after(self.ctx.now(), DEMO_DAYS_AHEAD, start);
        let expires_at = event_date + Duration::hours(DEMO_CLAIM_WINDOW_HOURS);

        let (event, link) = self
            .ctx
            .event_repo()
            .create_with_link(event_date, expires_at)
            .await?;

        info!(
            event_id = event.id,
            link_id = %link.id,
            event_date = %self.ctx.display_zone().format(event_date),
            "Demo event seeded"
        );

        Ok(Some(event))
    }
}

fn parse_event_date(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| DomainError::InvalidEventDate(format!("{raw}: {e}")))
}
