//! Event model -> entity mapper

use seraya_core::entities::Event;

use crate::models::EventModel;

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: model.id,
            event_date: model.event_date,
            created_at: model.created_at,
        }
    }
}
