use chrono::{DateTime, Utc};
use kernel::model::{
    catalog::Event,
    id::{Enrollment, EventId},
};
use sqlx::{types::Json, FromRow};
use std::collections::BTreeMap;

#[derive(FromRow)]
pub struct EventRow {
    pub event_id: EventId,
    pub fields: Json<BTreeMap<String, String>>,
    pub event_pic: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            event_id,
            fields,
            event_pic,
            created_by,
            created_at,
        } = value;
        Event {
            event_id,
            fields: fields.0,
            event_pic,
            created_by: Enrollment::new(created_by),
            created_at,
        }
    }
}
