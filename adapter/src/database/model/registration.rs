use chrono::{DateTime, Utc};
use kernel::model::{id::Enrollment, registration::Registration};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct RegistrationRow {
    pub enrollment: String,
    pub event_name: String,
    pub event_date: String,
    pub event_description: String,
    pub department: String,
    pub time: String,
    pub location: String,
    pub is_paid: String,
    pub event_pic: String,
    pub registered_at: DateTime<Utc>,
}

impl From<RegistrationRow> for Registration {
    fn from(value: RegistrationRow) -> Self {
        let RegistrationRow {
            enrollment,
            event_name,
            event_date,
            event_description,
            department,
            time,
            location,
            is_paid,
            event_pic,
            registered_at,
        } = value;
        Registration {
            enrollment: Enrollment::new(enrollment),
            event_name,
            event_date,
            event_description,
            department,
            time,
            location,
            is_paid,
            event_pic,
            registered_at,
        }
    }
}
