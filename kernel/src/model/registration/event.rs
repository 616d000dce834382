use crate::model::id::Enrollment;
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateRegistration {
    pub enrollment: Enrollment,
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
