use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    catalog::UNPAID,
    id::Enrollment,
    registration::{event::CreateRegistration, Registration},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEventRequest {
    #[serde(default)]
    #[garde(length(min = 1))]
    event_name: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    event_date: String,
    #[serde(default)]
    #[garde(skip)]
    event_description: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    department: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    time: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    location: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    is_paid: Option<String>,
    #[serde(default)]
    #[garde(skip)]
    event_pic: Option<String>,
}

#[derive(new)]
pub struct RegisterEventRequestWithEnrollment(Enrollment, DateTime<Utc>, RegisterEventRequest);

impl From<RegisterEventRequestWithEnrollment> for CreateRegistration {
    fn from(value: RegisterEventRequestWithEnrollment) -> Self {
        let RegisterEventRequestWithEnrollment(
            enrollment,
            registered_at,
            RegisterEventRequest {
                event_name,
                event_date,
                event_description,
                department,
                time,
                location,
                is_paid,
                event_pic,
            },
        ) = value;
        CreateRegistration {
            enrollment,
            event_name,
            event_date,
            event_description: event_description.unwrap_or_default(),
            department: department.unwrap_or_default(),
            time: time.unwrap_or_default(),
            location: location.unwrap_or_default(),
            is_paid: is_paid.unwrap_or_else(|| UNPAID.to_string()),
            event_pic: event_pic.unwrap_or_default(),
            registered_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
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

impl From<Registration> for RegistrationResponse {
    fn from(value: Registration) -> Self {
        let Registration {
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
        Self {
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
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredEventsResponse {
    pub enrollment: Enrollment,
    pub registered_events: Vec<RegistrationResponse>,
    pub event_count: usize,
}

impl RegisteredEventsResponse {
    pub fn new(enrollment: Enrollment, registrations: Vec<Registration>) -> Self {
        let registered_events: Vec<RegistrationResponse> = registrations
            .into_iter()
            .map(RegistrationResponse::from)
            .collect();
        Self {
            enrollment,
            event_count: registered_events.len(),
            registered_events,
        }
    }
}
