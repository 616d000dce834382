use crate::model::id::Enrollment;
use chrono::{DateTime, Utc};

pub mod event;

/// イベント情報を非正規化して保持する参加登録
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
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
