use super::{IS_PAID_FIELD, UNPAID};
use crate::model::id::Enrollment;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct CreateEvent {
    pub fields: BTreeMap<String, String>,
    pub event_pic: Option<String>,
    pub created_by: Enrollment,
}

impl CreateEvent {
    // isPaid が送られてこなかった場合は Unpaid とする
    pub fn new(
        mut fields: BTreeMap<String, String>,
        event_pic: Option<String>,
        created_by: Enrollment,
    ) -> Self {
        fields
            .entry(IS_PAID_FIELD.to_string())
            .or_insert_with(|| UNPAID.to_string());
        Self {
            fields,
            event_pic,
            created_by,
        }
    }
}
