use crate::model::id::{Enrollment, EventId};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

pub mod event;

pub const EVENT_NAME_FIELD: &str = "eventName";
pub const EVENT_DATE_FIELD: &str = "eventDate";
pub const IS_PAID_FIELD: &str = "isPaid";
pub const UNPAID: &str = "Unpaid";

/// 管理者が作成したイベント。フォームの値はそのままの形で保持する
#[derive(Debug, Clone)]
pub struct Event {
    pub event_id: EventId,
    pub fields: BTreeMap<String, String>,
    pub event_pic: Option<String>,
    pub created_by: Enrollment,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn event_name(&self) -> Option<&str> {
        self.fields.get(EVENT_NAME_FIELD).map(String::as_str)
    }

    pub fn event_date(&self) -> Option<&str> {
        self.fields.get(EVENT_DATE_FIELD).map(String::as_str)
    }
}

// イベント画像の保存ファイル名を `<イベント名>_<UNIX 時刻>.jpg` の形で作る。
// `[A-Za-z0-9_-]` 以外の文字は `_` に置き換え、アップロード先の外を指さないようにする
pub fn event_pic_file_name(event_name: Option<&str>, at: DateTime<Utc>) -> String {
    let stem: String = match event_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect(),
        None => "event".into(),
    };
    format!(
        "{}_{}.{:06}.jpg",
        stem,
        at.timestamp(),
        at.timestamp_subsec_micros()
    )
}
