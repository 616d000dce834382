use axum::extract::Multipart;
use kernel::model::catalog::{Event, EVENT_DATE_FIELD};
use serde::Serialize;
use serde_json::{Map, Value};
use shared::error::AppResult;
use std::collections::BTreeMap;

pub const EVENT_PIC_FIELD: &str = "eventPic";

/// フォームの値に作成者・画像名と `date` エイリアスを加えた JSON オブジェクト
#[derive(Debug, Serialize)]
pub struct EventResponse(Map<String, Value>);

impl From<Event> for EventResponse {
    fn from(value: Event) -> Self {
        let Event {
            fields,
            event_pic,
            created_by,
            ..
        } = value;

        let mut map: Map<String, Value> = fields
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        if let Some(event_pic) = event_pic {
            map.insert(EVENT_PIC_FIELD.into(), Value::String(event_pic));
        }
        map.insert("created_by".into(), Value::String(created_by.into_inner()));
        if let Some(date) = map.get(EVENT_DATE_FIELD).cloned() {
            map.insert("date".into(), date);
        }
        Self(map)
    }
}

/// multipart で送られてきたイベント作成フォーム
#[derive(Debug, Default)]
pub struct CreateEventForm {
    pub fields: BTreeMap<String, String>,
    pub picture: Option<Vec<u8>>,
}

impl CreateEventForm {
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            // ファイルは eventPic だけを画像として受け付け、空のファイルは未添付とみなす。
            // ファイル名のない eventPic は通常のフォーム値として扱う
            if field.file_name().is_some() {
                if name == EVENT_PIC_FIELD {
                    let bytes = field.bytes().await?;
                    if !bytes.is_empty() {
                        form.picture = Some(bytes.to_vec());
                    }
                }
                continue;
            }

            let value = field.text().await?;
            form.fields.insert(name, value);
        }

        Ok(form)
    }
}
