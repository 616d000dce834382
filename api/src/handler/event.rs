use crate::{
    extractor::AuthorizedUser,
    model::{
        event::{CreateEventForm, EventResponse},
        message::MessageResponse,
    },
};
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use kernel::model::{
    catalog::{event::CreateEvent, event_pic_file_name, EVENT_NAME_FIELD},
    role::Role,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn create_event(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    // 本文を読む前に権限を確認する
    let actor = registry
        .user_repository()
        .find_by_enrollment(user.enrollment())
        .await?;
    if !matches!(actor, Some(ref actor) if actor.role == Role::Admin) {
        return Err(AppError::ForbiddenOperation);
    }

    let CreateEventForm { fields, picture } = CreateEventForm::from_multipart(multipart?).await?;

    let event_pic = match picture {
        Some(bytes) => {
            let file_name = event_pic_file_name(
                fields.get(EVENT_NAME_FIELD).map(String::as_str),
                chrono::Utc::now(),
            );
            registry.image_repository().save(&file_name, bytes).await?;
            Some(file_name)
        }
        None => None,
    };

    let saved_pic = event_pic.clone();
    let created = registry
        .event_repository()
        .create(CreateEvent::new(fields, event_pic, user.enrollment))
        .await;

    // 登録に失敗したら保存済みの画像を消しておく
    let event_id = match created {
        Ok(event_id) => event_id,
        Err(e) => {
            if let Some(file_name) = saved_pic {
                if let Err(cleanup) = registry.image_repository().delete(&file_name).await {
                    tracing::warn!(
                        file_name,
                        error.message = %cleanup,
                        "failed to remove image of an event that was not created"
                    );
                }
            }
            return Err(e);
        }
    };

    tracing::info!(%event_id, "event created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Event created successfully!")),
    ))
}

pub async fn show_event_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<EventResponse>>> {
    registry
        .event_repository()
        .find_all()
        .await
        .map(|events| events.into_iter().map(EventResponse::from).collect())
        .map(Json)
}
