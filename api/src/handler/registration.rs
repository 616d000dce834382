use crate::{
    extractor::AuthorizedUser,
    model::{
        message::MessageResponse,
        registration::{
            RegisterEventRequest, RegisterEventRequestWithEnrollment, RegisteredEventsResponse,
        },
    },
};
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn register_event(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    payload: Result<Json<RegisterEventRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(req) = payload?;
    req.validate(&())?;

    let registration =
        RegisterEventRequestWithEnrollment::new(user.enrollment, chrono::Utc::now(), req);
    registry
        .registration_repository()
        .create(registration.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Successfully registered for the event!")),
    ))
}

pub async fn show_registered_events(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RegisteredEventsResponse>> {
    let registrations = registry
        .registration_repository()
        .find_by_enrollment(user.enrollment())
        .await?;

    Ok(Json(RegisteredEventsResponse::new(
        user.enrollment,
        registrations,
    )))
}
