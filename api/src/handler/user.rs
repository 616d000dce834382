use crate::{
    extractor::AuthorizedUser,
    model::{
        message::MessageResponse,
        user::{CreateUserRequest, UserResponse},
    },
};
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_user(
    State(registry): State<AppRegistry>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(req) = payload?;
    req.validate(&())?;

    registry.user_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Account created successfully!")),
    ))
}

pub async fn get_current_user(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_enrollment(user.enrollment())
        .await
        .and_then(|found| match found {
            Some(found) => Ok(Json(found.into())),
            None => Err(AppError::EntityNotFound("User not found".into())),
        })
}
