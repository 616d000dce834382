use crate::model::user::{LoginRequest, LoginResponse};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use garde::Validate;
use kernel::model::id::Enrollment;
use registry::AppRegistry;
use shared::error::AppResult;

const DASHBOARD_PATH: &str = "/dashboard";

pub async fn login(
    State(registry): State<AppRegistry>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(req) = payload?;
    req.validate(&())?;

    let enrollment = Enrollment::new(req.enrollment);
    let user = registry
        .auth_repository()
        .verify_user(&enrollment, &req.password)
        .await?;
    let access_token = registry
        .auth_repository()
        .create_token(&user.enrollment)
        .await?;

    tracing::info!(enrollment = %user.enrollment, "user logged in");

    Ok(Json(LoginResponse {
        token: access_token.0,
        redirect: DASHBOARD_PATH.into(),
        user: user.into(),
    }))
}
