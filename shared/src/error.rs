use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("Invalid credentials")]
    UnauthenticatedError,
    #[error("Token is missing!")]
    MissingToken,
    #[error("Token expired!")]
    ExpiredToken,
    #[error("Invalid token!")]
    InvalidToken,
    #[error("Unauthorized")]
    ForbiddenOperation,
    #[error("{0}")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("failed to hash password: {0}")]
    PasswordHashError(String),
    #[error("failed to issue access token: {0}")]
    TokenIssueError(String),
    #[error("{0}")]
    StorageError(#[from] std::io::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidRequest(_) | AppError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnauthenticatedError
            | AppError::MissingToken
            | AppError::ExpiredToken
            | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ConversionEntityError(_)
            | AppError::PasswordHashError(_)
            | AppError::TokenIssueError(_)
            | AppError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        // 内部エラーの詳細はログにだけ出し、クライアントには返さない
        let message = if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
            "Server error".to_string()
        } else {
            self.to_string()
        };

        (status_code, Json(json!({ "message": message }))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error.message = %rejection.body_text(), "rejected JSON body");
        AppError::InvalidRequest("Invalid request: JSON data required".into())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(error: MultipartError) -> Self {
        AppError::InvalidRequest(error.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn message_of(res: Response) -> String {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["message"].as_str().unwrap().to_string()
    }

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(AppError::Conflict("dup".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::UnauthenticatedError.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::ExpiredToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::ForbiddenOperation.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::EntityNotFound("User not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::NoRowsAffectedError("users".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn client_errors_expose_their_message() {
        let res = AppError::Conflict("You are already registered for this event!".into())
            .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            message_of(res).await,
            "You are already registered for this event!"
        );

        let res = AppError::MissingToken.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(message_of(res).await, "Token is missing!");
    }

    #[tokio::test]
    async fn server_errors_are_opaque() {
        let res = AppError::SpecificOperationError(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message_of(res).await, "Server error");
    }
}
