use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use kernel::model::{auth::AccessToken, id::Enrollment};
use registry::AppRegistry;
use shared::error::AppError;

const BEARER: &str = "Bearer";

/// `Authorization` ヘッダーのトークンを検証済みのユーザー
pub struct AuthorizedUser {
    pub enrollment: Enrollment,
}

impl AuthorizedUser {
    pub fn enrollment(&self) -> &Enrollment {
        &self.enrollment
    }
}

// トークン単体と `Bearer <token>` の両方を受け付ける。
// スキーム名は大文字小文字を区別せず、先に取り除いてから空白を削る
fn token_from_header(value: &str) -> Option<AccessToken> {
    let value = value.trim_start();
    let rest = match value.get(..BEARER.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(BEARER) => {
            let rest = &value[BEARER.len()..];
            // "Bearer" 単体、または "Bearer " に続く部分だけをスキームとみなす
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                rest
            } else {
                value
            }
        }
        _ => value,
    };
    let token = rest.trim();
    (!token.is_empty()).then(|| AccessToken(token.to_string()))
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AppError::MissingToken)?;
        let value = header.to_str().map_err(|_| AppError::InvalidToken)?;
        let access_token = token_from_header(value).ok_or(AppError::MissingToken)?;

        let enrollment = registry
            .auth_repository()
            .fetch_enrollment_from_token(&access_token)
            .await?;

        Ok(Self { enrollment })
    }
}
