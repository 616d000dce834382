use async_trait::async_trait;
use derive_new::new;
use kernel::model::{auth::AccessToken, id::Enrollment, user::User};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserCredentialRow, ConnectionPool};
use crate::jwt::JwtCodec;
use crate::password::verify_password;

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    codec: JwtCodec,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_user(&self, enrollment: &Enrollment, password: &str) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserCredentialRow>(
            r#"
                SELECT enrollment, name, email, role, photo, password_hash
                FROM users
                WHERE enrollment = $1
            "#,
        )
        .bind(enrollment)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // ユーザーが存在しない場合もパスワード不一致と同じエラーにする
        let Some(UserCredentialRow {
            user,
            password_hash,
        }) = row
        else {
            return Err(AppError::UnauthenticatedError);
        };

        verify_password(password.to_string(), password_hash).await?;
        User::try_from(user)
    }

    async fn create_token(&self, enrollment: &Enrollment) -> AppResult<AccessToken> {
        self.codec.issue(enrollment)
    }

    async fn fetch_enrollment_from_token(&self, token: &AccessToken) -> AppResult<Enrollment> {
        self.codec.verify(token)
    }
}
