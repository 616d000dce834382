use kernel::model::{id::Enrollment, role::Role, user::User};
use shared::error::AppError;
use sqlx::FromRow;

#[derive(FromRow)]
pub struct UserRow {
    pub enrollment: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub photo: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            enrollment,
            name,
            email,
            role,
            photo,
        } = value;
        let role = role
            .parse::<Role>()
            .map_err(|e| AppError::ConversionEntityError(format!("role {role:?}: {e}")))?;
        Ok(User {
            enrollment: Enrollment::new(enrollment),
            name,
            email,
            role,
            photo,
        })
    }
}

// ログイン時の照合用。パスワードハッシュはこの型の外には出さない
#[derive(FromRow)]
pub struct UserCredentialRow {
    #[sqlx(flatten)]
    pub user: UserRow,
    pub password_hash: String,
}
