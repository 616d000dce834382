use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::Enrollment,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};
use crate::password::hash_password;

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<()> {
        let password_hash = hash_password(event.password).await?;

        // 主キー制約に任せて、存在確認と挿入を 1 文で行う
        let res = sqlx::query(
            r#"
                INSERT INTO users (enrollment, name, email, password_hash, role)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (enrollment) DO NOTHING
            "#,
        )
        .bind(&event.enrollment)
        .bind(&event.name)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(event.role.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::Conflict(
                "User with this enrollment already exists!".into(),
            ));
        }

        Ok(())
    }

    async fn find_by_enrollment(&self, enrollment: &Enrollment) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT enrollment, name, email, role, photo
                FROM users
                WHERE enrollment = $1
            "#,
        )
        .bind(enrollment)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }
}
