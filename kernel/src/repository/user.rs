use crate::model::{
    id::Enrollment,
    user::{event::CreateUser, User},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    // 学籍番号が重複している場合は AppError::Conflict を返す
    async fn create(&self, event: CreateUser) -> AppResult<()>;
    // パスワードを除いたユーザー情報を取得する
    async fn find_by_enrollment(&self, enrollment: &Enrollment) -> AppResult<Option<User>>;
}
