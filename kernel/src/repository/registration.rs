use crate::model::{
    id::Enrollment,
    registration::{event::CreateRegistration, Registration},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    // 同じ学籍番号・イベント名の登録が既にあれば AppError::Conflict を返す
    async fn create(&self, event: CreateRegistration) -> AppResult<()>;
    async fn find_by_enrollment(&self, enrollment: &Enrollment) -> AppResult<Vec<Registration>>;
}
