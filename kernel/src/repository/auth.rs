use crate::model::{auth::AccessToken, id::Enrollment, user::User};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // 学籍番号とパスワードを照合し、一致すればユーザー情報を返す
    async fn verify_user(&self, enrollment: &Enrollment, password: &str) -> AppResult<User>;
    // 学籍番号を埋め込んだアクセストークンを発行する
    async fn create_token(&self, enrollment: &Enrollment) -> AppResult<AccessToken>;
    // トークンを検証して学籍番号を取り出す
    async fn fetch_enrollment_from_token(&self, token: &AccessToken) -> AppResult<Enrollment>;
}
