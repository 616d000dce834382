use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ImageRepository: Send + Sync {
    // 同名のファイルがあれば上書きする
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> AppResult<()>;
    // 存在しないファイルの削除は成功扱い
    async fn delete(&self, file_name: &str) -> AppResult<()>;
}
