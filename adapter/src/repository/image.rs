use async_trait::async_trait;
use kernel::repository::image::ImageRepository;
use shared::error::AppResult;
use std::path::{Path, PathBuf};

/// アップロード画像をローカルディレクトリに保存する
pub struct ImageRepositoryImpl {
    dir: PathBuf,
}

impl ImageRepositoryImpl {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ImageRepository for ImageRepositoryImpl {
    async fn save(&self, file_name: &str, bytes: Vec<u8>) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!(path = %path.display(), "saved uploaded image");
        Ok(())
    }

    async fn delete(&self, file_name: &str) -> AppResult<()> {
        match tokio::fs::remove_file(self.dir.join(file_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
