use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use shared::error::{AppError, AppResult};

// Argon2 は CPU とメモリを使うので、tokio のワーカーを塞がないよう
// spawn_blocking のスレッドで計算する
async fn run_blocking<T, F>(f: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::PasswordHashError(format!("hashing task failed: {e}")))?
}

/// ソルト付きの Argon2 ハッシュ (PHC 文字列) を作る
pub async fn hash_password(password: String) -> AppResult<String> {
    run_blocking(move || hash_password_sync(&password)).await
}

pub async fn verify_password(password: String, hash: String) -> AppResult<()> {
    run_blocking(move || verify_password_sync(&password, &hash)).await
}

fn hash_password_sync(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::PasswordHashError(e.to_string()))
}

fn verify_password_sync(password: &str, hash: &str) -> AppResult<()> {
    let parsed = PasswordHash::new(hash).map_err(|e| AppError::PasswordHashError(e.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|e| match e {
            argon2::password_hash::Error::Password => AppError::UnauthenticatedError,
            other => AppError::PasswordHashError(other.to_string()),
        })
}
