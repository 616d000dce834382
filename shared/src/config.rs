use anyhow::{Context, Result};
use std::path::PathBuf;

const DEFAULT_TOKEN_TTL_SECS: u64 = 2 * 60 * 60;
const DEFAULT_UPLOAD_DIR: &str = "./uploads";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub upload: UploadConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // 環境変数以外からも組み立てられるように、キーの引き方を受け取る
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("environment variable {key} is not set"))
        };

        let database = DatabaseConfig {
            url: require("DATABASE_URL")?,
        };
        let auth = AuthConfig {
            secret: require("JWT_SECRET")?,
            ttl: match lookup("AUTH_TOKEN_TTL") {
                Some(v) => v.parse::<u64>().context("AUTH_TOKEN_TTL must be a number of seconds")?,
                None => DEFAULT_TOKEN_TTL_SECS,
            },
        };
        let upload = UploadConfig {
            dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
        };
        let server = ServerConfig {
            port: match lookup("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|v| !v.is_empty()),
        };

        Ok(Self {
            database,
            auth,
            upload,
            server,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: String,
    // アクセストークンの有効期間 (秒)
    pub ttl: u64,
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_allowed_origin: Option<String>,
}
