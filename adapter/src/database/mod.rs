use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};
use sqlx::{postgres::PgConnectOptions, PgPool};
use std::str::FromStr;

pub mod model;

fn make_pg_connect_options(cfg: &DatabaseConfig) -> AppResult<PgConnectOptions> {
    PgConnectOptions::from_str(&cfg.url).map_err(AppError::SpecificOperationError)
}

#[derive(Clone)]
pub struct ConnectionPool(PgPool);

impl ConnectionPool {
    pub fn new(pool: PgPool) -> Self {
        Self(pool)
    }

    pub fn inner_ref(&self) -> &PgPool {
        &self.0
    }
}

pub fn connect_database_with(cfg: &DatabaseConfig) -> AppResult<ConnectionPool> {
    Ok(ConnectionPool(PgPool::connect_lazy_with(
        make_pg_connect_options(cfg)?,
    )))
}

// adapter/migrations 以下の SQL を順に適用する
pub async fn migrate(pool: &ConnectionPool) -> AppResult<()> {
    sqlx::migrate!()
        .run(pool.inner_ref())
        .await
        .map_err(|e| AppError::SpecificOperationError(e.into()))
}
