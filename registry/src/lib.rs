use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::jwt::JwtCodec;
use adapter::repository::{
    auth::AuthRepositoryImpl, event::EventRepositoryImpl, health::HealthCheckRepositoryImpl,
    image::ImageRepositoryImpl, registration::RegistrationRepositoryImpl,
    user::UserRepositoryImpl,
};
use kernel::repository::{
    auth::AuthRepository, event::EventRepository, health::HealthCheckRepository,
    image::ImageRepository, registration::RegistrationRepository, user::UserRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    event_repository: Arc<dyn EventRepository>,
    registration_repository: Arc<dyn RegistrationRepository>,
    image_repository: Arc<dyn ImageRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: &AppConfig) -> Self {
        let codec = JwtCodec::new(&app_config.auth.secret, app_config.auth.ttl);
        Self::from_repositories(
            Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            Arc::new(UserRepositoryImpl::new(pool.clone())),
            Arc::new(AuthRepositoryImpl::new(pool.clone(), codec)),
            Arc::new(EventRepositoryImpl::new(pool.clone())),
            Arc::new(RegistrationRepositoryImpl::new(pool)),
            Arc::new(ImageRepositoryImpl::new(&app_config.upload.dir)),
        )
    }

    /// 任意の実装を差し込んで組み立てる。テストではインメモリ実装を渡す
    pub fn from_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        user_repository: Arc<dyn UserRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        event_repository: Arc<dyn EventRepository>,
        registration_repository: Arc<dyn RegistrationRepository>,
        image_repository: Arc<dyn ImageRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            user_repository,
            auth_repository,
            event_repository,
            registration_repository,
            image_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn registration_repository(&self) -> Arc<dyn RegistrationRepository> {
        self.registration_repository.clone()
    }

    pub fn image_repository(&self) -> Arc<dyn ImageRepository> {
        self.image_repository.clone()
    }
}
