#![allow(dead_code)]

use adapter::{
    jwt::JwtCodec,
    password::{hash_password, verify_password},
    repository::image::ImageRepositoryImpl,
};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use kernel::model::{
    auth::AccessToken,
    catalog::{event::CreateEvent, Event},
    id::{Enrollment, EventId},
    registration::{event::CreateRegistration, Registration},
    user::{event::CreateUser, User},
};
use kernel::repository::{
    auth::AuthRepository, event::EventRepository, health::HealthCheckRepository,
    registration::RegistrationRepository, user::UserRepository,
};
use registry::AppRegistry;
use serde_json::{json, Value};
use shared::error::{AppError, AppResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";
pub const TTL: u64 = 2 * 60 * 60;
pub const BOUNDARY: &str = "X-TEST-BOUNDARY";

#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<HashMap<Enrollment, (User, String)>>,
    events: Mutex<Vec<Event>>,
    registrations: Mutex<Vec<Registration>>,
    // true の間はイベントの登録が失敗する
    pub fail_event_inserts: AtomicBool,
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, event: CreateUser) -> AppResult<()> {
        let password_hash = hash_password(event.password).await?;
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&event.enrollment) {
            return Err(AppError::Conflict(
                "User with this enrollment already exists!".into(),
            ));
        }
        let user = User {
            enrollment: event.enrollment.clone(),
            name: event.name,
            email: event.email,
            role: event.role,
            photo: None,
        };
        users.insert(event.enrollment, (user, password_hash));
        Ok(())
    }

    async fn find_by_enrollment(&self, enrollment: &Enrollment) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .get(enrollment)
            .map(|(user, _)| user.clone()))
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        if self.fail_event_inserts.load(Ordering::SeqCst) {
            return Err(AppError::NoRowsAffectedError(
                "No event record has been created".into(),
            ));
        }
        let event_id = EventId::new();
        self.events.lock().unwrap().push(Event {
            event_id,
            fields: event.fields,
            event_pic: event.event_pic,
            created_by: event.created_by,
            created_at: chrono::Utc::now(),
        });
        Ok(event_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        Ok(self.events.lock().unwrap().clone())
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryStore {
    async fn create(&self, event: CreateRegistration) -> AppResult<()> {
        let mut registrations = self.registrations.lock().unwrap();
        if registrations
            .iter()
            .any(|r| r.enrollment == event.enrollment && r.event_name == event.event_name)
        {
            return Err(AppError::Conflict(
                "You are already registered for this event!".into(),
            ));
        }
        registrations.push(Registration {
            enrollment: event.enrollment,
            event_name: event.event_name,
            event_date: event.event_date,
            event_description: event.event_description,
            department: event.department,
            time: event.time,
            location: event.location,
            is_paid: event.is_paid,
            event_pic: event.event_pic,
            registered_at: event.registered_at,
        });
        Ok(())
    }

    async fn find_by_enrollment(&self, enrollment: &Enrollment) -> AppResult<Vec<Registration>> {
        Ok(self
            .registrations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.enrollment == enrollment)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl HealthCheckRepository for InMemoryStore {
    async fn check_db(&self) -> bool {
        true
    }
}

pub struct InMemoryAuth {
    store: Arc<InMemoryStore>,
    codec: JwtCodec,
}

#[async_trait]
impl AuthRepository for InMemoryAuth {
    async fn verify_user(&self, enrollment: &Enrollment, password: &str) -> AppResult<User> {
        let found = self.store.users.lock().unwrap().get(enrollment).cloned();
        let Some((user, password_hash)) = found else {
            return Err(AppError::UnauthenticatedError);
        };
        verify_password(password.to_string(), password_hash).await?;
        Ok(user)
    }

    async fn create_token(&self, enrollment: &Enrollment) -> AppResult<AccessToken> {
        self.codec.issue(enrollment)
    }

    async fn fetch_enrollment_from_token(&self, token: &AccessToken) -> AppResult<Enrollment> {
        self.codec.verify(token)
    }
}

pub struct TestApp {
    router: Router,
    pub store: Arc<InMemoryStore>,
    pub codec: JwtCodec,
    upload_dir: PathBuf,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let codec = JwtCodec::new(SECRET, TTL);
        let upload_dir =
            std::env::temp_dir().join(format!("campus-events-uploads-{}", uuid::Uuid::new_v4()));
        let registry = AppRegistry::from_repositories(
            store.clone(),
            store.clone(),
            Arc::new(InMemoryAuth {
                store: store.clone(),
                codec: codec.clone(),
            }),
            store.clone(),
            store.clone(),
            Arc::new(ImageRepositoryImpl::new(&upload_dir)),
        );
        let router = Router::new()
            .merge(api::route::api::routes())
            .merge(api::route::upload::build_upload_routers(&upload_dir))
            .with_state(registry);
        Self {
            router,
            store,
            codec,
            upload_dir,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    // アップロード先に保存されたファイル名の一覧
    pub fn uploaded_files(&self) -> Vec<String> {
        std::fs::read_dir(&self.upload_dir)
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|entry| entry.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub async fn get_raw(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn post_multipart(
        &self,
        uri: &str,
        token: Option<&str>,
        fields: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        self.send(builder.body(Body::from(multipart_body(fields, file))).unwrap())
            .await
    }

    pub async fn create_user(&self, enrollment: &str, password: &str, role: &str) {
        let (status, _) = self
            .post_json(
                "/api/users/create",
                None,
                json!({
                    "enrollment": enrollment,
                    "name": format!("name-{enrollment}"),
                    "email": format!("{enrollment}@example.com"),
                    "password": password,
                    "role": role,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    pub async fn login(&self, enrollment: &str, password: &str) -> String {
        let (status, body) = self
            .post_json(
                "/api/users/login",
                None,
                json!({ "enrollment": enrollment, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }
}

pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"eventPic\"; filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.upload_dir);
    }
}
