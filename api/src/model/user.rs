use garde::Validate;
use kernel::model::{
    id::Enrollment,
    role::Role,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, VariantNames)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RoleName {
    Admin,
    User,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::User => Self::User,
        }
    }
}

// "@" と "." を含んでいれば受け付ける
fn looks_like_email(value: &str, _context: &()) -> garde::Result {
    if value.contains('@') && value.contains('.') {
        Ok(())
    } else {
        Err(garde::Error::new("Invalid email format!"))
    }
}

// 未指定 (空文字) なら user として扱う
fn known_role(value: &str, _context: &()) -> garde::Result {
    if value.is_empty() || value.parse::<Role>().is_ok() {
        Ok(())
    } else {
        Err(garde::Error::new("Invalid role! Expected \"user\" or \"admin\""))
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default)]
    #[garde(length(min = 1))]
    enrollment: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    name: String,
    #[serde(default)]
    #[garde(length(min = 1), custom(looks_like_email))]
    email: String,
    #[serde(default)]
    #[garde(length(chars, min = 6))]
    password: String,
    #[serde(default)]
    #[garde(custom(known_role))]
    role: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            enrollment,
            name,
            email,
            password,
            role,
        } = value;
        Self {
            enrollment: Enrollment::new(enrollment),
            name,
            email,
            password,
            role: role.parse().unwrap_or_default(),
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[garde(length(min = 1))]
    pub enrollment: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub redirect: String,
    pub user: LoginUserResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserResponse {
    pub name: String,
    pub role: RoleName,
    pub photo: String,
}

impl From<User> for LoginUserResponse {
    fn from(value: User) -> Self {
        let User {
            name, role, photo, ..
        } = value;
        Self {
            name,
            role: RoleName::from(role),
            photo: photo.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub enrollment: Enrollment,
    pub name: String,
    pub email: String,
    pub role: RoleName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            enrollment,
            name,
            email,
            role,
            photo,
        } = value;
        Self {
            enrollment,
            name,
            email,
            role: RoleName::from(role),
            photo,
        }
    }
}
