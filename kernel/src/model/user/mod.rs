use crate::model::{id::Enrollment, role::Role};
pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub enrollment: Enrollment,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub photo: Option<String>,
}
