use crate::model::{id::Enrollment, role::Role};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateUser {
    pub enrollment: Enrollment,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
