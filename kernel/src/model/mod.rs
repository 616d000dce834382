pub mod auth;
pub mod catalog;
pub mod id;
pub mod registration;
pub mod role;
pub mod user;
