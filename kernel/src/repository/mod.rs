pub mod auth;
pub mod event;
pub mod health;
pub mod image;
pub mod registration;
pub mod user;
