pub mod api;
pub mod event;
pub mod health;
pub mod upload;
pub mod user;
