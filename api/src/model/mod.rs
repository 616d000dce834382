pub mod event;
pub mod message;
pub mod registration;
pub mod user;
