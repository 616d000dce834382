pub mod database;
pub mod jwt;
pub mod password;
pub mod repository;
