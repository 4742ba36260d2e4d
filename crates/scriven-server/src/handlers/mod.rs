//! HTTP handlers

pub mod analytics;
pub mod auth;
pub mod feed;
pub mod health;
pub mod users;
pub mod writings;

pub use health::health;
