// Event Manager Service Library

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod security;
pub mod services;
pub mod validators;

pub use error::{AppError, Result};

// Re-export commonly used types
pub use models::{Event, User};

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::SqlitePool,
}
