pub mod auth;
pub mod events;

pub use auth::{login, register};
pub use events::{create_event, list_events};
