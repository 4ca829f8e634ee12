pub mod auth;
pub mod events;

pub use auth::AuthService;
pub use events::EventService;
