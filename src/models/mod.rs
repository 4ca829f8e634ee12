pub mod event;
pub mod user;

pub use event::{CreateEventRequest, CreateEventResponse, Event};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, User};
