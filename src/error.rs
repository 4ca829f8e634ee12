use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required field")]
    MissingField,

    #[error("Username must be 3-20 alphanumeric characters")]
    BadUsername,

    #[error("Invalid email format")]
    BadEmail,

    #[error("Password must be 8+ chars with uppercase, lowercase, and a digit")]
    WeakPassword,

    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Event name must not be empty")]
    EmptyEventName,

    #[error("Event owner does not exist")]
    UnknownOwner,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Email already exists")]
    EmailTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code carried in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingField => "missing_field",
            AppError::BadUsername => "bad_username",
            AppError::BadEmail => "bad_email",
            AppError::WeakPassword => "weak_password",
            AppError::MissingCredentials => "missing_credentials",
            AppError::EmptyEventName => "empty_event_name",
            AppError::UnknownOwner => "unknown_owner",
            AppError::UsernameTaken => "username_taken",
            AppError::EmailTaken => "email_taken",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::Database(_) | AppError::Internal(_) => "internal_error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField
            | AppError::BadUsername
            | AppError::BadEmail
            | AppError::WeakPassword
            | AppError::MissingCredentials
            | AppError::EmptyEventName
            | AppError::UnknownOwner => StatusCode::BAD_REQUEST,
            AppError::UsernameTaken | AppError::EmailTaken => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal detail stays in the server log; callers get an opaque message.
        let error_message = match &self {
            AppError::Database(detail) | AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
            "code": self.code(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}
