/// Authentication handlers
use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::services::AuthService;
use crate::AppState;

/// Register endpoint handler
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let id = AuthService::new(state.db.clone())
        .register(&payload.username, &payload.password, &payload.email)
        .await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse { id })))
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = AuthService::new(state.db.clone())
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        user_id: user.id,
        username: user.username,
    }))
}
