/// Event handlers
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::models::{CreateEventRequest, CreateEventResponse, Event};
use crate::services::EventService;
use crate::AppState;

/// Create event endpoint handler
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreateEventResponse>), AppError> {
    let id = EventService::new(state.db.clone()).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(CreateEventResponse { id })))
}

/// List events owned by a user
pub async fn list_events(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Event>>, AppError> {
    let events = EventService::new(state.db.clone())
        .list_by_owner(user_id)
        .await?;

    Ok(Json(events))
}
