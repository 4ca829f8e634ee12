/// Event creation and listing workflows
use sqlx::SqlitePool;
use tracing::info;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{CreateEventRequest, Event};

#[derive(Clone)]
pub struct EventService {
    db: SqlitePool,
}

impl EventService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Create an event owned by an existing user and return its id.
    pub async fn create(&self, request: &CreateEventRequest) -> Result<i64> {
        if request.name.is_empty() {
            return Err(AppError::EmptyEventName);
        }
        if db::users::find_by_id(&self.db, request.creator_id)
            .await?
            .is_none()
        {
            return Err(AppError::UnknownOwner);
        }

        let event_id = db::events::create_event(
            &self.db,
            &request.name,
            request.date.as_deref(),
            request.description.as_deref(),
            request.location.as_deref(),
            request.creator_id,
        )
        .await?;

        info!(event_id, creator_id = request.creator_id, "event created");
        Ok(event_id)
    }

    /// List events owned by a user, oldest first.
    pub async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Event>> {
        db::events::list_by_creator(&self.db, owner_id).await
    }
}
