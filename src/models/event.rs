/// Event model
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// `date`, `description`, and `location` are stored and returned verbatim as
// supplied at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub creator_id: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    #[serde(default)]
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub creator_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub id: i64,
}
