/// Event database operations
use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::Event;

/// Insert a new event and return the assigned id.
pub async fn create_event(
    pool: &SqlitePool,
    name: &str,
    date: Option<&str>,
    description: Option<&str>,
    location: Option<&str>,
    creator_id: i64,
) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO events (name, date, description, location, creator_id)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(name)
    .bind(date)
    .bind(description)
    .bind(location)
    .bind(creator_id)
    .execute(pool)
    .await
    .map_err(map_owner_violation)?;

    Ok(result.last_insert_rowid())
}

// The service checks the owner before inserting; the foreign key is the
// backstop against a racing deletion or an unchecked caller.
fn map_owner_violation(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return AppError::UnknownOwner;
        }
    }
    AppError::Database(err.to_string())
}

/// List events owned by a user, in insertion order (ascending id).
pub async fn list_by_creator(pool: &SqlitePool, creator_id: i64) -> Result<Vec<Event>> {
    let events =
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE creator_id = ?1 ORDER BY id ASC")
            .bind(creator_id)
            .fetch_all(pool)
            .await?;

    Ok(events)
}
