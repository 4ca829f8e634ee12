/// User database operations
use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::User;

/// Insert a new user and return the assigned id.
///
/// Uniqueness of username and email is enforced atomically by the storage
/// layer, so two concurrent registrations of the same credentials cannot
/// both succeed.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<i64> {
    let result = sqlx::query("INSERT INTO users (username, email, password_hash) VALUES (?1, ?2, ?3)")
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await
        .map_err(map_unique_violation)?;

    Ok(result.last_insert_rowid())
}

/// Translate a unique-constraint failure into the conflict for the offending
/// column; everything else stays a database error.
fn map_unique_violation(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let message = db_err.message();
            if message.contains("users.username") {
                return AppError::UsernameTaken;
            }
            if message.contains("users.email") {
                return AppError::EmailTaken;
            }
        }
    }
    AppError::Database(err.to_string())
}

/// Find user by username
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Find user by id
pub async fn find_by_id(pool: &SqlitePool, user_id: i64) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}
