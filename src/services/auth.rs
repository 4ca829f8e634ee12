/// Registration and login workflows
use sqlx::SqlitePool;
use tracing::info;

use crate::db;
use crate::error::{AppError, Result};
use crate::models::User;
use crate::security::password;
use crate::validators;

#[derive(Clone)]
pub struct AuthService {
    db: SqlitePool,
}

impl AuthService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Register a new user.
    ///
    /// Validation is fail-fast: the first violated rule decides the error.
    /// Returns the id assigned by the store.
    pub async fn register(&self, username: &str, password: &str, email: &str) -> Result<i64> {
        if username.is_empty() || password.is_empty() || email.is_empty() {
            return Err(AppError::MissingField);
        }
        if !validators::validate_username(username) {
            return Err(AppError::BadUsername);
        }
        if !validators::validate_email(email) {
            return Err(AppError::BadEmail);
        }
        if !validators::validate_password(password) {
            return Err(AppError::WeakPassword);
        }

        // Argon2 is CPU-bound; keep it off the async workers.
        let plaintext = password.to_string();
        let password_hash =
            tokio::task::spawn_blocking(move || password::hash_password(&plaintext))
                .await
                .map_err(|e| AppError::Internal(format!("hashing task failed: {}", e)))??;

        let user_id = db::users::create_user(&self.db, username, email, &password_hash).await?;

        info!(user_id, username, "user registered");
        Ok(user_id)
    }

    /// Authenticate a user by username and password.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller, and the unknown-user path still runs a full verification so
    /// neither case is cheaper than the other.
    pub async fn login(&self, username: &str, password: &str) -> Result<User> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::MissingCredentials);
        }

        let user = db::users::find_by_username(&self.db, username).await?;

        let plaintext = password.to_string();
        let verified = match &user {
            Some(user) => {
                let digest = user.password_hash.clone();
                tokio::task::spawn_blocking(move || {
                    password::verify_password(&plaintext, &digest)
                })
                .await
                .map_err(|e| AppError::Internal(format!("verification task failed: {}", e)))??
            }
            None => tokio::task::spawn_blocking(move || password::verify_dummy(&plaintext))
                .await
                .map_err(|e| AppError::Internal(format!("verification task failed: {}", e)))??,
        };

        match user {
            Some(user) if verified => {
                info!(user_id = user.id, "user logged in");
                Ok(user)
            }
            _ => Err(AppError::InvalidCredentials),
        }
    }
}
