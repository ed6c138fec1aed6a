use chrono::Utc;
use log::{error, info};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::session::AuthToken;
use crate::state::AppState;
use crate::store::{tokens, users};

const INVALID_CREDENTIALS: &str = "Invalid email or password.";
const INVALID_TOKEN: &str = "Invalid or expired token.";

pub async fn register(state: &AppState, email: &str, password: &str) -> Result<i64, AppError> {
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation("Email and password are required.".into()));
    }

    let existing = users::find_by_email(&state.pool, email)
        .await
        .map_err(|e| AppError::persistence("Failed to register user.", e))?;
    if existing.is_some() {
        info!("Registration rejected, email already in use: {}", email);
        return Err(AppError::Conflict("User already exists.".into()));
    }

    let password_hash = state.hasher.hash(password)?;

    match users::insert(&state.pool, email, &password_hash).await {
        Ok(id) => {
            info!("User {} registered successfully", email);
            Ok(id)
        }
        // Lost a race against a concurrent registration of the same email.
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(AppError::Conflict("User already exists.".into()))
        }
        Err(e) => Err(AppError::persistence("Failed to register user.", e)),
    }
}

/// Verifies the credentials and issues a fresh bearer token.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<String, AppError> {
    let user = users::find_by_email(&state.pool, email)
        .await
        .map_err(|e| AppError::persistence("Failed to log in.", e))?;

    let user = match user {
        Some(user) if state.hasher.verify(&user.password_hash, password) => user,
        _ => {
            info!("Failed login attempt for {}", email);
            return Err(AppError::Authentication(INVALID_CREDENTIALS.into()));
        }
    };

    let token = AuthToken {
        token: Uuid::new_v4().to_string(),
        user_id: user.id,
        expires_at: Utc::now() + state.token_ttl,
    };
    tokens::insert(&state.pool, &token)
        .await
        .map_err(|e| AppError::persistence("Failed to create session.", e))?;

    info!("User {} logged in successfully", email);
    Ok(token.token)
}

/// Resolves a bearer token to the id of the user it was issued to.
pub async fn authenticate(state: &AppState, token: &str) -> Result<i64, AppError> {
    let stored = tokens::find(&state.pool, token)
        .await
        .map_err(|e| AppError::persistence("Failed to validate session.", e))?
        .ok_or_else(|| AppError::Authentication(INVALID_TOKEN.into()))?;

    if stored.is_expired(Utc::now()) {
        if let Err(e) = tokens::delete(&state.pool, token).await {
            error!("Failed to remove expired token for user {}: {}", stored.user_id, e);
        }
        info!("Token expired for user {}", stored.user_id);
        return Err(AppError::Authentication(INVALID_TOKEN.into()));
    }

    Ok(stored.user_id)
}

pub async fn logout(state: &AppState, token: &str) -> Result<(), AppError> {
    let user_id = authenticate(state, token).await?;
    tokens::delete(&state.pool, token)
        .await
        .map_err(|e| AppError::persistence("Failed to logout.", e))?;

    info!("User {} logged out", user_id);
    Ok(())
}
