use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::class_session::ClassSession;
use crate::store::class_sessions;
use crate::validator::parse_date;

const READ_FAILED: &str = "An error occurred while reading class sessions.";

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<ClassSession>, AppError> {
    class_sessions::list(pool)
        .await
        .map_err(|e| AppError::persistence(READ_FAILED, e))
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<ClassSession, AppError> {
    class_sessions::find(pool, id)
        .await
        .map_err(|e| AppError::persistence(READ_FAILED, e))?
        .ok_or_else(|| AppError::NotFound("Class session not found.".into()))
}

/// Sessions held on the given `DD-MM-YYYY` date, in creation order.
pub async fn get_by_date(pool: &SqlitePool, date: &str) -> Result<Vec<ClassSession>, AppError> {
    let date = parse_date(date)
        .ok_or_else(|| AppError::Format("Invalid date format. Use DD-MM-YYYY.".into()))?;

    class_sessions::list_by_date(pool, date)
        .await
        .map_err(|e| AppError::persistence(READ_FAILED, e))
}
