use log::{error, info};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::error::AppError;
use crate::models::class_session::{ClassSession, ClassSessionPatch, NewClassSession};
use crate::store::class_sessions;
use crate::validator::{self, ScheduleError, DATE_FORMAT, TIME_FORMAT};

const CREATE_FAILED: &str = "An error occurred while creating the class session.";
const UPDATE_FAILED: &str = "An error occurred while updating the class session.";
const DELETE_FAILED: &str = "An error occurred while deleting the class session.";

/// Raw fields of a session to create, as received from the client.
#[derive(Debug, Clone)]
pub struct CreateClassSession {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub professor_id: i64,
    pub session_type: String,
}

pub async fn create(pool: &SqlitePool, fields: CreateClassSession) -> Result<i64, AppError> {
    let schedule = validator::validate(
        &fields.session_type,
        &fields.date,
        &fields.start_time,
        &fields.end_time,
    )?;

    let session = NewClassSession {
        title: fields.title,
        description: fields.description,
        schedule,
        professor_id: fields.professor_id,
        session_type: fields.session_type,
    };

    let mut tx = begin(pool, CREATE_FAILED).await?;
    let id = match class_sessions::insert(&mut *tx, &session).await {
        Ok(id) => id,
        Err(e) => {
            rollback(tx).await;
            return Err(AppError::persistence(CREATE_FAILED, e));
        }
    };
    commit(tx, CREATE_FAILED).await?;

    info!("Class session {} created ({} on {})", id, session.session_type, session.schedule.date);
    Ok(id)
}

/// Loads the session, merges `patch` over it and re-validates the merged
/// schedule. Nothing is written unless the merged record is valid.
pub async fn update(pool: &SqlitePool, id: i64, patch: ClassSessionPatch) -> Result<i64, AppError> {
    let mut tx = begin(pool, UPDATE_FAILED).await?;

    let current = match class_sessions::find(&mut *tx, id).await {
        Ok(Some(current)) => current,
        Ok(None) => {
            rollback(tx).await;
            return Err(AppError::NotFound("Class session not found for update.".into()));
        }
        Err(e) => {
            rollback(tx).await;
            return Err(AppError::persistence(UPDATE_FAILED, e));
        }
    };

    let updated = match apply_patch(&current, patch) {
        Ok(updated) => updated,
        Err(e) => {
            rollback(tx).await;
            return Err(e.into());
        }
    };

    if let Err(e) = class_sessions::update(&mut *tx, &updated).await {
        rollback(tx).await;
        return Err(AppError::persistence(UPDATE_FAILED, e));
    }
    commit(tx, UPDATE_FAILED).await?;

    info!("Class session {} updated", id);
    Ok(id)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let mut tx = begin(pool, DELETE_FAILED).await?;

    match class_sessions::delete(&mut *tx, id).await {
        Ok(true) => {}
        Ok(false) => {
            rollback(tx).await;
            return Err(AppError::NotFound("Class session not found for deletion.".into()));
        }
        Err(e) => {
            rollback(tx).await;
            return Err(AppError::persistence(DELETE_FAILED, e));
        }
    }
    commit(tx, DELETE_FAILED).await?;

    info!("Class session {} deleted", id);
    Ok(())
}

/// The record that results from applying `patch` to `current`, provided its
/// schedule passes validation. Unpatched date and times are rendered back to
/// their wire format so they are checked exactly like client input.
pub fn apply_patch(
    current: &ClassSession,
    patch: ClassSessionPatch,
) -> Result<ClassSession, ScheduleError> {
    let date = patch
        .date
        .unwrap_or_else(|| current.date.format(DATE_FORMAT).to_string());
    let start_time = patch
        .start_time
        .unwrap_or_else(|| current.start_time.format(TIME_FORMAT).to_string());
    let end_time = patch
        .end_time
        .unwrap_or_else(|| current.end_time.format(TIME_FORMAT).to_string());
    let session_type = patch
        .session_type
        .unwrap_or_else(|| current.session_type.clone());

    let schedule = validator::validate(&session_type, &date, &start_time, &end_time)?;

    Ok(ClassSession {
        id: current.id,
        title: patch.title.unwrap_or_else(|| current.title.clone()),
        description: patch.description.or_else(|| current.description.clone()),
        date: schedule.date,
        start_time: schedule.start_time,
        end_time: schedule.end_time,
        professor_id: patch.professor_id.unwrap_or(current.professor_id),
        session_type,
    })
}

async fn begin(
    pool: &SqlitePool,
    message: &'static str,
) -> Result<Transaction<'static, Sqlite>, AppError> {
    pool.begin().await.map_err(|e| {
        error!("Failed to start a transaction: {}", e);
        AppError::persistence(message, e)
    })
}

async fn commit(tx: Transaction<'_, Sqlite>, message: &'static str) -> Result<(), AppError> {
    tx.commit().await.map_err(|e| {
        error!("Failed to commit transaction: {}", e);
        AppError::persistence(message, e)
    })
}

async fn rollback(tx: Transaction<'_, Sqlite>) {
    if let Err(e) = tx.rollback().await {
        error!("Failed to roll back transaction: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn stored() -> ClassSession {
        ClassSession {
            id: 7,
            title: "Original".to_string(),
            description: Some("Intro".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 3, 25).unwrap(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            professor_id: 1,
            session_type: "class".to_string(),
        }
    }

    #[test]
    fn title_only_patch_keeps_schedule() {
        let patch = ClassSessionPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let updated = apply_patch(&stored(), patch).unwrap();
        assert_eq!(
            updated,
            ClassSession {
                title: "Renamed".to_string(),
                ..stored()
            }
        );
    }

    #[test]
    fn patch_is_validated_against_merged_values() {
        // Moving only the type to "qa" leaves the Tuesday date in place.
        let patch = ClassSessionPatch {
            session_type: Some("qa".to_string()),
            ..Default::default()
        };
        assert_eq!(
            apply_patch(&stored(), patch),
            Err(ScheduleError::QaWrongDay)
        );

        let patch = ClassSessionPatch {
            end_time: Some("12:30".to_string()),
            ..Default::default()
        };
        assert_eq!(
            apply_patch(&stored(), patch),
            Err(ScheduleError::ClassOutsideWindow)
        );
    }

    #[test]
    fn full_patch_replaces_every_field() {
        let patch = ClassSessionPatch {
            title: Some("Demo day".to_string()),
            description: Some("Projects".to_string()),
            date: Some("28-03-2025".to_string()),
            start_time: Some("15:00".to_string()),
            end_time: Some("17:00".to_string()),
            professor_id: Some(2),
            session_type: Some("demo".to_string()),
        };
        let updated = apply_patch(&stored(), patch).unwrap();
        assert_eq!(updated.id, 7);
        assert_eq!(updated.date, NaiveDate::from_ymd_opt(2025, 3, 28).unwrap());
        assert_eq!(updated.start_time, NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert_eq!(updated.professor_id, 2);
        assert_eq!(updated.session_type, "demo");
        assert_eq!(updated.description.as_deref(), Some("Projects"));
    }

    #[test]
    fn malformed_patch_date_is_a_format_error() {
        let patch = ClassSessionPatch {
            date: Some("2025-03-26".to_string()),
            ..Default::default()
        };
        assert_eq!(
            apply_patch(&stored(), patch),
            Err(ScheduleError::InvalidFormat)
        );
    }
}
