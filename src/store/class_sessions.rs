use chrono::NaiveDate;
use sqlx::{Executor, Sqlite};

use crate::models::class_session::{ClassSession, NewClassSession};

const COLUMNS: &str =
    "id, title, description, date, start_time, end_time, professor_id, session_type";

pub async fn insert<'e, E>(executor: E, session: &NewClassSession) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "INSERT INTO class_sessions
            (title, description, date, start_time, end_time, professor_id, session_type)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&session.title)
    .bind(&session.description)
    .bind(session.schedule.date)
    .bind(session.schedule.start_time)
    .bind(session.schedule.end_time)
    .bind(session.professor_id)
    .bind(&session.session_type)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn find<'e, E>(executor: E, id: i64) -> Result<Option<ClassSession>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, ClassSession>(&format!(
        "SELECT {COLUMNS} FROM class_sessions WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e, E>(executor: E) -> Result<Vec<ClassSession>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, ClassSession>(&format!(
        "SELECT {COLUMNS} FROM class_sessions ORDER BY id"
    ))
    .fetch_all(executor)
    .await
}

pub async fn list_by_date<'e, E>(
    executor: E,
    date: NaiveDate,
) -> Result<Vec<ClassSession>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, ClassSession>(&format!(
        "SELECT {COLUMNS} FROM class_sessions WHERE date = ? ORDER BY id"
    ))
    .bind(date)
    .fetch_all(executor)
    .await
}

/// Overwrites every mutable column of the stored row with `session`.
/// Returns false if no row has that id.
pub async fn update<'e, E>(executor: E, session: &ClassSession) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "UPDATE class_sessions
         SET title = ?, description = ?, date = ?, start_time = ?, end_time = ?,
             professor_id = ?, session_type = ?
         WHERE id = ?",
    )
    .bind(&session.title)
    .bind(&session.description)
    .bind(session.date)
    .bind(session.start_time)
    .bind(session.end_time)
    .bind(session.professor_id)
    .bind(&session.session_type)
    .bind(session.id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM class_sessions WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
