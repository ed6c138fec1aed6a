use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

use crate::validator::Schedule;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ClassSession {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub professor_id: i64,
    pub session_type: String,
}

/// Fields of a session that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewClassSession {
    pub title: String,
    pub description: Option<String>,
    pub schedule: Schedule,
    pub professor_id: i64,
    pub session_type: String,
}

/// A partial update. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ClassSessionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub professor_id: Option<i64>,
    pub session_type: Option<String>,
}
