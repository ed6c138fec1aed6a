use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::class_session::{ClassSession, ClassSessionPatch};
use crate::services::session_service::CreateClassSession;
use crate::validator::{DATE_FORMAT, TIME_FORMAT};

// Class session as returned to clients
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ClassSessionResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub professor_id: i64,
    pub session_type: String,
}

impl From<ClassSession> for ClassSessionResponse {
    fn from(session: ClassSession) -> Self {
        Self {
            id: session.id,
            title: session.title,
            description: session.description,
            date: session.date.format(DATE_FORMAT).to_string(),
            start_time: session.start_time.format(TIME_FORMAT).to_string(),
            end_time: session.end_time.format(TIME_FORMAT).to_string(),
            professor_id: session.professor_id,
            session_type: session.session_type,
        }
    }
}

// Create request; presence of each field is checked by hand
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CreateClassSessionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub professor_id: Option<i64>,
    pub session_type: Option<String>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("Missing required field: {}", field)))
}

impl TryFrom<CreateClassSessionRequest> for CreateClassSession {
    type Error = AppError;

    fn try_from(req: CreateClassSessionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required(req.title, "title")?,
            date: required(req.date, "date")?,
            start_time: required(req.start_time, "start_time")?,
            end_time: required(req.end_time, "end_time")?,
            professor_id: required(req.professor_id, "professor_id")?,
            session_type: required(req.session_type, "session_type")?,
            description: Some(req.description.unwrap_or_default()),
        })
    }
}

// Update request, every field optional
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct UpdateClassSessionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub professor_id: Option<i64>,
    pub session_type: Option<String>,
}

impl From<UpdateClassSessionRequest> for ClassSessionPatch {
    fn from(req: UpdateClassSessionRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            professor_id: req.professor_id,
            session_type: req.session_type,
        }
    }
}

#[derive(Serialize)]
pub struct SuccessResponse<T> {
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
pub struct IdData {
    pub id: i64,
}

#[derive(Serialize)]
pub struct EmptyData {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn response_uses_wire_formats() {
        let response = ClassSessionResponse::from(ClassSession {
            id: 3,
            title: "T".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            professor_id: 1,
            session_type: "class".to_string(),
        });
        assert_eq!(response.date, "05-03-2025");
        assert_eq!(response.start_time, "09:05");
        assert_eq!(response.end_time, "11:00");
    }

    #[test]
    fn first_missing_field_is_reported() {
        let req = CreateClassSessionRequest {
            title: Some("T".to_string()),
            start_time: Some("10:00".to_string()),
            professor_id: Some(1),
            ..Default::default()
        };
        let err = CreateClassSession::try_from(req).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: date");
    }

    #[test]
    fn description_is_optional() {
        let req: CreateClassSessionRequest = serde_json::from_value(serde_json::json!({
            "title": "T",
            "date": "25-03-2025",
            "start_time": "10:00",
            "end_time": "11:00",
            "professor_id": 1,
            "session_type": "class"
        }))
        .unwrap();
        let fields = CreateClassSession::try_from(req).unwrap();
        assert_eq!(fields.description.as_deref(), Some(""));
        assert_eq!(fields.professor_id, 1);
    }
}
