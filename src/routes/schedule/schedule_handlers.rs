use actix_web::{web, HttpResponse};

use super::schedule_models::ScheduleQuery;
use crate::error::AppError;
use crate::routes::classes::classes_models::ClassSessionResponse;
use crate::services::schedule_service;
use crate::state::AppState;

// GET /api/schedule?date=DD-MM-YYYY
pub async fn get_schedule(
    state: web::Data<AppState>,
    query: web::Query<ScheduleQuery>,
) -> Result<HttpResponse, AppError> {
    let date = match query.date.as_deref() {
        Some(date) if !date.is_empty() => date,
        _ => {
            return Err(AppError::Validation(
                "Date query parameter is required (DD-MM-YYYY).".into(),
            ))
        }
    };

    let sessions = schedule_service::get_by_date(&state.pool, date).await?;
    let sessions: Vec<ClassSessionResponse> = sessions.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(sessions))
}
