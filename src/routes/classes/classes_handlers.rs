use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use serde::de::DeserializeOwned;

use super::classes_models::{
    ClassSessionResponse, CreateClassSessionRequest, EmptyData, IdData, SuccessResponse,
    UpdateClassSessionRequest,
};
use crate::error::AppError;
use crate::routes::guard;
use crate::services::session_service::CreateClassSession;
use crate::services::{schedule_service, session_service};
use crate::state::AppState;

// Bodies are parsed only after the bearer token checks out
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e)))
}

pub async fn list_classes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let sessions = schedule_service::list_all(&state.pool).await?;
    let sessions: Vec<ClassSessionResponse> = sessions.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(sessions))
}

pub async fn get_class(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let session = schedule_service::get_by_id(&state.pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ClassSessionResponse::from(session)))
}

pub async fn create_class(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let user_id = guard::require_user(&req, &state).await?;
    let body: CreateClassSessionRequest = parse_body(&body)?;
    let fields = CreateClassSession::try_from(body)?;
    info!("User {} creating class session {:?}", user_id, fields.title);

    let id = session_service::create(&state.pool, fields).await?;
    Ok(HttpResponse::Created().json(SuccessResponse {
        message: "Class session created successfully.".into(),
        data: IdData { id },
    }))
}

pub async fn update_class(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let user_id = guard::require_user(&req, &state).await?;
    let patch: UpdateClassSessionRequest = parse_body(&body)?;
    let id = path.into_inner();
    info!("User {} updating class session {}", user_id, id);

    let id = session_service::update(&state.pool, id, patch.into()).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse {
        message: "Class session updated successfully.".into(),
        data: IdData { id },
    }))
}

pub async fn delete_class(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = guard::require_user(&req, &state).await?;
    let id = path.into_inner();
    info!("User {} deleting class session {}", user_id, id);

    session_service::delete(&state.pool, id).await?;
    Ok(HttpResponse::Ok().json(SuccessResponse {
        message: "Class session deleted successfully.".into(),
        data: EmptyData {},
    }))
}
