use actix_web::{error::InternalError, error::JsonPayloadError, web, HttpRequest, HttpResponse, ResponseError};
use log::info;

use super::auth_models::{CredentialsRequest, LoginResponse, MessageResponse};
use crate::error::AppError;
use crate::routes::guard;
use crate::services::identity_service;
use crate::state::AppState;

// Auth endpoints answer with {"message": ...} rather than {"error": ...}
fn message_response(err: AppError) -> HttpResponse {
    err.log_internal();
    HttpResponse::build(err.status_code()).json(MessageResponse {
        message: err.public_message(),
    })
}

pub fn json_error(err: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(MessageResponse {
        message: format!("Invalid request body: {}", err),
    });
    InternalError::from_response(err, response).into()
}

pub async fn register(
    state: web::Data<AppState>,
    req: web::Json<CredentialsRequest>,
) -> HttpResponse {
    let email = req.email.as_deref().unwrap_or_default();
    let password = req.password.as_deref().unwrap_or_default();
    info!("Received request to register user: {}", email);

    match identity_service::register(&state, email, password).await {
        Ok(_) => HttpResponse::Created().json(MessageResponse {
            message: "User registered successfully.".into(),
        }),
        Err(e) => message_response(e),
    }
}

pub async fn login(
    state: web::Data<AppState>,
    req: web::Json<CredentialsRequest>,
) -> HttpResponse {
    let email = req.email.as_deref().unwrap_or_default();
    let password = req.password.as_deref().unwrap_or_default();
    info!("Received login request for user: {}", email);

    match identity_service::login(&state, email, password).await {
        Ok(token) => HttpResponse::Ok().json(LoginResponse { token }),
        Err(e) => message_response(e),
    }
}

pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    let Some(token) = guard::bearer_token(&req) else {
        return message_response(AppError::Authentication(guard::MISSING_TOKEN.into()));
    };

    match identity_service::logout(&state, token).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Logout successful.".into(),
        }),
        Err(e) => message_response(e),
    }
}
