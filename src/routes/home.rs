use actix_web::error::{InternalError, PathError};
use actix_web::{http::header::ContentType, HttpRequest, HttpResponse, Responder};

use crate::error::{ErrorResponse, NOT_FOUND_MESSAGE};

const WELCOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Class Scheduler</title>
</head>
<body>
    <h1>Welcome to the Class Scheduler API</h1>
    <p>Register at <code>POST /auth/register</code>, log in at <code>POST /auth/login</code>,
    then manage sessions under <code>/api/classes</code>.</p>
    <p>Look up a day with <code>GET /api/schedule?date=DD-MM-YYYY</code>.</p>
</body>
</html>
"#;

pub async fn welcome() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(WELCOME_PAGE)
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse {
        error: NOT_FOUND_MESSAGE.into(),
    })
}

/// Path segments that do not parse (e.g. a non-numeric id) count as unmatched routes.
pub fn path_error(err: PathError, _: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::NotFound().json(ErrorResponse {
        error: NOT_FOUND_MESSAGE.into(),
    });
    InternalError::from_response(err, response).into()
}
