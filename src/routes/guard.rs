use actix_web::{http::header, HttpRequest};

use crate::error::AppError;
use crate::services::identity_service;
use crate::state::AppState;

pub const MISSING_TOKEN: &str = "Missing or malformed Authorization header.";

/// The token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Id of the user behind the request's bearer token.
pub async fn require_user(req: &HttpRequest, state: &AppState) -> Result<i64, AppError> {
    let token =
        bearer_token(req).ok_or_else(|| AppError::Authentication(MISSING_TOKEN.into()))?;
    identity_service::authenticate(state, token).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn token_of(value: &str) -> Option<String> {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, value))
            .to_http_request();
        bearer_token(&req).map(str::to_string)
    }

    #[test]
    fn reads_bearer_tokens() {
        assert_eq!(token_of("Bearer abc-123").as_deref(), Some("abc-123"));
        assert_eq!(token_of("bearer abc-123").as_deref(), Some("abc-123"));
    }

    #[test]
    fn rejects_other_schemes_and_empty_tokens() {
        assert_eq!(token_of("Basic dXNlcjpwYXNz"), None);
        assert_eq!(token_of("Bearer "), None);
        assert_eq!(token_of("Bearer"), None);
        assert!(bearer_token(&TestRequest::default().to_http_request()).is_none());
    }
}
