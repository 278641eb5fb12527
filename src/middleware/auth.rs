use axum::{extract::FromRequestParts, http::header};

use crate::{error::AppError, services::auth_service};

/// Extracted from the Authorization header on protected routes; carries the
/// authenticated user id recovered from the token subject.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .ok_or_else(|| {
                AppError::BadRequest("Missing or malformed Authorization header".into())
            })?;

        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| AppError::Internal(anyhow::anyhow!("JWT_SECRET is not set")))?;

        let claims = auth_service::decode_token(token, &secret)?;

        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| AppError::Unauthorized)?;

        Ok(AuthUser { user_id })
    }
}
