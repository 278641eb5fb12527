use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("The specified resource was not found.")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid credentials.")]
    Unauthorized,

    #[error("The payload is invalid.")]
    Validation(BTreeMap<String, String>),

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorMessage {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // 422 carries the field -> message map as the whole body.
            AppError::Validation(fields) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(fields)).into_response()
            }
            AppError::NotFound => with_message(StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(message) => with_message(StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized => with_message(StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::DbError(err) => {
                tracing::error!(error = %err, "database failure");
                with_message(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal failure");
                with_message(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        }
    }
}

fn with_message(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorMessage { message })).into_response()
}

pub type AppResult<T> = Result<T, AppError>;
