use axum::{Json, extract::State};

use crate::{
    db::DbPool,
    dto::auth::{LoginPayload, LoginResponse},
    error::{AppError, AppResult},
    services::auth_service,
    validation,
};

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "Unknown email"),
        (status = 422, description = "Validation failure"),
    ),
    tag = "Auth"
)]
pub async fn login(
    State(pool): State<DbPool>,
    Json(payload): Json<LoginPayload>,
) -> AppResult<Json<LoginResponse>> {
    validation::validate(&payload)?;
    let credentials = payload
        .into_credentials()
        .ok_or_else(|| AppError::BadRequest("Invalid login payload".into()))?;

    let response = auth_service::login(&pool, credentials).await?;
    Ok(Json(response))
}
