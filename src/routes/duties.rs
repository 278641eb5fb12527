use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    db::DbPool,
    dto::duties::DutyPayload,
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Duty, DutySales},
    services::duty_service,
    validation,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_duties).post(register_duty))
        .route("/{id}", axum::routing::put(update_duty))
        .route("/{id}/sales", get(duty_sales))
}

#[utoipa::path(
    get,
    path = "/duty",
    responses(
        (status = 200, description = "List duties", body = Vec<Duty>),
    ),
    tag = "Duties"
)]
pub async fn list_duties(State(pool): State<DbPool>) -> AppResult<Json<Vec<Duty>>> {
    let duties = duty_service::list(&pool).await?;
    Ok(Json(duties))
}

#[utoipa::path(
    post,
    path = "/duty",
    request_body = DutyPayload,
    responses(
        (status = 200, description = "Duty registered", body = Duty),
        (status = 422, description = "Validation failure"),
    ),
    security(("bearer_auth" = [])),
    tag = "Duties"
)]
pub async fn register_duty(
    State(pool): State<DbPool>,
    _user: AuthUser,
    Json(payload): Json<DutyPayload>,
) -> AppResult<Json<Duty>> {
    validation::validate(&payload)?;
    let duty = payload
        .into_new()
        .ok_or_else(|| AppError::BadRequest("Invalid duty payload".into()))?;

    let duty = duty_service::register(&pool, duty).await?;
    Ok(Json(duty))
}

#[utoipa::path(
    put,
    path = "/duty/{id}",
    params(("id" = i32, Path, description = "Duty ID")),
    request_body = DutyPayload,
    responses(
        (status = 200, description = "Duty updated", body = Duty),
        (status = 404, description = "Duty not found"),
        (status = 422, description = "Validation failure"),
    ),
    security(("bearer_auth" = [])),
    tag = "Duties"
)]
pub async fn update_duty(
    State(pool): State<DbPool>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<DutyPayload>,
) -> AppResult<Json<Duty>> {
    validation::validate(&payload)?;
    let duty = payload
        .into_new()
        .ok_or_else(|| AppError::BadRequest("Invalid duty payload".into()))?;

    let duty = duty_service::update(&pool, id, duty).await?;
    Ok(Json(duty))
}

#[utoipa::path(
    get,
    path = "/duty/{id}/sales",
    params(("id" = i32, Path, description = "Duty ID")),
    responses(
        (status = 200, description = "Duty sales report", body = DutySales),
        (status = 404, description = "Duty not found"),
    ),
    tag = "Duties"
)]
pub async fn duty_sales(
    State(pool): State<DbPool>,
    Path(id): Path<i32>,
) -> AppResult<Json<DutySales>> {
    let report = duty_service::sales(&pool, id).await?;
    Ok(Json(report))
}
