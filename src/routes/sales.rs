use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    db::DbPool,
    dto::sales::{SalePayload, SaleUpdatePayload},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{ConsolidatedDuties, Month, Sale},
    services::sale_service,
    validation,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", axum::routing::post(register_sale))
        .route("/{id}", axum::routing::put(update_sale).delete(delete_sale))
        .route("/months", get(list_months))
        .route("/{month}/{year}", get(month_sales))
}

#[utoipa::path(
    post,
    path = "/sale",
    request_body = SalePayload,
    responses(
        (status = 200, description = "Sale registered", body = Sale),
        (status = 422, description = "Validation failure"),
    ),
    security(("bearer_auth" = [])),
    tag = "Sales"
)]
pub async fn register_sale(
    State(pool): State<DbPool>,
    _user: AuthUser,
    Json(payload): Json<SalePayload>,
) -> AppResult<Json<Sale>> {
    validation::validate(&payload)?;
    let sale = payload
        .into_new()
        .ok_or_else(|| AppError::BadRequest("Invalid sale payload".into()))?;

    let sale = sale_service::register(&pool, sale).await?;
    Ok(Json(sale))
}

#[utoipa::path(
    put,
    path = "/sale/{id}",
    params(("id" = i32, Path, description = "Sale ID")),
    request_body = SaleUpdatePayload,
    responses(
        (status = 200, description = "Sale updated", body = Sale),
        (status = 404, description = "Sale not found"),
        (status = 422, description = "Validation failure"),
    ),
    security(("bearer_auth" = [])),
    tag = "Sales"
)]
pub async fn update_sale(
    State(pool): State<DbPool>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<SaleUpdatePayload>,
) -> AppResult<Json<Sale>> {
    validation::validate(&payload)?;
    let patch = payload
        .into_patch()
        .ok_or_else(|| AppError::BadRequest("Invalid sale payload".into()))?;

    let sale = sale_service::update(&pool, id, patch).await?;
    Ok(Json(sale))
}

#[utoipa::path(
    delete,
    path = "/sale/{id}",
    params(("id" = i32, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "Sale deleted"),
        (status = 404, description = "Sale not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Sales"
)]
pub async fn delete_sale(
    State(pool): State<DbPool>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    sale_service::delete(&pool, id).await?;
    Ok(Json(serde_json::json!({})))
}

#[utoipa::path(
    get,
    path = "/sale/months",
    responses(
        (status = 200, description = "Months with sales, most recent first", body = Vec<Month>),
    ),
    tag = "Sales"
)]
pub async fn list_months(State(pool): State<DbPool>) -> AppResult<Json<Vec<Month>>> {
    let months = sale_service::months(&pool).await?;
    Ok(Json(months))
}

#[utoipa::path(
    get,
    path = "/sale/{month}/{year}",
    params(
        ("month" = u32, Path, description = "Month number, 1-12"),
        ("year" = i32, Path, description = "Year"),
    ),
    responses(
        (status = 200, description = "Month sales consolidated per duty"),
    ),
    tag = "Sales"
)]
pub async fn month_sales(
    State(pool): State<DbPool>,
    Path((month, year)): Path<(u32, i32)>,
) -> AppResult<Json<ConsolidatedDuties>> {
    let consolidated = sale_service::month_sales(&pool, month, year).await?;
    Ok(Json(consolidated))
}
