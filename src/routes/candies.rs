use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    db::DbPool,
    dto::candies::CandyPayload,
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Candy,
    services::candy_service,
    validation,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_candies).post(register_candy))
        .route(
            "/{id}",
            axum::routing::put(update_candy).delete(delete_candy),
        )
}

#[utoipa::path(
    get,
    path = "/candy",
    responses(
        (status = 200, description = "List candies", body = Vec<Candy>),
    ),
    tag = "Candies"
)]
pub async fn list_candies(State(pool): State<DbPool>) -> AppResult<Json<Vec<Candy>>> {
    let candies = candy_service::list(&pool).await?;
    Ok(Json(candies))
}

#[utoipa::path(
    post,
    path = "/candy",
    request_body = CandyPayload,
    responses(
        (status = 200, description = "Candy registered", body = Candy),
        (status = 422, description = "Validation failure"),
    ),
    security(("bearer_auth" = [])),
    tag = "Candies"
)]
pub async fn register_candy(
    State(pool): State<DbPool>,
    _user: AuthUser,
    Json(payload): Json<CandyPayload>,
) -> AppResult<Json<Candy>> {
    validation::validate(&payload)?;
    let candy = payload
        .into_new()
        .ok_or_else(|| AppError::BadRequest("Invalid candy payload".into()))?;

    let candy = candy_service::register(&pool, candy).await?;
    Ok(Json(candy))
}

#[utoipa::path(
    put,
    path = "/candy/{id}",
    params(("id" = i32, Path, description = "Candy ID")),
    request_body = CandyPayload,
    responses(
        (status = 200, description = "Candy updated", body = Candy),
        (status = 404, description = "Candy not found"),
        (status = 422, description = "Validation failure"),
    ),
    security(("bearer_auth" = [])),
    tag = "Candies"
)]
pub async fn update_candy(
    State(pool): State<DbPool>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<CandyPayload>,
) -> AppResult<Json<Candy>> {
    validation::validate(&payload)?;
    let candy = payload
        .into_new()
        .ok_or_else(|| AppError::BadRequest("Invalid candy payload".into()))?;

    let candy = candy_service::update(&pool, id, candy).await?;
    Ok(Json(candy))
}

#[utoipa::path(
    delete,
    path = "/candy/{id}",
    params(("id" = i32, Path, description = "Candy ID")),
    responses(
        (status = 200, description = "Candy deleted"),
        (status = 404, description = "Candy not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Candies"
)]
pub async fn delete_candy(
    State(pool): State<DbPool>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    candy_service::delete(&pool, id).await?;
    Ok(Json(serde_json::json!({})))
}
