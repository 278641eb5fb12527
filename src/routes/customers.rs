use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    db::DbPool,
    dto::customers::CustomerPayload,
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Customer,
    services::customer_service,
    validation,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_customers).post(register_customer))
        .route(
            "/{id}",
            axum::routing::put(update_customer).delete(delete_customer),
        )
}

#[utoipa::path(
    get,
    path = "/customer",
    responses(
        (status = 200, description = "List customers", body = Vec<Customer>),
    ),
    tag = "Customers"
)]
pub async fn list_customers(State(pool): State<DbPool>) -> AppResult<Json<Vec<Customer>>> {
    let customers = customer_service::list(&pool).await?;
    Ok(Json(customers))
}

#[utoipa::path(
    post,
    path = "/customer",
    request_body = CustomerPayload,
    responses(
        (status = 200, description = "Customer registered", body = Customer),
        (status = 422, description = "Validation failure"),
    ),
    security(("bearer_auth" = [])),
    tag = "Customers"
)]
pub async fn register_customer(
    State(pool): State<DbPool>,
    _user: AuthUser,
    Json(payload): Json<CustomerPayload>,
) -> AppResult<Json<Customer>> {
    validation::validate(&payload)?;
    let customer = payload
        .into_new()
        .ok_or_else(|| AppError::BadRequest("Invalid customer payload".into()))?;

    let customer = customer_service::register(&pool, customer).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    put,
    path = "/customer/{id}",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = CustomerPayload,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 404, description = "Customer not found"),
        (status = 422, description = "Validation failure"),
    ),
    security(("bearer_auth" = [])),
    tag = "Customers"
)]
pub async fn update_customer(
    State(pool): State<DbPool>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<CustomerPayload>,
) -> AppResult<Json<Customer>> {
    validation::validate(&payload)?;
    let customer = payload
        .into_new()
        .ok_or_else(|| AppError::BadRequest("Invalid customer payload".into()))?;

    let customer = customer_service::update(&pool, id, customer).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    delete,
    path = "/customer/{id}",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 404, description = "Customer not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Customers"
)]
pub async fn delete_customer(
    State(pool): State<DbPool>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    customer_service::delete(&pool, id).await?;
    Ok(Json(serde_json::json!({})))
}
