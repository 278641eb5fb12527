use axum::{
    Router,
    routing::{get, post},
};

use crate::db::DbPool;

pub mod auth;
pub mod candies;
pub mod customers;
pub mod doc;
pub mod duties;
pub mod ping;
pub mod sales;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<DbPool> {
    Router::new()
        .route("/ping", get(ping::ping))
        .route("/login", post(auth::login))
        .nest("/customer", customers::router())
        .nest("/duty", duties::router())
        .nest("/candy", candies::router())
        .nest("/sale", sales::router())
}
