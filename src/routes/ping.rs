#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "OK", body = String),
    ),
    tag = "Health"
)]
pub async fn ping() -> &'static str {
    "pong"
}
