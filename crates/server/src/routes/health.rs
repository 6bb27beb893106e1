use axum::Json;
use axum::response::Redirect;
use serde_json::{Value, json};

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true, "service": env!("CARGO_PKG_NAME") }))
}

/// `GET /` sends browsers to the API docs.
pub async fn index() -> Redirect {
    Redirect::to(super::docs::SWAGGER_PATH)
}
