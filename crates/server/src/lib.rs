//! HTTP front end for the player HP service.
//!
//! ```text
//! POST /damage   { playerName, amount, damageType } -> { currentHp, tempHp }
//! POST /heal     { playerName, amount }             -> { currentHp }
//! POST /tempHp   { playerName, amount }             -> { tempHp, currentHp }
//! GET  /players/{name}                              -> HP view
//! GET  /health
//! GET  /swagger                                     -> API docs UI
//! GET  /api-docs/openapi.json                       -> OpenAPI document
//! GET  /                                            -> redirect to /swagger
//! ```

pub mod config;
pub mod errors;
pub mod logging;
pub mod routes;
pub mod validation;

use axum::Router;
use axum::routing::{get, post};
use hp_runtime::HpService;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::{ServerConfig, StoreKind};
pub use errors::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: HpService,
}

impl AppState {
    pub fn new(service: HpService) -> Self {
        Self { service }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/damage", post(routes::damage))
        .route("/heal", post(routes::heal))
        .route("/tempHp", post(routes::temp_hp))
        .route("/players/{name}", get(routes::get_player))
        .with_state(state)
        .merge(
            SwaggerUi::new(routes::SWAGGER_PATH)
                .url(routes::OPENAPI_PATH, routes::ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
}
