use axum::Json;
use axum::extract::{Path, State};
use hp_runtime::PlayerHpView;

use crate::AppState;
use crate::errors::{ApiError, ErrorBody};

/// HP pools and defenses of one player.
#[utoipa::path(
    get,
    path = "/players/{name}",
    tag = "players",
    params(("name" = String, Path, description = "Exact player name")),
    responses(
        (status = 200, description = "Player HP view: name, maxHp, currentHp, tempHp, defenses"),
        (status = 404, description = "Player not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PlayerHpView>, ApiError> {
    let view = state.service.hp_view(&name).await?;
    Ok(Json(view))
}
