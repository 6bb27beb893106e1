//! HP modification endpoints.
//!
//! Each handler validates the raw body, then hands the request to the
//! service. Only the fields the client asked about are returned.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::AppState;
use crate::errors::{ApiError, ErrorBody, ValidationErrorBody};
use crate::validation;

type Body = Result<Json<Value>, JsonRejection>;

/// Body of `POST /damage`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DamageRequest {
    #[schema(example = "Briv")]
    pub player_name: String,
    #[schema(example = 10)]
    pub amount: u32,
    /// One of BLUDGEONING, PIERCING, SLASHING, FIRE, COLD, ACID, THUNDER,
    /// LIGHTNING, POISON, RADIANT, NECROTIC, PSYCHIC, FORCE.
    #[schema(example = "FIRE")]
    pub damage_type: String,
}

/// Body of `POST /heal` and `POST /tempHp`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AmountRequest {
    #[schema(example = "Briv")]
    pub player_name: String,
    #[schema(example = 5)]
    pub amount: u32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DamageResponse {
    pub current_hp: u32,
    pub temp_hp: u32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealResponse {
    pub current_hp: u32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TempHpResponse {
    pub temp_hp: u32,
    pub current_hp: u32,
}

/// Deal damage to a player, applying resistance or immunity first.
#[utoipa::path(
    post,
    path = "/damage",
    tag = "hp",
    request_body = DamageRequest,
    responses(
        (status = 200, description = "Damage applied", body = DamageResponse),
        (status = 400, description = "Invalid request body", body = ValidationErrorBody),
        (status = 404, description = "Player not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn damage(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<DamageResponse>, ApiError> {
    let Json(body) = body?;
    let request = validation::validate_damage(&body)?;

    let applied = state.service.modify(&request).await?;
    Ok(Json(DamageResponse {
        current_hp: applied.player.current_hp,
        temp_hp: applied.player.temp_hp,
    }))
}

/// Heal a player, up to their maximum HP.
#[utoipa::path(
    post,
    path = "/heal",
    tag = "hp",
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Healing applied", body = HealResponse),
        (status = 400, description = "Invalid request body", body = ValidationErrorBody),
        (status = 404, description = "Player not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn heal(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<HealResponse>, ApiError> {
    let Json(body) = body?;
    let request = validation::validate_heal(&body)?;

    let applied = state.service.modify(&request).await?;
    Ok(Json(HealResponse {
        current_hp: applied.player.current_hp,
    }))
}

/// Grant temporary HP. Ignored when the player already has some.
#[utoipa::path(
    post,
    path = "/tempHp",
    tag = "hp",
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Temporary HP after the grant", body = TempHpResponse),
        (status = 400, description = "Invalid request body", body = ValidationErrorBody),
        (status = 404, description = "Player not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn temp_hp(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<TempHpResponse>, ApiError> {
    let Json(body) = body?;
    let request = validation::validate_temp_hp(&body)?;

    let applied = state.service.modify(&request).await?;
    Ok(Json(TempHpResponse {
        temp_hp: applied.player.temp_hp,
        current_hp: applied.player.current_hp,
    }))
}
