//! OpenAPI description of the HTTP API.

use utoipa::OpenApi;

use super::{health, hp, players};
use crate::errors::{ErrorBody, ValidationErrorBody};
use crate::validation::FieldError;

pub const SWAGGER_PATH: &str = "/swagger";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Player HP Management API",
        description = "API for managing a player character's Hit Points (HP)"
    ),
    paths(
        hp::damage,
        hp::heal,
        hp::temp_hp,
        players::get_player,
        health::health
    ),
    components(schemas(
        hp::DamageRequest,
        hp::AmountRequest,
        hp::DamageResponse,
        hp::HealResponse,
        hp::TempHpResponse,
        ErrorBody,
        ValidationErrorBody,
        FieldError
    )),
    tags(
        (name = "hp", description = "Damage, healing and temporary HP"),
        (name = "players", description = "Read-only player lookup"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
