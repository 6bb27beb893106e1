//! HTTP handlers.

mod docs;
mod health;
mod hp;
mod players;

pub use docs::{ApiDoc, OPENAPI_PATH, SWAGGER_PATH};
pub use health::{health, index};
pub use hp::{AmountRequest, DamageRequest, damage, heal, temp_hp};
pub use players::get_player;
