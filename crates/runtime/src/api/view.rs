//! Read-side views of a player's HP.

use hp_core::{Defense, PlayerHpState};
use serde::Serialize;

/// Public HP fields of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHpView {
    pub name: String,
    pub max_hp: u32,
    pub current_hp: u32,
    pub temp_hp: u32,
    pub defenses: Vec<Defense>,
}

impl PlayerHpView {
    pub fn new(name: impl Into<String>, state: &PlayerHpState) -> Self {
        Self {
            name: name.into(),
            max_hp: state.max_hp(),
            current_hp: state.current_hp(),
            temp_hp: state.temp_hp(),
            defenses: state.defenses().to_vec(),
        }
    }
}

/// Result of one HP operation: the player afterwards, whether it was
/// persisted, and the engine's report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied<R> {
    pub player: PlayerHpView,
    pub changed: bool,
    pub report: R,
}
