//! Damage categories and damage application.

use super::defense::{DefenseKind, effective_amount, resolve_modifier};
use crate::engine::Transition;
use crate::state::PlayerHpState;

// ============================================================================
// Damage Category
// ============================================================================

/// Damage category, used to look up a player's defenses.
///
/// The wire and display spelling is the upper-case name (`FIRE`); parsing is
/// case-insensitive so stored lower-case defense entries resolve too.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::VariantNames,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum DamageCategory {
    Bludgeoning,
    Piercing,
    Slashing,
    Fire,
    Cold,
    Acid,
    Thunder,
    Lightning,
    Poison,
    Radiant,
    Necrotic,
    Psychic,
    Force,
}

// ============================================================================
// Damage Application
// ============================================================================

/// What a damage application actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    /// Damage as requested, before defenses.
    pub requested: u32,
    /// Defense that applied to the category, if any.
    pub modifier: Option<DefenseKind>,
    /// Damage after defenses.
    pub effective: u32,
    /// Taken off temporary HP.
    pub temp_hp_loss: u32,
    /// Taken off current HP.
    pub current_hp_loss: u32,
}

/// Apply `amount` damage of `category` to `state`.
///
/// # Order
///
/// ```text
/// effective       = defense(category).reduce(amount)   (or amount)
/// temp_hp_loss    = min(temp_hp, effective)
/// current_hp_loss = min(current_hp, effective - temp_hp_loss)
/// ```
///
/// Damage beyond `temp_hp + current_hp` is discarded. Current HP floors at 0
/// and there is no separate death or overkill signal.
pub fn apply_damage(
    mut state: PlayerHpState,
    amount: u32,
    category: DamageCategory,
) -> Transition<DamageReport> {
    let before = state.pools();

    let modifier = resolve_modifier(state.defenses(), category);
    let effective = effective_amount(state.defenses(), category, amount);

    let temp_hp_loss = state.temp_hp().min(effective);
    state.set_temp_hp(state.temp_hp() - temp_hp_loss);

    let remaining = effective - temp_hp_loss;
    let current_hp_loss = state.current_hp().min(remaining);
    state.set_current_hp(state.current_hp() - current_hp_loss);

    let changed = state.pools() != before;
    Transition::new(
        state,
        changed,
        DamageReport {
            requested: amount,
            modifier,
            effective,
            temp_hp_loss,
            current_hp_loss,
        },
    )
}
