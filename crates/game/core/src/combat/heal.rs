//! Healing.

use crate::engine::Transition;
use crate::state::PlayerHpState;

/// What a heal actually restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealReport {
    pub requested: u32,
    pub healed: u32,
}

/// Restore up to `amount` current HP, capped at maximum HP.
///
/// Temporary HP is untouched and healing never lowers current HP.
pub fn apply_heal(mut state: PlayerHpState, amount: u32) -> Transition<HealReport> {
    let before = state.current_hp();
    let healed_to = before.saturating_add(amount).min(state.max_hp());
    state.set_current_hp(healed_to);

    let healed = healed_to - before;
    Transition::new(
        state,
        healed > 0,
        HealReport {
            requested: amount,
            healed,
        },
    )
}
