//! Temporary hit points.
//!
//! Temporary HP does not stack and does not refresh: a grant only lands when
//! the player has none. A player who still has any temporary HP keeps exactly
//! what they have, even if the new grant is larger.

use crate::engine::Transition;
use crate::state::PlayerHpState;

/// Result of a temporary HP grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TempHpGrant {
    /// The player had no temporary HP and now has `amount`.
    Granted { amount: u32 },
    /// The player already had `existing` temporary HP; the grant was ignored.
    Ignored { existing: u32 },
}

/// Grant `amount` temporary HP if the player currently has none.
///
/// `changed` is false when the grant was ignored, and also when a grant of 0
/// lands on a player with 0 (nothing to persist either way).
pub fn apply_grant_temp_hp(mut state: PlayerHpState, amount: u32) -> Transition<TempHpGrant> {
    let existing = state.temp_hp();
    if existing > 0 {
        return Transition::unchanged(state, TempHpGrant::Ignored { existing });
    }

    state.set_temp_hp(amount);
    Transition::new(state, amount > 0, TempHpGrant::Granted { amount })
}
