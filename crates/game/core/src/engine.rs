//! Single entry point for HP modifications.
//!
//! Callers that hold a validated [`Modification`] run it through [`apply`] and
//! get back a [`Transition`]: the new state, whether anything changed, and a
//! per-kind report of what was applied. Only changed states need persisting.

use crate::combat::{
    DamageCategory, DamageReport, HealReport, TempHpGrant, apply_damage, apply_grant_temp_hp,
    apply_heal,
};
use crate::state::PlayerHpState;

/// A validated HP modification, without the player it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modification {
    Damage {
        amount: u32,
        category: DamageCategory,
    },
    Heal {
        amount: u32,
    },
    GrantTempHp {
        amount: u32,
    },
}

impl Modification {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Damage { .. } => "damage",
            Self::Heal { .. } => "heal",
            Self::GrantTempHp { .. } => "grant_temp_hp",
        }
    }
}

/// A modification addressed to a named player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModificationRequest {
    pub player_name: String,
    pub modification: Modification,
}

impl ModificationRequest {
    pub fn new(player_name: impl Into<String>, modification: Modification) -> Self {
        Self {
            player_name: player_name.into(),
            modification,
        }
    }

    pub fn damage(player_name: impl Into<String>, amount: u32, category: DamageCategory) -> Self {
        Self::new(player_name, Modification::Damage { amount, category })
    }

    pub fn heal(player_name: impl Into<String>, amount: u32) -> Self {
        Self::new(player_name, Modification::Heal { amount })
    }

    pub fn grant_temp_hp(player_name: impl Into<String>, amount: u32) -> Self {
        Self::new(player_name, Modification::GrantTempHp { amount })
    }
}

/// Result of one engine operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<R> {
    pub state: PlayerHpState,
    /// False when the state is identical to the input; no write is needed.
    pub changed: bool,
    pub report: R,
}

impl<R> Transition<R> {
    pub const fn new(state: PlayerHpState, changed: bool, report: R) -> Self {
        Self {
            state,
            changed,
            report,
        }
    }

    pub const fn unchanged(state: PlayerHpState, report: R) -> Self {
        Self::new(state, false, report)
    }

    pub fn map_report<T>(self, f: impl FnOnce(R) -> T) -> Transition<T> {
        Transition {
            state: self.state,
            changed: self.changed,
            report: f(self.report),
        }
    }
}

/// Per-kind report carried by [`apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Damage(DamageReport),
    Heal(HealReport),
    TempHp(TempHpGrant),
}

/// Run `modification` against `state`.
pub fn apply(state: PlayerHpState, modification: &Modification) -> Transition<Outcome> {
    match *modification {
        Modification::Damage { amount, category } => {
            apply_damage(state, amount, category).map_report(Outcome::Damage)
        }
        Modification::Heal { amount } => apply_heal(state, amount).map_report(Outcome::Heal),
        Modification::GrantTempHp { amount } => {
            apply_grant_temp_hp(state, amount).map_report(Outcome::TempHp)
        }
    }
}
