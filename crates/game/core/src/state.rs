//! HP state of a single player.
//!
//! [`PlayerHpState`] is the plain value the rule engine operates on. It is
//! deliberately separate from whatever record shape the store persists, and it
//! can only be built through constructors that enforce
//! `current_hp <= max_hp`.

use crate::combat::{DamageCategory, Defense, DefenseKind};
use crate::error::HpStateError;

/// Hit-point pools and defenses of one player.
///
/// Invariants (hold after construction and after every engine operation):
/// - `current_hp <= max_hp`
/// - `temp_hp` is independent of `max_hp`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerHpState {
    max_hp: u32,
    current_hp: u32,
    temp_hp: u32,
    defenses: Vec<Defense>,
}

impl PlayerHpState {
    /// Build a state from raw pools, rejecting `current_hp > max_hp`.
    pub fn new(max_hp: u32, current_hp: u32, temp_hp: u32) -> Result<Self, HpStateError> {
        if current_hp > max_hp {
            return Err(HpStateError::CurrentExceedsMax { current_hp, max_hp });
        }

        Ok(Self {
            max_hp,
            current_hp,
            temp_hp,
            defenses: Vec::new(),
        })
    }

    /// A fresh player at full health with no temporary HP.
    pub const fn at_full(max_hp: u32) -> Self {
        Self {
            max_hp,
            current_hp: max_hp,
            temp_hp: 0,
            defenses: Vec::new(),
        }
    }

    pub fn with_defenses(mut self, defenses: impl IntoIterator<Item = Defense>) -> Self {
        self.defenses = defenses.into_iter().collect();
        self
    }

    pub fn with_defense(mut self, category: DamageCategory, kind: DefenseKind) -> Self {
        self.defenses.push(Defense::new(category, kind));
        self
    }

    pub const fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub const fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub const fn temp_hp(&self) -> u32 {
        self.temp_hp
    }

    pub fn defenses(&self) -> &[Defense] {
        &self.defenses
    }

    /// The three pools as a tuple, for change detection.
    pub(crate) const fn pools(&self) -> (u32, u32, u32) {
        (self.max_hp, self.current_hp, self.temp_hp)
    }

    pub(crate) fn set_current_hp(&mut self, current_hp: u32) {
        debug_assert!(current_hp <= self.max_hp);
        self.current_hp = current_hp;
    }

    pub(crate) fn set_temp_hp(&mut self, temp_hp: u32) {
        self.temp_hp = temp_hp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_current_above_max() {
        let err = PlayerHpState::new(20, 21, 0).unwrap_err();
        assert_eq!(
            err,
            HpStateError::CurrentExceedsMax {
                current_hp: 21,
                max_hp: 20
            }
        );
    }

    #[test]
    fn accepts_boundaries() {
        assert!(PlayerHpState::new(20, 20, 0).is_ok());
        assert!(PlayerHpState::new(20, 0, 100).is_ok());
        assert!(PlayerHpState::new(0, 0, 0).is_ok());
    }

    #[test]
    fn at_full_starts_without_temp_hp() {
        let state = PlayerHpState::at_full(25);
        assert_eq!(state.current_hp(), 25);
        assert_eq!(state.max_hp(), 25);
        assert_eq!(state.temp_hp(), 0);
        assert!(state.defenses().is_empty());
    }
}
