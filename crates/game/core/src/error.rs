//! Errors raised by hp-core.
//!
//! The engine operations themselves are total over valid input and never
//! fail. The only fallible step is building a [`crate::PlayerHpState`] from
//! numbers that came from outside the engine (a store record, a test fixture).

use thiserror::Error;

/// A set of HP pools that violates the state invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HpStateError {
    #[error("current HP {current_hp} exceeds maximum HP {max_hp}")]
    CurrentExceedsMax { current_hp: u32, max_hp: u32 },
}
