//! HP modification rules.
//!
//! This module provides pure functions for changing a player's hit points.
//! All rules are deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `resolve_modifier`: Defense lookup for a damage category
//! - `apply_damage`: Defenses, then temporary HP, then current HP (floored at 0)
//! - `apply_heal`: Current HP restoration, capped at maximum
//! - `apply_grant_temp_hp`: Temporary HP, only when the player has none

pub mod damage;
pub mod defense;
pub mod heal;
pub mod temp_hp;

pub use damage::{DamageCategory, DamageReport, apply_damage};
pub use defense::{Defense, DefenseKind, effective_amount, resolve_modifier};
pub use heal::{HealReport, apply_heal};
pub use temp_hp::{TempHpGrant, apply_grant_temp_hp};
