//! Deterministic HP rules for a tabletop player character.
//!
//! `hp-core` defines the canonical rules for damage (with resistance and
//! immunity), healing and temporary hit points, as pure functions over
//! [`PlayerHpState`]. It performs no I/O; the runtime and server crates load
//! and persist state around it.
pub mod combat;
pub mod engine;
pub mod error;
pub mod state;

pub use combat::{
    DamageCategory, DamageReport, Defense, DefenseKind, HealReport, TempHpGrant, apply_damage,
    apply_grant_temp_hp, apply_heal, effective_amount, resolve_modifier,
};
pub use engine::{Modification, ModificationRequest, Outcome, Transition, apply};
pub use error::HpStateError;
pub use state::PlayerHpState;
