//! Player documents and loaders for seed data.
//!
//! This crate defines the on-disk/on-wire shape of a player document
//! ([`PlayerRecord`]) and the mapping between it and the rule engine's
//! [`hp_core::PlayerHpState`]. With the `loaders` feature it also reads seed
//! documents from a data directory:
//!
//! ```text
//! data_dir/
//! ├── briv.json
//! └── ...one JSON document per player
//! ```
//!
//! Records never reach the rule engine directly; stores map them at the
//! boundary.

pub mod records;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use records::{
    AbilityScores, ClassEntry, DefenseEntry, ItemEntry, ItemModifier, PlayerRecord, RecordError,
};

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, PlayerLoader};
