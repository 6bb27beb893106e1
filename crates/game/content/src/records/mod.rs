//! Stored document shapes.

pub mod player;

pub use player::{
    AbilityScores, ClassEntry, DefenseEntry, ItemEntry, ItemModifier, PlayerRecord, RecordError,
};
