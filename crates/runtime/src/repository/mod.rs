//! Repository layer for player documents.
//!
//! Repositories hold the data that CHANGES while the service runs: the stored
//! player documents with their HP pools. Seed documents on disk are read by
//! `hp-content` loaders and pushed in through [`seed_players`].

mod error;
mod file;
mod memory;
mod seed;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FilePlayerRepository;
pub use memory::InMemoryPlayerRepository;
pub use seed::{SeedSummary, seed_players};
pub use traits::PlayerRepository;
