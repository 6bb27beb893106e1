//! File-based repository implementations.

mod players;

pub use players::FilePlayerRepository;
