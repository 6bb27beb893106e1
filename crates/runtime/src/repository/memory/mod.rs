//! In-memory repository implementations.

mod players;

pub use players::InMemoryPlayerRepository;
