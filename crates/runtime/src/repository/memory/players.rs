//! In-memory PlayerRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use hp_content::PlayerRecord;

use crate::repository::{PlayerRepository, RepositoryError, Result};

/// In-memory implementation of PlayerRepository.
///
/// Stores player documents indexed by name. Contents are lost on restart.
pub struct InMemoryPlayerRepository {
    players: RwLock<HashMap<String, PlayerRecord>>,
}

impl InMemoryPlayerRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Create a repository pre-filled with `records`.
    pub fn with_players(records: impl IntoIterator<Item = PlayerRecord>) -> Self {
        let players = records
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect();
        Self {
            players: RwLock::new(players),
        }
    }
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<PlayerRecord>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.get(name).cloned())
    }

    async fn save(&self, record: &PlayerRecord) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.insert(record.name.clone(), record.clone());
        tracing::debug!(player = %record.name, "saved player in memory");
        Ok(())
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.contains_key(name))
    }

    async fn list_names(&self) -> Result<Vec<String>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut names: Vec<String> = players.keys().cloned().collect();
        names.sort_unstable();
        Ok(names)
    }

    async fn insert_if_absent(&self, record: &PlayerRecord) -> Result<bool> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if players.contains_key(&record.name) {
            return Ok(false);
        }
        players.insert(record.name.clone(), record.clone());
        Ok(true)
    }
}
