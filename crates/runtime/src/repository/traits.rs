//! Repository contract for loading and saving player documents.

use async_trait::async_trait;
use hp_content::PlayerRecord;

use super::error::Result;

/// Repository for player documents, keyed by player name.
///
/// "Not found" is `Ok(None)`, never an error. Implementations make each call
/// atomic on its own, but there is no versioning between a `find_by_name`
/// and a later `save`: two writers racing on the same player resolve to
/// last-write-wins.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Load a player by exact name.
    async fn find_by_name(&self, name: &str) -> Result<Option<PlayerRecord>>;

    /// Insert or replace the player stored under `record.name`.
    async fn save(&self, record: &PlayerRecord) -> Result<()>;

    /// Check if a player exists
    async fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.find_by_name(name).await?.is_some())
    }

    /// List all stored player names, sorted.
    async fn list_names(&self) -> Result<Vec<String>>;

    /// Save `record` only if no player with that name exists yet.
    ///
    /// Returns `true` when the record was written.
    async fn insert_if_absent(&self, record: &PlayerRecord) -> Result<bool> {
        if self.exists(&record.name).await? {
            return Ok(false);
        }
        self.save(record).await?;
        Ok(true)
    }
}
