//! Player document loader.
//!
//! Loads one player per JSON file. Every document is mapped to an HP state at
//! load time so a malformed seed fails startup instead of the first request.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::records::PlayerRecord;

/// Loader for player documents from JSON files.
pub struct PlayerLoader;

impl PlayerLoader {
    /// Load a single player document.
    pub fn load(path: &Path) -> LoadResult<PlayerRecord> {
        let content = read_file(path)?;
        let record: PlayerRecord = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse player JSON {}: {}", path.display(), e))?;

        record
            .hp_state()
            .with_context(|| format!("Invalid HP data in {}", path.display()))?;

        Ok(record)
    }

    /// Load every `*.json` document in `dir`, in file-name order.
    ///
    /// Other files and subdirectories are skipped.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<PlayerRecord>> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read data directory {}", dir.display()))?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to list {}", dir.display()))?
                .path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut players = Vec::with_capacity(paths.len());
        for path in &paths {
            let record = Self::load(path)?;
            tracing::debug!(player = %record.name, path = %path.display(), "Loaded player document");
            players.push(record);
        }

        Ok(players)
    }
}
