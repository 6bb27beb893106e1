//! Content factory for loading seed data from a data directory.

use std::path::{Path, PathBuf};

use crate::loaders::{LoadResult, PlayerLoader};
use crate::records::PlayerRecord;

/// Content factory that loads seed content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── briv.json
/// └── ...
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load every player document in the data directory.
    pub fn load_players(&self) -> LoadResult<Vec<PlayerRecord>> {
        PlayerLoader::load_dir(&self.data_dir)
    }
}
