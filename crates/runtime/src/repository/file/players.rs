//! File-based PlayerRepository implementation.

use std::future::Future;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use hp_content::PlayerRecord;
use tokio::fs;

use crate::repository::{PlayerRepository, RepositoryError, Result};

const FILE_EXTENSION: &str = "json";

/// Longest encoded name that still fits a 255-byte file name with the extension.
const MAX_STEM_LEN: usize = 240;

/// File-based implementation of PlayerRepository.
///
/// # File Format
///
/// Each player is stored as `{encoded name}.json` holding the full player
/// document in pretty-printed JSON. Bytes of the name outside `[A-Za-z0-9_-]`
/// are written as `%XX`, so any name maps to exactly one file. Names whose
/// encoding is longer than 240 bytes cannot be stored and are never found.
///
/// Every write goes to its own uniquely named temp file in `base_dir` and is
/// renamed into place, so concurrent saves of one player never share a temp
/// file; the last rename wins.
pub struct FilePlayerRepository {
    base_dir: PathBuf,
    timeout: Duration,
}

impl FilePlayerRepository {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Create a new file-based player repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self {
            base_dir,
            timeout: Self::DEFAULT_TIMEOUT,
        })
    }

    /// Bound every store call by `timeout` instead of the default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a player file, or `None` when the name is too long to
    /// be stored.
    fn player_path(&self, name: &str) -> Option<PathBuf> {
        let stem = encode_name(name);
        if stem.len() > MAX_STEM_LEN {
            return None;
        }
        Some(self.base_dir.join(format!("{stem}.{FILE_EXTENSION}")))
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>> + Send,
    {
        tokio::time::timeout(self.timeout, fut)
            .await
            .map_err(|_| RepositoryError::Timeout {
                operation,
                after: self.timeout,
            })?
    }

    async fn read_player(&self, name: &str) -> Result<Option<PlayerRecord>> {
        let Some(path) = self.player_path(name) else {
            return Ok(None);
        };

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if is_missing(&err) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let record: PlayerRecord =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::CorruptedData {
                name: name.to_owned(),
                reason: e.to_string(),
            })?;

        if record.name != name {
            return Err(RepositoryError::CorruptedData {
                name: name.to_owned(),
                reason: format!("file holds player {:?}", record.name),
            });
        }

        tracing::debug!("Loaded player {:?} from {}", name, path.display());

        Ok(Some(record))
    }

    async fn write_player(&self, record: &PlayerRecord) -> Result<()> {
        let path = self
            .player_path(&record.name)
            .ok_or_else(|| RepositoryError::NameTooLong {
                name: record.name.clone(),
            })?;

        let bytes = serde_json::to_vec_pretty(record)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        let base_dir = self.base_dir.clone();
        let target = path.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            // Write to a temp file private to this save
            let mut temp = tempfile::NamedTempFile::new_in(&base_dir)?;
            temp.write_all(&bytes)?;

            // Atomic rename
            temp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(RepositoryError::WriteTask)??;

        tracing::debug!("Saved player {:?} to {}", record.name, path.display());

        Ok(())
    }

    async fn read_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.base_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(stem) = filename
                    .strip_suffix(FILE_EXTENSION)
                    .and_then(|s| s.strip_suffix('.'))
                && let Some(name) = decode_name(stem)
            {
                names.push(name);
            }
        }

        names.sort_unstable();
        Ok(names)
    }
}

#[async_trait]
impl PlayerRepository for FilePlayerRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<PlayerRecord>> {
        self.bounded("find_by_name", self.read_player(name)).await
    }

    async fn save(&self, record: &PlayerRecord) -> Result<()> {
        self.bounded("save", self.write_player(record)).await
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        let Some(path) = self.player_path(name) else {
            return Ok(false);
        };
        self.bounded("exists", async move {
            match fs::try_exists(&path).await {
                Ok(exists) => Ok(exists),
                Err(err) if is_missing(&err) => Ok(false),
                Err(err) => Err(RepositoryError::Io(err)),
            }
        })
        .await
    }

    async fn list_names(&self) -> Result<Vec<String>> {
        self.bounded("list_names", self.read_names()).await
    }
}

/// Errors that mean "no such file" for lookups.
fn is_missing(err: &std::io::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::InvalidFilename)
}

fn encode_name(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

/// Inverse of [`encode_name`]; `None` for stems this repository did not write.
fn decode_name(stem: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(stem.len());
    let mut iter = stem.bytes();

    while let Some(byte) = iter.next() {
        if byte == b'%' {
            let hi = char::from(iter.next()?).to_digit(16)?;
            let lo = char::from(iter.next()?).to_digit(16)?;
            bytes.push((hi * 16 + lo) as u8);
        } else if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            bytes.push(byte);
        } else {
            return None;
        }
    }

    String::from_utf8(bytes).ok()
}
