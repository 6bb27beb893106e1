//! Server configuration structures and loaders.
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use hp_runtime::FilePlayerRepository;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Which player store backs the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StoreKind {
    /// Lost on restart.
    #[default]
    Memory,
    /// One JSON document per player under `store_dir`.
    File,
}

/// Configuration required to run the HP server.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreKind,
    pub data_dir: PathBuf,
    pub store_dir: PathBuf,
    pub log_dir: PathBuf,
    pub seed: bool,
    /// Upper bound on each file store call.
    pub store_timeout: Duration,
}

impl ServerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HP_BIND_ADDR` - Listen address (default: 0.0.0.0:3000)
    /// - `HP_STORE` - `memory` or `file` (default: memory)
    /// - `HP_DATA_DIR` - Seed player documents (default: ./data)
    /// - `HP_STORE_DIR` - File store directory (default: platform data dir)
    /// - `HP_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `HP_SEED` - Seed the store at startup (default: true)
    /// - `HP_STORE_TIMEOUT_MS` - File store call timeout in milliseconds (default: 5000)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = read("HP_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("invalid HP_BIND_ADDR")?;

        let mut config = Self {
            bind_addr,
            ..Self::default()
        };

        if let Some(store) = parse(read("HP_STORE")) {
            config.store = store;
        }
        if let Some(dir) = read("HP_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = read("HP_STORE_DIR") {
            config.store_dir = PathBuf::from(dir);
        }
        if let Some(dir) = read("HP_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(seed) = parse(read("HP_SEED")) {
            config.seed = seed;
        }
        if let Some(millis) = parse::<u64>(read("HP_STORE_TIMEOUT_MS")) {
            config.store_timeout = Duration::from_millis(millis.max(1));
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            store: StoreKind::default(),
            data_dir: PathBuf::from("./data"),
            store_dir: data_dir().join("players"),
            log_dir: log_dir(),
            seed: true,
            store_timeout: FilePlayerRepository::DEFAULT_TIMEOUT,
        }
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

/// Platform data directory, e.g. `~/.local/share/hp-server` on Linux.
fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hp-server")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./store"))
}

/// Platform cache directory, e.g. `~/.cache/hp-server/logs` on Linux.
fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hp-server")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}
