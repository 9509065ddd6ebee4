//! Server configuration.
//!
//! Defaults match the classic single-process layout: bind `127.0.0.1:8888`,
//! backlog 5, one 1024-byte receive per connection. A YAML file named by
//! `TINYHTTPD_CONFIG` may override any subset of fields, and `LISTEN`
//! overrides the bind address last.

use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming a YAML config file.
pub const CONFIG_ENV: &str = "TINYHTTPD_CONFIG";

/// Environment variable overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub headers: HeadersConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1:8888")
    pub listen_addr: String,
    /// Listen backlog passed to `listen(2)`
    pub backlog: u32,
    /// Upper bound for the single receive per connection. Longer requests
    /// are truncated.
    pub read_buffer_size: usize,
    /// Receive timeout in milliseconds; `None` waits forever.
    pub read_timeout_ms: Option<u64>,
    /// Service connections on their own tasks instead of one at a time.
    pub concurrent: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8888".to_string(),
            backlog: 5,
            read_buffer_size: 1024,
            read_timeout_ms: None,
            concurrent: false,
        }
    }
}

impl ServerConfig {
    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory static resources are resolved against
    pub root: PathBuf,
    /// Resource served when the target is empty or only slashes
    pub index: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            index: "index.html".to_string(),
        }
    }
}

/// Values for the base header table present on every response.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeadersConfig {
    pub server: String,
    pub content_type: String,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            server: "The Ultimate Super Server".to_string(),
            content_type: "text/html".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from `TINYHTTPD_CONFIG` (if set), then applies
    /// the `LISTEN` override.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path))?,
            None => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(raw)?;
        if cfg.server.read_buffer_size == 0 {
            anyhow::bail!("server.read_buffer_size must be greater than zero");
        }
        Ok(cfg)
    }
}
