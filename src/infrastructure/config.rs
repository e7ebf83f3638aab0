use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::application::Responses;
use crate::domain::{scoring::DEFAULT_MIN_TERM_LENGTH, DomainError};

pub const DEFAULT_CONFIG_PATH: &str = "config/app.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub config: Config,
    pub responses: Responses,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub retrieval: RetrievalConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub top_k: usize,
    /// Query words this long or shorter are ignored.
    pub min_term_length: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
        }
    }
}

/// Where the host keeps its snapshots. No directory means memory only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Reads `CONFIG_PATH` (or `config/app.yaml`), then applies env overrides.
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, DomainError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::load`], resolving variables through `lookup`.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let path = lookup("CONFIG_PATH").unwrap_or_else(|| DEFAULT_CONFIG_PATH.into());
        let path = Path::new(&path);

        let mut config = if path.exists() {
            Self::from_path(path)?
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };

        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, DomainError> {
        serde_yaml::from_str(raw).map_err(|e| DomainError::config(e.to_string()))
    }

    /// Applies `SERVER_HOST`, `SERVER_PORT` and `DATA_DIR` on top of the file values.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), DomainError> {
        if let Some(host) = lookup("SERVER_HOST") {
            self.config.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.config.server.port = port
                .parse()
                .map_err(|_| DomainError::config(format!("invalid SERVER_PORT: {port}")))?;
        }
        if let Some(dir) = lookup("DATA_DIR") {
            self.config.storage.data_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.config.retrieval.top_k == 0 {
            return Err(DomainError::validation("retrieval.top_k must be at least 1"));
        }
        if self.responses.fallback.trim().is_empty() {
            return Err(DomainError::validation("responses.fallback must not be empty"));
        }
        Ok(())
    }
}
