use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::GenerationConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config/app.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub embedding: EmbeddingConfig,
    pub vector_store: VectorStoreConfig,
    pub cors: CorsConfig,
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
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    pub timeout_seconds: u64,
    pub generation: GenerationConfig,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            timeout_seconds: 60,
            generation: GenerationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub model: String,
    pub dimension: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "text-embedding-004".to_string(),
            dimension: 768,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VectorStoreConfig {
    pub default_top_k: usize,
}

impl Default for VectorStoreConfig {
    fn default() -> Self {
        Self { default_top_k: 3 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

/// Process-wide settings: YAML file first, environment variables on top.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub config: Config,
}

impl AppConfig {
    /// Loads `APP_CONFIG` (or `config/app.yaml` when present) and applies
    /// environment overrides. A missing default file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var("APP_CONFIG") {
            Ok(path) => Self::from_file(path)?.config,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?.config
            }
            Err(_) => Config::default(),
        };

        let mut app = Self { config };
        app.apply_env(|key| std::env::var(key).ok())?;
        Ok(app)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a defaulted struct.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(Self {
            config: serde_yaml::from_str(raw)?,
        })
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.config.server.host = host;
        }
        for key in ["PORT", "SERVER_PORT"] {
            if let Some(value) = lookup(key) {
                self.config.server.port = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnv { key, value })?;
            }
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.config.llm.model = model;
        }
        if let Some(model) = lookup("GEMINI_EMBEDDING_MODEL") {
            self.config.embedding.model = model;
        }
        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            self.config.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}
