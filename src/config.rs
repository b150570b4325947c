//! Configuration types.

use std::path::PathBuf;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Which profile store backend to wire up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-memory, nothing survives the process.
    Memory,
    /// Local libSQL database file.
    Local,
    /// Remote Jeevan backend over HTTP.
    Remote,
}

impl StoreBackend {
    /// Parse the `JEEVAN_STORE` value.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s {
            "memory" => Ok(Self::Memory),
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            other => Err(ConfigError::InvalidValue {
                key: "JEEVAN_STORE".to_string(),
                message: format!("unknown backend {other:?} (expected memory, local or remote)"),
            }),
        }
    }
}

/// Application configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: StoreBackend,
    /// Local database path (used by the `local` backend).
    pub db_path: PathBuf,
    /// Profile owner key.
    pub user_id: String,
    /// Backend base URL (required by the `remote` backend).
    pub api_url: Option<String>,
    /// Bearer token for the remote backend.
    pub api_token: Option<SecretString>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Local,
            db_path: PathBuf::from("./data/jeevan.db"),
            user_id: "default".to_string(),
            api_url: None,
            api_token: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from `JEEVAN_*` environment variables, falling
    /// back to defaults for everything except a remote backend's URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(backend) = std::env::var("JEEVAN_STORE") {
            config.backend = StoreBackend::parse(&backend)?;
        }
        if let Ok(path) = std::env::var("JEEVAN_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Ok(user_id) = std::env::var("JEEVAN_USER_ID") {
            config.user_id = user_id;
        }
        config.api_url = std::env::var("JEEVAN_API_URL").ok();
        config.api_token = std::env::var("JEEVAN_API_TOKEN")
            .ok()
            .map(SecretString::from);

        if config.backend == StoreBackend::Remote && config.api_url.is_none() {
            return Err(ConfigError::MissingEnvVar("JEEVAN_API_URL".to_string()));
        }

        Ok(config)
    }
}
