//! # configs
//!
//! Runtime settings for the bulletin-board server.
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. `config/default.toml`, then `config/local.toml` (both optional)
//! 3. `RB__`-prefixed environment variables, `__` separating nested keys
//!    (e.g. `RB__SERVER__PORT=9000`); a `.env` file is read into the
//!    environment first.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Reads `.env` from the working directory (or a parent) into the process
/// environment. Returns the file used, if any.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// `RB__SECTION__KEY` variables, e.g. `RB__SERVER__PORT=9000`.
fn environment() -> Environment {
    Environment::with_prefix("RB").separator("__").try_parsing(true)
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Worker threads; actix picks one per core when unset.
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub backend: StoreBackend,
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Default `EnvFilter` directive; `RUST_LOG` overrides it.
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Loads settings from the working directory and the environment.
    ///
    /// Call [`load_dotenv`] first if a `.env` file should take part.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name("config/local").required(false))
                .add_source(environment()),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let settings: Settings = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.backend", "sqlite")?
            .set_default("database.url", "sqlite://bulletinboard.db")?
            .set_default("database.max_connections", 5)?
            .set_default("log.level", "info")?
            .set_default("log.json", false)?
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "database.max_connections",
                reason: "must be at least 1".into(),
            });
        }
        if self.server.workers == Some(0) {
            return Err(ConfigError::Invalid {
                key: "server.workers",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}
