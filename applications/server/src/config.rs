/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file, falling back to `config.toml`
    ///
    /// An explicitly named file must exist. Environment variables prefixed
    /// with `ROSTER_` override file values, using `__` between nested keys
    /// (`ROSTER_STORAGE__DATABASE_URL`).
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "server port must be non-zero (set ROSTER_SERVER__PORT)".to_string(),
            ));
        }

        if self.storage.database_url.trim().is_empty() {
            return Err(ServerError::Config(
                "database URL is required (set ROSTER_STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        if self.storage.max_connections == 0 {
            return Err(ServerError::Config(
                "max_connections must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        max_connections: default_max_connections(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/roster.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Serializes tests that read or write ROSTER_* variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.max_connections, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_database_url() {
        let mut config = ServerConfig::default();
        config.storage.database_url = "  ".to_string();
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn rejects_zero_port_and_pool() {
        let mut config = ServerConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.storage.max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_partial_file_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nport = 9001\n\n[storage]\nmax_connections = 2").unwrap();

        let config = ServerConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.max_connections, 2);
        assert_eq!(config.storage.database_url, "sqlite://./data/roster.db");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            ServerConfig::load_from(Some(&path)),
            Err(ServerError::Config(_))
        ));
    }

    #[test]
    fn environment_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("ROSTER_SERVER__PORT", "9123");
        std::env::set_var("ROSTER_STORAGE__DATABASE_URL", "sqlite://./env.db");

        let loaded = ServerConfig::load_from(None);

        std::env::remove_var("ROSTER_SERVER__PORT");
        std::env::remove_var("ROSTER_STORAGE__DATABASE_URL");

        let config = loaded.unwrap();
        assert_eq!(config.server.port, 9123);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.database_url, "sqlite://./env.db");
        assert_eq!(config.storage.max_connections, 5);
    }
}
