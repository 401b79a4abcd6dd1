use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookshelf.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Route serving both GraphQL POSTs and the explorer page
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_path() -> String {
    "/graphql".to_string()
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Load the sample authors and books at startup
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

impl BookshelfConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BookshelfConfig = toml::from_str(&content)?;
        if !config.server.path.starts_with('/') {
            return Err(BookshelfError::Config(format!(
                "server.path must start with '/', got '{}'",
                config.server.path
            )));
        }
        Ok(config)
    }

    /// Load from an explicit path, or search upward from `start_path`.
    /// Falls back to defaults when no config file exists.
    pub fn discover(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BookshelfConfig::default();
        assert_eq!(config.server.address(), "127.0.0.1:5000");
        assert_eq!(config.server.path, "/graphql");
        assert!(config.server.graphiql);
        assert!(config.store.seed);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server]\nport = 8080\n\n[store]\nseed = false\n").unwrap();

        let config = BookshelfConfig::load(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.store.seed);
    }

    #[test]
    fn test_save_then_discover_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = BookshelfConfig::default();
        config.server.port = 6000;
        config.save(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = BookshelfConfig::discover(None, &nested).unwrap();
        assert_eq!(found.server.port, 6000);
    }

    #[test]
    fn test_rejects_relative_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server]\npath = \"graphql\"\n").unwrap();

        let err = BookshelfConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("server.path"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[server\nport = ").unwrap();

        assert!(matches!(
            BookshelfConfig::load(&path),
            Err(BookshelfError::TomlDe(_))
        ));
    }
}
