//! Layered configuration: CLI flags, then environment, then
//! `~/.trivia/config.toml`, then built-in defaults.
//!
//! Flags and environment are merged by clap (`#[arg(env = ...)]`); this
//! module supplies the file layer and the defaults underneath.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use trivia_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use trivia_server::ServerConfig;

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriviaConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl TriviaConfig {
    /// Config file path: `$TRIVIA_CONFIG` or `~/.trivia/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("TRIVIA_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trivia/config.toml")
    }

    /// Load the default config file; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))
    }

    /// Pick the database URL from the flag/env value or the file.
    pub fn database_url(&self, from_args: Option<String>) -> Result<String> {
        from_args
            .or_else(|| self.database.url.clone())
            .with_context(|| {
                format!(
                    "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or [database].url in {}",
                    Self::config_path().display()
                )
            })
    }

    pub fn max_connections(&self, from_args: Option<u32>) -> u32 {
        from_args
            .or(self.database.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    pub fn server_config(&self, bind_from_args: Option<SocketAddr>) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: bind_from_args
                .or(self.server.bind)
                .unwrap_or(defaults.bind_addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = TriviaConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.database.url.is_none());
        assert_eq!(config.max_connections(None), DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.server_config(None).bind_addr.port(), 5000);
    }

    #[test]
    fn file_values_fill_gaps() {
        let file = write_config(
            r#"
            [server]
            bind = "0.0.0.0:8080"

            [database]
            url = "postgres://localhost/trivia"
            max_connections = 12
            "#,
        );
        let config = TriviaConfig::load_from(file.path()).unwrap();

        assert_eq!(config.server_config(None).bind_addr.port(), 8080);
        assert_eq!(config.max_connections(None), 12);
        assert_eq!(
            config.database_url(None).unwrap(),
            "postgres://localhost/trivia"
        );
    }

    #[test]
    fn args_override_file() {
        let file = write_config("[database]\nurl = \"postgres://file/trivia\"\n");
        let config = TriviaConfig::load_from(file.path()).unwrap();

        let url = config
            .database_url(Some("postgres://flag/trivia".into()))
            .unwrap();
        assert_eq!(url, "postgres://flag/trivia");

        let bind: SocketAddr = "127.0.0.1:9000".parse().unwrap();
        assert_eq!(config.server_config(Some(bind)).bind_addr, bind);
        assert_eq!(config.max_connections(Some(2)), 2);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = TriviaConfig::default().database_url(None).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL not set"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let file = write_config("[server]\nport = 5000\n");
        assert!(TriviaConfig::load_from(file.path()).is_err());
    }
}
