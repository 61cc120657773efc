//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Deduplication behavior settings
    #[serde(default)]
    pub dedupe: DedupeConfig,

    /// Shared membership store connection settings
    #[serde(default)]
    pub redis: RedisConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.dedupe.compression_level > 9 {
            return Err(AppError::config(format!(
                "dedupe.compression_level must be 0-9, got {}",
                self.dedupe.compression_level
            )));
        }
        if self.redis.host.trim().is_empty() {
            return Err(AppError::config("redis.host is empty"));
        }
        if self.redis.port == 0 {
            return Err(AppError::config("redis.port must be non-zero"));
        }
        if self.redis.namespace.trim().is_empty() {
            return Err(AppError::config("redis.namespace is empty"));
        }
        Ok(())
    }
}

/// What the deduplication key is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyMode {
    /// Key over the cleaned URL and the content digest. A page and its
    /// mirror on another host are distinct documents.
    #[default]
    UrlAndContent,
    /// Key over the content digest alone, collapsing mirrored copies.
    ContentOnly,
}

/// Deduplication pass settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupeConfig {
    /// Key derivation mode
    #[serde(default)]
    pub key: KeyMode,

    /// Gzip compression level for the output stream (0-9)
    #[serde(default = "defaults::compression_level")]
    pub compression_level: u32,
}

impl Default for DedupeConfig {
    fn default() -> Self {
        Self {
            key: KeyMode::default(),
            compression_level: defaults::compression_level(),
        }
    }
}

/// Connection settings for the shared Redis membership store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis server hostname
    #[serde(default = "defaults::redis_host")]
    pub host: String,

    /// Redis server port
    #[serde(default = "defaults::redis_port")]
    pub port: u16,

    /// Root namespace under which batch key sets live
    #[serde(default = "defaults::redis_namespace")]
    pub namespace: String,
}

impl RedisConfig {
    /// Connection URL for the configured server.
    pub fn url(&self) -> String {
        format!("redis://{}:{}/", self.host, self.port)
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: defaults::redis_host(),
            port: defaults::redis_port(),
            namespace: defaults::redis_namespace(),
        }
    }
}

mod defaults {
    pub fn compression_level() -> u32 {
        4
    }

    pub fn redis_host() -> String {
        "localhost".to_string()
    }

    pub fn redis_port() -> u16 {
        6379
    }

    pub fn redis_namespace() -> String {
        "dedupe".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dedupe.key, KeyMode::UrlAndContent);
        assert_eq!(config.dedupe.compression_level, 4);
        assert_eq!(config.redis.url(), "redis://localhost:6379/");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.dedupe.compression_level = 10;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.redis.host = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.redis.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.redis.namespace = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [redis]
            host = "redis.internal"
            "#,
        )
        .unwrap();
        assert_eq!(config.redis.host, "redis.internal");
        assert_eq!(config.redis.port, 6379);
        assert_eq!(config.dedupe.compression_level, 4);
    }

    #[test]
    fn test_key_mode_parses_from_kebab_case() {
        let config: Config = toml::from_str(
            r#"
            [dedupe]
            key = "content-only"
            "#,
        )
        .unwrap();
        assert_eq!(config.dedupe.key, KeyMode::ContentOnly);
    }
}
