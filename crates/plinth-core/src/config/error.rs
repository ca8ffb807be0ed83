//! Error types for the configuration layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the configuration holder and config-file loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The current configuration was read before any `configure` call
    /// completed. Fatal for every operation that depends on configuration.
    #[error("process is not configured; call configure() before reading the configuration")]
    NotConfigured,

    /// A config file could not be read.
    #[error("failed to read config file '{path}': {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file could not be parsed.
    #[cfg(feature = "toml-config")]
    #[error("failed to parse config file '{path}': {source}", path = .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration export failed to serialize.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
