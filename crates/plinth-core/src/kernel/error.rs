//! # Plinth Core Kernel Errors
//!
//! [`Error`] aggregates the subsystem error types behind `#[from]`
//! conversions so kernel operations can use `?` across subsystem
//! boundaries. All structural variants indicate programmer-facing
//! misconfiguration rather than expected runtime conditions.

use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::error::ConfigError;
use crate::registry::error::RegistryError;

/// Top-level error type for engine operations.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Configuration holder or config-file error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Component registry or resolver error.
    #[error("component registry error: {0}")]
    Registry(#[from] RegistryError),

    /// The app facade could not compose a dispatcher from the registry.
    #[error("app facade error: {0}")]
    App(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

/// Shorthand for Result with the kernel error type.
pub type Result<T> = StdResult<T, Error>;

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}
