//! TOML config-file loading (`toml-config` feature, on by default).
//!
//! A `plinth.toml` declares the same shape as the builder DSL:
//!
//! ```toml
//! [[apps]]
//! name = "web"
//! at = "/"
//!
//! [[apps]]
//! name = "admin"
//! at = "/admin"
//!
//! [model.adapter]
//! kind = "postgres"
//! url = "postgres://localhost/app_development"
//!
//! [model]
//! migrations = "db/migrations"
//! schema = "db/schema.sql"
//!
//! [mailer]
//! delivery = "sendmail"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::config::builder::ConfigBuilder;
use crate::config::error::ConfigError;
use crate::config::sections::{MailerSettings, ModelSettings};

/// One `[[apps]]` entry: application name and mount path.
#[derive(Debug, Clone, Deserialize)]
pub struct MountEntry {
    pub name: String,
    pub at: String,
}

/// Deserialized contents of a `plinth.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub apps: Vec<MountEntry>,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub mailer: MailerSettings,
}

impl ConfigFile {
    /// Read and parse a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    /// Parse config-file contents. `path` is used in error reporting only.
    pub fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replay this file's declarations onto a builder, using the same DSL
    /// operations an embedding process would call directly.
    pub fn apply(&self, builder: &mut ConfigBuilder) {
        for entry in &self.apps {
            builder.mount(&entry.name, &entry.at);
        }
        if let Some(adapter) = &self.model.adapter {
            builder.model(|model| {
                model.adapter(&adapter.kind, &adapter.url);
            });
        }
        if let Some(migrations) = &self.model.migrations {
            builder.model(|model| {
                model.migrations(migrations);
            });
        }
        if let Some(schema) = &self.model.schema {
            builder.model(|model| {
                model.schema(schema);
            });
        }
        if let Some(delivery) = &self.mailer.delivery {
            builder.mailer(|mailer| {
                mailer.delivery(delivery.clone());
            });
        }
    }
}
