//! Nested configuration sections and their builders.
//!
//! Sections are a closed set: persistence (`model`) and mail delivery
//! (`mailer`). Each section value is plain data with serde derives so a
//! configuration can be exported or loaded from a config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Persistence adapter selection: adapter kind plus connection URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterSettings {
    pub kind: String,
    pub url: String,
}

/// The `model` (persistence) section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Selected persistence adapter, if any.
    #[serde(default)]
    pub adapter: Option<AdapterSettings>,
    /// Directory holding migration files.
    #[serde(default)]
    pub migrations: Option<PathBuf>,
    /// Path of the schema snapshot file.
    #[serde(default)]
    pub schema: Option<PathBuf>,
}

/// How outgoing mail is delivered.
///
/// Externally tagged so the TOML form is either a bare string
/// (`delivery = "sendmail"`) or a table (`[mailer.delivery.smtp]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    Smtp { address: String, port: u16 },
    Sendmail,
    /// Collect mail in memory instead of delivering; for test environments.
    Test,
}

/// The `mailer` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailerSettings {
    #[serde(default)]
    pub delivery: Option<DeliveryMethod>,
}

/// Builder for the `model` section.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    settings: ModelSettings,
}

impl ModelBuilder {
    /// Select the persistence adapter.
    pub fn adapter(&mut self, kind: impl Into<String>, url: impl Into<String>) -> &mut Self {
        self.settings.adapter = Some(AdapterSettings {
            kind: kind.into(),
            url: url.into(),
        });
        self
    }

    /// Set the migrations directory.
    pub fn migrations(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.settings.migrations = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the schema snapshot path.
    pub fn schema(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.settings.schema = Some(path.as_ref().to_path_buf());
        self
    }

    pub(crate) fn build(self) -> ModelSettings {
        self.settings
    }
}

/// Builder for the `mailer` section.
#[derive(Debug, Default)]
pub struct MailerBuilder {
    settings: MailerSettings,
}

impl MailerBuilder {
    /// Select the delivery method.
    pub fn delivery(&mut self, method: DeliveryMethod) -> &mut Self {
        self.settings.delivery = Some(method);
        self
    }

    pub(crate) fn build(self) -> MailerSettings {
        self.settings
    }
}
