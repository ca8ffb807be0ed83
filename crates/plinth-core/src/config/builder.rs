//! The configuration builder DSL and the immutable value it produces.

use std::sync::Arc;

use serde::Serialize;

use crate::config::error::ConfigError;
use crate::config::sections::{MailerBuilder, MailerSettings, ModelBuilder, ModelSettings};

/// Per-application settings: the same nested sections as the global
/// configuration, scoped to one mounted application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppSettings {
    pub model: ModelSettings,
    pub mailer: MailerSettings,
}

/// Builder for [`AppSettings`], used by [`ConfigBuilder::mount_with`].
#[derive(Debug, Default)]
pub struct AppSettingsBuilder {
    model: ModelBuilder,
    mailer: MailerBuilder,
}

impl AppSettingsBuilder {
    /// Configure this application's `model` section.
    pub fn model(&mut self, section: impl FnOnce(&mut ModelBuilder)) -> &mut Self {
        section(&mut self.model);
        self
    }

    /// Configure this application's `mailer` section.
    pub fn mailer(&mut self, section: impl FnOnce(&mut MailerBuilder)) -> &mut Self {
        section(&mut self.mailer);
        self
    }

    fn build(self) -> AppSettings {
        AppSettings {
            model: self.model.build(),
            mailer: self.mailer.build(),
        }
    }
}

/// A named sub-application attached to a mount path prefix.
///
/// Owned by [`GlobalConfiguration`]; resolved per-application configuration
/// components share it by reference rather than copying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountedApp {
    name: String,
    mount_path: String,
    settings: AppSettings,
}

impl MountedApp {
    /// The application's name, also the stem of its component name
    /// (`"<name>.configuration"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized mount path prefix (leading `/`, no trailing `/` except
    /// for the root mount).
    pub fn mount_path(&self) -> &str {
        &self.mount_path
    }

    /// This application's nested settings.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }
}

/// Immutable process-wide configuration value.
///
/// Built once by [`ConfigBuilder::build`] and installed through
/// [`ConfigHolder::configure`]; never mutated afterwards.
///
/// [`ConfigHolder::configure`]: crate::config::ConfigHolder::configure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalConfiguration {
    apps: Vec<Arc<MountedApp>>,
    model: ModelSettings,
    mailer: MailerSettings,
}

impl GlobalConfiguration {
    /// Mounted applications in declaration order.
    pub fn apps(&self) -> &[Arc<MountedApp>] {
        &self.apps
    }

    /// Look up a mounted application by name.
    pub fn app(&self, name: &str) -> Option<&Arc<MountedApp>> {
        self.apps.iter().find(|app| app.name() == name)
    }

    /// The global `model` section.
    pub fn model(&self) -> &ModelSettings {
        &self.model
    }

    /// The global `mailer` section.
    pub fn mailer(&self) -> &MailerSettings {
        &self.mailer
    }

    /// Export as pretty-printed JSON, for diagnostics and the CLI.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder-style block target for `configure`.
///
/// The recognized operations are a closed set: [`mount`](Self::mount) /
/// [`mount_with`](Self::mount_with) plus the nested section builders
/// [`model`](Self::model) and [`mailer`](Self::mailer). Accumulates into an
/// immutable [`GlobalConfiguration`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    apps: Vec<MountedApp>,
    model: ModelBuilder,
    mailer: MailerBuilder,
}

impl ConfigBuilder {
    /// Mount an application at a path prefix with default settings.
    ///
    /// Re-mounting a name replaces the earlier entry (its position in the
    /// declaration order is kept).
    pub fn mount(&mut self, name: impl Into<String>, at_path: impl Into<String>) -> &mut Self {
        self.mount_with(name, at_path, |_| {})
    }

    /// Mount an application and configure its own nested settings.
    pub fn mount_with(
        &mut self,
        name: impl Into<String>,
        at_path: impl Into<String>,
        settings: impl FnOnce(&mut AppSettingsBuilder),
    ) -> &mut Self {
        let mut builder = AppSettingsBuilder::default();
        settings(&mut builder);
        let app = MountedApp {
            name: name.into(),
            mount_path: normalize_mount_path(&at_path.into()),
            settings: builder.build(),
        };
        match self.apps.iter_mut().find(|existing| existing.name == app.name) {
            Some(existing) => *existing = app,
            None => self.apps.push(app),
        }
        self
    }

    /// Configure the global `model` section.
    pub fn model(&mut self, section: impl FnOnce(&mut ModelBuilder)) -> &mut Self {
        section(&mut self.model);
        self
    }

    /// Configure the global `mailer` section.
    pub fn mailer(&mut self, section: impl FnOnce(&mut MailerBuilder)) -> &mut Self {
        section(&mut self.mailer);
        self
    }

    /// Finalize into the immutable configuration value.
    pub fn build(self) -> GlobalConfiguration {
        GlobalConfiguration {
            apps: self.apps.into_iter().map(Arc::new).collect(),
            model: self.model.build(),
            mailer: self.mailer.build(),
        }
    }
}

/// Normalize a mount path: ensure a leading `/`, strip trailing `/`
/// (the bare root mount stays `/`).
fn normalize_mount_path(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
