//! # Configuration
//!
//! The declarative configuration layer: a closed builder DSL that
//! accumulates into an immutable [`GlobalConfiguration`] value, and the
//! [`ConfigHolder`] that installs one instance process-wide.
//!
//! Recognized builder operations are a fixed set: [`ConfigBuilder::mount`]
//! (attach a sub-application at a path prefix) and the nested section
//! builders [`ConfigBuilder::model`] / [`ConfigBuilder::mailer`]. With the
//! default `toml-config` feature, [`file::ConfigFile`] loads the same shape
//! from a `plinth.toml`.

pub mod builder;
pub mod error;
#[cfg(feature = "toml-config")]
pub mod file;
pub mod holder;
pub mod sections;

pub use builder::{AppSettings, AppSettingsBuilder, ConfigBuilder, GlobalConfiguration, MountedApp};
pub use error::ConfigError;
#[cfg(feature = "toml-config")]
pub use file::ConfigFile;
pub use holder::ConfigHolder;
pub use sections::{AdapterSettings, DeliveryMethod, MailerSettings, ModelSettings};

#[cfg(test)]
mod tests;
