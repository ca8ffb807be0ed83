//! # Plinth Core
//!
//! Component-resolution and boot engine for multi-application processes.
//!
//! A process declares its mounted sub-applications through the configuration
//! DSL ([`config`]), then calls [`Engine::boot`], which resolves the
//! `"apps.configurations"` composite component: every mounted application's
//! own configuration component is resolved exactly once, in dependency
//! order, and recorded in the process-wide [`registry`]. The [`app`] facade
//! composes the resolved configurations into a path-prefix dispatcher for an
//! external HTTP server.

pub mod app;
pub mod config;
pub mod environment;
pub mod kernel;
pub mod registry;

// Re-export key public types for easier use by the binary and embedders
pub use app::{AppConfiguration, Dispatcher};
pub use config::{ConfigBuilder, ConfigHolder, GlobalConfiguration, MountedApp};
pub use environment::Environment;
pub use kernel::bootstrap::Engine;
pub use kernel::error::{Error, Result};
pub use registry::{ComponentDefinition, ComponentName, ComponentRegistry, SharedValue};

// Cross-subsystem integration tests
#[cfg(test)]
mod tests;
