//! # Plinth Core Kernel
//!
//! The kernel ties the other subsystems together. It is responsible for:
//!
//! - **Bootstrapping**: [`Engine`](bootstrap::Engine) is the explicitly
//!   constructed process-wide state handle (configuration holder plus
//!   component registry); [`Engine::boot`](bootstrap::Engine::boot) defines
//!   and resolves the `"apps.configurations"` composite so every mounted
//!   application's configuration component is initialized exactly once, in
//!   dependency order.
//! - **Core constants** via the `constants` submodule.
//! - **Error aggregation**: the kernel [`Error`](error::Error) wraps the
//!   subsystem error types and provides the crate-wide `Result` alias.

pub mod bootstrap;
pub mod constants;
pub mod error;

pub use bootstrap::Engine;
pub use error::{Error, Result};
