//! Process-wide holder for the installed [`GlobalConfiguration`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::builder::{ConfigBuilder, GlobalConfiguration};
use crate::config::error::ConfigError;

/// Holds the single installed configuration instance.
///
/// `configure` is expected to run once at process bootstrap; the lock exists
/// so accidental concurrent or duplicate `configure` calls are safe, not to
/// serve a highly concurrent workload. The lock is held only around the
/// install swap and the read, never while the user-supplied block runs, so
/// the block may itself read the previous configuration without deadlock.
#[derive(Debug, Default)]
pub struct ConfigHolder {
    current: Mutex<Option<Arc<GlobalConfiguration>>>,
}

impl ConfigHolder {
    /// Create a holder with no configuration installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `block` against a fresh [`ConfigBuilder`], then atomically
    /// install the built configuration, replacing any previous one.
    ///
    /// Previously returned `Arc`s stay valid snapshots of the configuration
    /// they were read from. Returns the newly installed instance.
    pub fn configure(&self, block: impl FnOnce(&mut ConfigBuilder)) -> Arc<GlobalConfiguration> {
        let mut builder = ConfigBuilder::default();
        block(&mut builder);
        let built = Arc::new(builder.build());

        let mut slot = self.lock_slot();
        if slot.is_some() {
            log::info!("replacing installed configuration");
        }
        *slot = Some(Arc::clone(&built));
        built
    }

    /// The installed configuration, or [`ConfigError::NotConfigured`] if no
    /// `configure` call has ever completed.
    pub fn current(&self) -> Result<Arc<GlobalConfiguration>, ConfigError> {
        self.lock_slot().clone().ok_or(ConfigError::NotConfigured)
    }

    /// Whether a configuration has been installed.
    pub fn is_configured(&self) -> bool {
        self.lock_slot().is_some()
    }

    fn lock_slot(&self) -> MutexGuard<'_, Option<Arc<GlobalConfiguration>>> {
        // The slot write is a single pointer swap; a poisoned lock cannot
        // hold a partially-installed instance and is safe to recover.
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
