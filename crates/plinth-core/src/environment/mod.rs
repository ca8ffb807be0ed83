//! # Environment
//!
//! Process-wide runtime facts: the active environment name and the project
//! root. Detection is a pure read of process-wide inputs and is recomputed
//! on every call (never cached), so it reflects live changes to the
//! underlying variables.

use std::env;
use std::path::{Path, PathBuf};

use crate::kernel::constants;

/// Snapshot of the runtime environment, produced by [`Environment::detect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    root: PathBuf,
}

impl Environment {
    /// Read the current environment from process-wide inputs.
    ///
    /// The name comes from `PLINTH_ENV` (absent or empty defaults to
    /// `"development"`); the project root from `PLINTH_ROOT`, falling back
    /// to the process current directory.
    pub fn detect() -> Self {
        let name = env::var(constants::ENV_VAR)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| constants::DEFAULT_ENVIRONMENT.to_string());
        let root = env::var_os(constants::ROOT_VAR)
            .map(PathBuf::from)
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self { name, root }
    }

    /// The active environment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True iff the current environment name is a member of `names`.
    pub fn matches<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().any(|candidate| candidate.as_ref() == self.name)
    }

    pub fn is_development(&self) -> bool {
        self.name == constants::DEFAULT_ENVIRONMENT
    }

    pub fn is_test(&self) -> bool {
        self.name == "test"
    }

    pub fn is_production(&self) -> bool {
        self.name == "production"
    }
}
