use std::sync::Arc;

use serde::Serialize;

use crate::config::builder::{AppSettings, MountedApp};

/// A mounted application's resolved configuration component value.
///
/// Shares the [`MountedApp`] owned by the global configuration rather than
/// copying it; every caller that resolves `"<app>.configuration"` observes
/// this same instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfiguration {
    app: Arc<MountedApp>,
}

impl AppConfiguration {
    pub fn new(app: Arc<MountedApp>) -> Self {
        Self { app }
    }

    pub fn name(&self) -> &str {
        self.app.name()
    }

    pub fn mount_path(&self) -> &str {
        self.app.mount_path()
    }

    pub fn settings(&self) -> &AppSettings {
        self.app.settings()
    }
}

/// One row of the dispatch table.
#[derive(Debug, Clone, Serialize)]
pub struct MountPoint {
    path: String,
    app: Arc<AppConfiguration>,
}

impl MountPoint {
    /// The mount path prefix this row matches.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The application mounted at this prefix.
    pub fn app(&self) -> &Arc<AppConfiguration> {
        &self.app
    }
}

/// Routes a request path to the sub-application whose mount path is the
/// longest matching prefix of it.
///
/// Built from the resolved `"apps.configurations"` composite; pure
/// composition over values the registry already holds.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Dispatch table ordered by descending prefix length, so the first
    /// match is the longest.
    mounts: Vec<MountPoint>,
}

impl Dispatcher {
    /// Build the dispatch table from resolved app configurations.
    pub fn new(apps: Vec<Arc<AppConfiguration>>) -> Self {
        let mut mounts: Vec<MountPoint> = apps
            .into_iter()
            .map(|app| MountPoint {
                path: app.mount_path().to_string(),
                app,
            })
            .collect();
        mounts.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.path.cmp(&b.path))
        });
        Self { mounts }
    }

    /// The sub-application mounted at the longest prefix of `request_path`,
    /// if any. A root mount (`"/"`) matches every path.
    pub fn dispatch(&self, request_path: &str) -> Option<Arc<AppConfiguration>> {
        self.mounts
            .iter()
            .find(|mount| prefix_matches(&mount.path, request_path))
            .map(|mount| Arc::clone(&mount.app))
    }

    /// The dispatch table, longest prefix first.
    pub fn mounts(&self) -> &[MountPoint] {
        &self.mounts
    }

    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }
}

/// Prefix match on path-segment boundaries: `/admin` matches `/admin` and
/// `/admin/users` but not `/administrators`.
fn prefix_matches(mount: &str, request: &str) -> bool {
    if mount == "/" {
        return true;
    }
    match request.strip_prefix(mount) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
