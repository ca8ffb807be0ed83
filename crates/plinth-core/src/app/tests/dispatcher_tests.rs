use std::sync::Arc;

use crate::app::dispatcher::{AppConfiguration, Dispatcher};
use crate::config::builder::ConfigBuilder;

/// Build a dispatcher straight from builder output, bypassing the engine.
fn dispatcher(mounts: &[(&str, &str)]) -> Dispatcher {
    let mut builder = ConfigBuilder::default();
    for (name, at_path) in mounts {
        builder.mount(*name, *at_path);
    }
    let configuration = builder.build();
    let apps = configuration
        .apps()
        .iter()
        .map(|app| Arc::new(AppConfiguration::new(Arc::clone(app))))
        .collect();
    Dispatcher::new(apps)
}

#[test]
fn test_longest_prefix_wins() {
    let dispatcher = dispatcher(&[("web", "/"), ("admin", "/admin"), ("reports", "/admin/reports")]);

    assert_eq!(dispatcher.dispatch("/").unwrap().name(), "web");
    assert_eq!(dispatcher.dispatch("/posts/1").unwrap().name(), "web");
    assert_eq!(dispatcher.dispatch("/admin").unwrap().name(), "admin");
    assert_eq!(dispatcher.dispatch("/admin/users").unwrap().name(), "admin");
    assert_eq!(
        dispatcher.dispatch("/admin/reports/monthly").unwrap().name(),
        "reports"
    );
}

#[test]
fn test_matching_respects_segment_boundaries() {
    let dispatcher = dispatcher(&[("admin", "/admin")]);

    assert!(dispatcher.dispatch("/administrators").is_none());
    assert_eq!(dispatcher.dispatch("/admin").unwrap().name(), "admin");
    assert_eq!(dispatcher.dispatch("/admin/").unwrap().name(), "admin");
}

#[test]
fn test_no_match_without_root_mount() {
    let dispatcher = dispatcher(&[("admin", "/admin")]);
    assert!(dispatcher.dispatch("/posts").is_none());
}

#[test]
fn test_empty_dispatcher() {
    let dispatcher = dispatcher(&[]);
    assert!(dispatcher.is_empty());
    assert!(dispatcher.dispatch("/").is_none());
}

#[test]
fn test_mount_table_is_longest_first() {
    let dispatcher = dispatcher(&[("web", "/"), ("reports", "/admin/reports"), ("admin", "/admin")]);
    let paths: Vec<&str> = dispatcher.mounts().iter().map(|mount| mount.path()).collect();
    assert_eq!(paths, vec!["/admin/reports", "/admin", "/"]);
    assert_eq!(dispatcher.len(), 3);
}

#[test]
fn test_app_configuration_shares_mounted_app() {
    let mut builder = ConfigBuilder::default();
    builder.mount("web", "/");
    let configuration = builder.build();
    let mounted = Arc::clone(&configuration.apps()[0]);

    let app_configuration = AppConfiguration::new(Arc::clone(&mounted));
    assert_eq!(app_configuration.name(), "web");
    assert_eq!(app_configuration.mount_path(), "/");
    assert_eq!(app_configuration.settings(), mounted.settings());
}
