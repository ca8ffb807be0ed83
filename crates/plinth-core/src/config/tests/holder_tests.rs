use std::sync::Arc;
use std::thread;

use crate::config::error::ConfigError;
use crate::config::holder::ConfigHolder;

#[test]
fn test_current_before_configure_fails() {
    let holder = ConfigHolder::new();
    assert!(!holder.is_configured());
    let err = holder.current().expect_err("unconfigured holder must fail");
    assert!(matches!(err, ConfigError::NotConfigured));
}

#[test]
fn test_configure_installs_and_current_returns_it() {
    let holder = ConfigHolder::new();
    let installed = holder.configure(|config| {
        config.mount("web", "/");
    });

    assert!(holder.is_configured());
    let current = holder.current().expect("configured holder must return the instance");
    assert!(
        Arc::ptr_eq(&installed, &current),
        "current() must return the installed instance"
    );
    assert_eq!(current.apps().len(), 1);
}

#[test]
fn test_reconfigure_replaces_but_old_snapshots_stay_valid() {
    let holder = ConfigHolder::new();
    holder.configure(|config| {
        config.mount("web", "/");
    });
    let before = holder.current().unwrap();

    holder.configure(|config| {
        config.mount("admin", "/admin");
    });
    let after = holder.current().unwrap();

    assert!(!Arc::ptr_eq(&before, &after), "replace must install a new instance");
    // The earlier snapshot is untouched by the replace.
    assert_eq!(before.apps().len(), 1);
    assert_eq!(before.apps()[0].name(), "web");
    assert_eq!(after.apps()[0].name(), "admin");
}

#[test]
fn test_configure_block_may_read_previous_configuration() {
    // The holder lock is not held while the block runs, so reading the
    // previous configuration from inside a block must not deadlock.
    let holder = ConfigHolder::new();
    holder.configure(|config| {
        config.mount("web", "/");
    });

    let previous = holder.current().unwrap();
    holder.configure(|config| {
        for app in previous.apps() {
            config.mount(app.name(), app.mount_path());
        }
        config.mount("admin", "/admin");
    });

    let current = holder.current().unwrap();
    let names: Vec<&str> = current.apps().iter().map(|app| app.name()).collect();
    assert_eq!(names, vec!["web", "admin"]);
}

#[test]
fn test_concurrent_configure_is_safe() {
    let holder = Arc::new(ConfigHolder::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let holder = Arc::clone(&holder);
            thread::spawn(move || {
                holder.configure(|config| {
                    config.mount(format!("app{i}"), format!("/app{i}"));
                });
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("configure must not panic");
    }

    // Whichever configure finished last won; the installed instance is a
    // complete configuration from exactly one block.
    let current = holder.current().unwrap();
    assert_eq!(current.apps().len(), 1);
}
