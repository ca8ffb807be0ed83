//! Concurrency properties of the whole engine: at-most-once initialization
//! under simultaneous boots from multiple threads.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::kernel::bootstrap::Engine;
use crate::kernel::constants;
use crate::registry::component::{ComponentDefinition, ComponentName, SharedValue};

#[test]
fn test_concurrent_boot_resolves_each_app_once() {
    let engine = Engine::new();
    engine.configure(|config| {
        config.mount("web", "/").mount("admin", "/admin");
    });

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = engine.clone();
            thread::spawn(move || engine.boot())
        })
        .collect();
    for handle in handles {
        handle.join().expect("boot thread must not panic").expect("boot must succeed");
    }

    let composite = ComponentName::parse(constants::APPS_COMPOSITE).unwrap();
    let registry = engine.registry();
    assert!(registry.is_resolved(&composite));
    // One composite plus one component per mounted app.
    assert_eq!(registry.resolved_names().len(), 3);
}

#[test]
fn test_concurrent_mixed_resolution_with_slow_dependency() {
    // Two dependents race for the same slow prerequisite from different
    // threads; the prerequisite's routine still runs exactly once.
    let registry = Arc::new(crate::registry::ComponentRegistry::new());
    let executions = Arc::new(AtomicUsize::new(0));

    let executions_in_routine = Arc::clone(&executions);
    registry
        .define(ComponentDefinition::new(
            ComponentName::parse("store").unwrap(),
            move |_scope| {
                executions_in_routine.fetch_add(1, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(30));
                Ok(Arc::new("store".to_string()) as SharedValue)
            },
        ))
        .unwrap();
    for raw in ["web.configuration", "admin.configuration"] {
        registry
            .define(
                ComponentDefinition::new(ComponentName::parse(raw).unwrap(), |_scope| {
                    Ok(Arc::new(()) as SharedValue)
                })
                .with_prerequisites(vec![ComponentName::parse("store").unwrap()]),
            )
            .unwrap();
    }

    let handles: Vec<_> = ["web.configuration", "admin.configuration", "store"]
        .into_iter()
        .map(|raw| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.resolve(&ComponentName::parse(raw).unwrap()))
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread must not panic").expect("resolution must succeed");
    }

    assert_eq!(
        executions.load(Ordering::SeqCst),
        1,
        "shared prerequisite must initialize exactly once across threads"
    );
}
