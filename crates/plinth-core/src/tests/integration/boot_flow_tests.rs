//! End-to-end configure → boot → app flows.

use std::sync::Arc;

use crate::app::AppConfiguration;
use crate::config::sections::DeliveryMethod;
use crate::kernel::bootstrap::{app_configuration_name, Engine};
use crate::registry::component::{ComponentDefinition, SharedValue};

#[test]
fn test_full_boot_flow() {
    let engine = Engine::new();
    engine.configure(|config| {
        config
            .mount("web", "/")
            .mount("admin", "/admin")
            .model(|model| {
                model
                    .adapter("postgres", "postgres://localhost/app_development")
                    .migrations("db/migrations");
            })
            .mailer(|mailer| {
                mailer.delivery(DeliveryMethod::Sendmail);
            });
    });

    engine.boot().expect("boot should succeed");
    let dispatcher = engine.app().expect("app() should compose");

    let admin = dispatcher.dispatch("/admin/users").expect("admin should match");
    assert_eq!(admin.name(), "admin");
    let web = dispatcher.dispatch("/anything/else").expect("root mount should match");
    assert_eq!(web.name(), "web");

    // The dispatcher's app configurations are the registry's instances, not
    // copies.
    let registered = engine
        .registry()
        .get_resolved::<AppConfiguration>(&app_configuration_name("admin").unwrap())
        .unwrap();
    assert!(Arc::ptr_eq(&registered, &admin));

    // Global sections survive into the installed configuration.
    let configuration = engine.config().current().unwrap();
    assert_eq!(
        configuration.model().adapter.as_ref().unwrap().kind,
        "postgres"
    );
}

#[test]
fn test_user_components_participate_in_boot_ordering() {
    // A user-defined component can depend on a mounted app's configuration
    // component; the resolver orders them.
    let engine = Engine::new();
    engine.configure(|config| {
        config.mount("web", "/");
    });
    engine.boot().unwrap();

    let web_component = app_configuration_name("web").unwrap();
    let prerequisite = web_component.clone();
    engine
        .registry()
        .define(
            ComponentDefinition::new("web.router".parse().unwrap(), move |scope| {
                let configuration = scope
                    .get_resolved::<AppConfiguration>(&prerequisite)
                    .expect("prerequisite must be resolved before this routine runs");
                Ok(Arc::new(format!("router for {}", configuration.name())) as SharedValue)
            })
            .with_prerequisites(vec![web_component]),
        )
        .unwrap();

    let router = engine.registry().resolve(&"web.router".parse().unwrap()).unwrap();
    let router = router.downcast::<String>().expect("router value type");
    assert_eq!(*router, "router for web");
}

#[cfg(feature = "toml-config")]
#[test]
fn test_boot_from_config_file() {
    use std::io::Write;

    use crate::config::file::ConfigFile;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("plinth.toml");
    let mut handle = std::fs::File::create(&path).expect("create config file");
    write!(
        handle,
        r#"
[[apps]]
name = "web"
at = "/"

[[apps]]
name = "admin"
at = "/admin"
"#
    )
    .expect("write config file");

    let file = ConfigFile::load(&path).expect("config file should load");
    let engine = Engine::new();
    engine.configure(|config| {
        file.apply(config);
    });

    let dispatcher = engine.app().expect("app() should boot from file config");
    assert_eq!(dispatcher.dispatch("/admin").unwrap().name(), "admin");
    assert_eq!(dispatcher.len(), 2);
}
