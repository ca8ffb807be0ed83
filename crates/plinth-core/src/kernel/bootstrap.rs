use std::sync::Arc;

use crate::app::{AppConfiguration, Dispatcher};
use crate::config::builder::{ConfigBuilder, GlobalConfiguration};
use crate::config::holder::ConfigHolder;
use crate::environment::Environment;
use crate::kernel::constants;
use crate::kernel::error::{Error, Result};
use crate::registry::component::{ComponentDefinition, ComponentName, SharedValue};
use crate::registry::error::RegistryError;
use crate::registry::resolver::ComponentRegistry;

/// The process-wide engine handle: configuration holder plus component
/// registry, constructed explicitly at bootstrap and passed by reference to
/// every collaborator (no ambient globals).
///
/// Cloning is cheap and every clone shares the same state.
///
/// Lifecycle: `configure` installs the configuration, `boot` resolves the
/// `"apps.configurations"` composite (defining one configuration component
/// per mounted application on the way), and `app` composes the resolved
/// configurations into a [`Dispatcher`]. Booting repeatedly is safe and a
/// no-op beyond the first successful call; picking up a *replaced*
/// configuration's topology requires a fresh `Engine`.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Arc<ConfigHolder>,
    registry: Arc<ComponentRegistry>,
}

impl Engine {
    /// Create an engine with no configuration installed and an empty
    /// registry.
    pub fn new() -> Self {
        log::info!(
            "initializing {} v{}",
            constants::ENGINE_NAME,
            constants::ENGINE_VERSION
        );
        Self::default()
    }

    /// Install a configuration built from `block`. See
    /// [`ConfigHolder::configure`] for the locking discipline.
    pub fn configure(&self, block: impl FnOnce(&mut ConfigBuilder)) -> Arc<GlobalConfiguration> {
        self.config.configure(block)
    }

    /// The configuration holder.
    pub fn config(&self) -> &Arc<ConfigHolder> {
        &self.config
    }

    /// The component registry.
    pub fn registry(&self) -> &Arc<ComponentRegistry> {
        &self.registry
    }

    /// Detect the runtime environment. Recomputed on every call.
    pub fn environment(&self) -> Environment {
        Environment::detect()
    }

    /// Boot the process: resolve `"apps.configurations"`, which resolves
    /// every mounted application's configuration component exactly once, in
    /// dependency order.
    ///
    /// Fails with [`ConfigError::NotConfigured`] if `configure` has not
    /// run. Calling `boot` again after success is a no-op (the composite is
    /// already resolved).
    ///
    /// [`ConfigError::NotConfigured`]: crate::config::ConfigError::NotConfigured
    pub fn boot(&self) -> Result<()> {
        let configuration = self.config.current()?;
        self.define_app_components(&configuration)?;
        let composite = ComponentName::parse(constants::APPS_COMPOSITE)?;
        log::info!(
            "booting: resolving '{composite}' ({} mounted app(s))",
            configuration.apps().len()
        );
        self.registry.resolve(&composite)?;
        Ok(())
    }

    /// Compose the resolved per-application configurations into a request
    /// dispatcher, booting first if the composite is not yet resolved.
    pub fn app(&self) -> Result<Dispatcher> {
        self.config.current()?;
        let composite = ComponentName::parse(constants::APPS_COMPOSITE)?;
        if !self.registry.is_resolved(&composite) {
            self.boot()?;
        }
        let configurations = self
            .registry
            .get_resolved::<Vec<Arc<AppConfiguration>>>(&composite)
            .ok_or_else(|| {
                Error::App(format!(
                    "'{}' did not resolve to an app configuration list",
                    constants::APPS_COMPOSITE
                ))
            })?;
        Ok(Dispatcher::new(configurations.as_ref().clone()))
    }

    /// Define one `"<app>.configuration"` component per mounted application
    /// plus the `"apps.configurations"` composite. Already-defined names are
    /// left alone, so repeated boots never redefine.
    fn define_app_components(&self, configuration: &GlobalConfiguration) -> Result<()> {
        for app in configuration.apps() {
            let component = app_configuration_name(app.name())?;
            if self.registry.is_defined(&component) {
                continue;
            }
            let holder = Arc::clone(&self.config);
            let app_name = app.name().to_string();
            self.registry.define(ComponentDefinition::new(component, move |_scope| {
                let configuration = holder.current()?;
                let mounted = configuration.app(&app_name).ok_or_else(|| {
                    Error::App(format!("app '{app_name}' is not mounted"))
                })?;
                let value: SharedValue = Arc::new(AppConfiguration::new(Arc::clone(mounted)));
                Ok(value)
            }))?;
        }

        let composite = ComponentName::parse(constants::APPS_COMPOSITE)?;
        if !self.registry.is_defined(&composite) {
            let holder = Arc::clone(&self.config);
            self.registry.define(ComponentDefinition::new(composite, move |scope| {
                let configuration = holder.current()?;
                let mut configurations = Vec::with_capacity(configuration.apps().len());
                for app in configuration.apps() {
                    let component = app_configuration_name(app.name())?;
                    let value = scope.resolve(&component)?;
                    let app_configuration =
                        value.downcast::<AppConfiguration>().map_err(|_| {
                            Error::App(format!(
                                "component '{component}' did not resolve to an app configuration"
                            ))
                        })?;
                    configurations.push(app_configuration);
                }
                let value: SharedValue = Arc::new(configurations);
                Ok(value)
            }))?;
        }
        Ok(())
    }
}

/// The component name of a mounted application's configuration:
/// `"<app>.configuration"`.
pub fn app_configuration_name(app_name: &str) -> std::result::Result<ComponentName, RegistryError> {
    ComponentName::parse(&format!(
        "{app_name}.{}",
        constants::APP_CONFIGURATION_SUFFIX
    ))
}
