//! Error types for component definition and resolution.

use thiserror::Error;

use crate::registry::component::{BoxError, ComponentName};

/// Errors produced by the component registry and resolver.
///
/// All variants except `InitFailed` are structural: they indicate a
/// programming or setup mistake and are not expected runtime conditions.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// `resolve` was called with a name that has no registered definition.
    /// The registry is left untouched.
    #[error("unknown component: {0}")]
    UnknownComponent(ComponentName),

    /// A component's prerequisite chain revisited a component already being
    /// resolved on the current call path. Carries the offending path, ending
    /// with the repeated name.
    #[error("cyclic component dependency: {}", format_cycle(.0))]
    CyclicDependency(Vec<ComponentName>),

    /// The component's initialization routine failed. The source error is
    /// propagated unchanged; the component stays unresolved and a later
    /// `resolve` call may retry it.
    #[error("component '{name}' failed to initialize: {source}")]
    InitFailed {
        name: ComponentName,
        #[source]
        source: BoxError,
    },

    /// A definition was registered twice under the same name.
    #[error("component already defined: {0}")]
    AlreadyDefined(ComponentName),

    /// A component name failed validation (empty, or an empty dot segment).
    #[error("invalid component name: '{0}'")]
    InvalidName(String),
}

fn format_cycle(path: &[ComponentName]) -> String {
    path.iter()
        .map(ComponentName::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
