use std::any::Any;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::registry::error::RegistryError;
use crate::registry::resolver::ResolveScope;

/// Boxed error returned by component initialization routines.
///
/// Routines may fail with any error type; the resolver wraps it in
/// [`RegistryError::InitFailed`] with the source preserved unchanged.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Type-erased resolved component value.
///
/// Values are stored behind `Arc` so every caller of `resolve` observes the
/// identical instance. Use [`ComponentRegistry::get_resolved`] to downcast
/// back to a concrete type.
///
/// [`ComponentRegistry::get_resolved`]: crate::registry::ComponentRegistry::get_resolved
pub type SharedValue = Arc<dyn Any + Send + Sync>;

/// A dotted component identifier, e.g. `"apps.configurations"`.
///
/// Treated as an opaque key: equality is exact string match. Construction
/// validates the shape (non-empty, no empty segments) so the registry never
/// holds malformed keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ComponentName(String);

impl ComponentName {
    /// Parse and validate a dotted identifier.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        if raw.is_empty() || raw.split('.').any(|segment| segment.is_empty()) {
            return Err(RegistryError::InvalidName(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// The dotted string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the dot-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ComponentName {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Initialization routine signature.
///
/// The routine receives a [`ResolveScope`] granting read access to already
/// resolved values and re-entrant resolution of further components.
pub type InitFn = dyn Fn(&mut ResolveScope<'_>) -> Result<SharedValue, BoxError> + Send + Sync;

/// Static association of a component name with its initialization routine
/// and the ordered list of prerequisite components.
///
/// Definitions are registered once, before any resolution begins, and never
/// mutated afterwards.
pub struct ComponentDefinition {
    name: ComponentName,
    prerequisites: Vec<ComponentName>,
    init: Box<InitFn>,
}

impl ComponentDefinition {
    /// Create a definition with no prerequisites.
    pub fn new<F>(name: ComponentName, init: F) -> Self
    where
        F: Fn(&mut ResolveScope<'_>) -> Result<SharedValue, BoxError> + Send + Sync + 'static,
    {
        Self {
            name,
            prerequisites: Vec::new(),
            init: Box::new(init),
        }
    }

    /// Declare prerequisite components, resolved in the given order before
    /// this component's routine runs.
    pub fn with_prerequisites(mut self, prerequisites: Vec<ComponentName>) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    /// The component's name.
    pub fn name(&self) -> &ComponentName {
        &self.name
    }

    /// The declared prerequisites, in resolution order.
    pub fn prerequisites(&self) -> &[ComponentName] {
        &self.prerequisites
    }

    /// Run the initialization routine.
    pub(crate) fn run(&self, scope: &mut ResolveScope<'_>) -> Result<SharedValue, BoxError> {
        (self.init)(scope)
    }
}

impl fmt::Debug for ComponentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDefinition")
            .field("name", &self.name)
            .field("prerequisites", &self.prerequisites)
            .finish_non_exhaustive()
    }
}
