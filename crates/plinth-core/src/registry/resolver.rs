use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use crate::registry::component::{ComponentDefinition, ComponentName, SharedValue};
use crate::registry::error::RegistryError;

/// Mutable resolution state, guarded as one unit.
#[derive(Default)]
struct ResolveState {
    /// Resolved values. Once a key is present its value never changes.
    resolved: HashMap<ComponentName, SharedValue>,
    /// Components whose routine is currently running on some call tree.
    in_progress: HashSet<ComponentName>,
}

/// Process-wide registry of component definitions and resolved values.
///
/// `resolve` guarantees at-most-once execution of every initialization
/// routine: the first caller for a name runs the routine, concurrent callers
/// for the same name block until the value is stored, and all of them return
/// the identical [`SharedValue`]. The state lock is held only around the
/// check/insert transitions, never while prerequisites resolve or a routine
/// runs, so routines may freely re-enter the resolver.
pub struct ComponentRegistry {
    definitions: Mutex<HashMap<ComponentName, Arc<ComponentDefinition>>>,
    state: Mutex<ResolveState>,
    /// Signalled whenever a resolution attempt settles (success or failure).
    settled: Condvar,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            definitions: Mutex::new(HashMap::new()),
            state: Mutex::new(ResolveState::default()),
            settled: Condvar::new(),
        }
    }

    /// Register a component definition.
    ///
    /// Definitions must be registered before the component is first
    /// resolved; registering the same name twice is an error.
    pub fn define(&self, definition: ComponentDefinition) -> Result<(), RegistryError> {
        let mut definitions = self.lock_definitions();
        let name = definition.name().clone();
        if definitions.contains_key(&name) {
            return Err(RegistryError::AlreadyDefined(name));
        }
        log::debug!("defined component '{name}'");
        definitions.insert(name, Arc::new(definition));
        Ok(())
    }

    /// Whether a definition exists for `name`.
    pub fn is_defined(&self, name: &ComponentName) -> bool {
        self.lock_definitions().contains_key(name)
    }

    /// Whether `name` has been resolved.
    pub fn is_resolved(&self, name: &ComponentName) -> bool {
        self.lock_state().resolved.contains_key(name)
    }

    /// Read an already-resolved value without triggering resolution.
    pub fn get(&self, name: &ComponentName) -> Option<SharedValue> {
        self.lock_state().resolved.get(name).cloned()
    }

    /// Read an already-resolved value downcast to its concrete type.
    ///
    /// Returns `None` if the component is unresolved or the stored value is
    /// not a `T`.
    pub fn get_resolved<T: Any + Send + Sync>(&self, name: &ComponentName) -> Option<Arc<T>> {
        self.get(name).and_then(|value| Arc::downcast::<T>(value).ok())
    }

    /// Names of all resolved components, sorted for stable output.
    pub fn resolved_names(&self) -> Vec<ComponentName> {
        let mut names: Vec<_> = self.lock_state().resolved.keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of all defined components, sorted for stable output.
    pub fn defined_names(&self) -> Vec<ComponentName> {
        let mut names: Vec<_> = self.lock_definitions().keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolve a component, running its initialization routine if (and only
    /// if) it has never successfully run before.
    ///
    /// Prerequisites are fully resolved, in declared order, before the
    /// routine executes. Repeated calls return the stored value untouched.
    /// A routine failure leaves the component unresolved (not poisoned); the
    /// error propagates to the caller and a later call may retry.
    pub fn resolve(&self, name: &ComponentName) -> Result<SharedValue, RegistryError> {
        let mut path = Vec::new();
        self.resolve_inner(name, &mut path)
    }

    /// Recursive resolution step. `path` is the chain of components whose
    /// routines are pending on this call tree; revisiting one is a cycle.
    pub(crate) fn resolve_inner(
        &self,
        name: &ComponentName,
        path: &mut Vec<ComponentName>,
    ) -> Result<SharedValue, RegistryError> {
        let definition = loop {
            let state = self.lock_state();
            if let Some(value) = state.resolved.get(name) {
                return Ok(Arc::clone(value));
            }
            if path.contains(name) {
                let mut cycle = path.clone();
                cycle.push(name.clone());
                return Err(RegistryError::CyclicDependency(cycle));
            }
            if !state.in_progress.contains(name) {
                // No definition: fail without mutating any state.
                let Some(definition) = self.lock_definitions().get(name).cloned() else {
                    return Err(RegistryError::UnknownComponent(name.clone()));
                };
                let mut state = state;
                state.in_progress.insert(name.clone());
                break definition;
            }
            // Another call tree is running this routine. Block until it
            // settles, then re-check from the top; if it failed, this caller
            // takes over as the resolver.
            let _settled = self
                .settled
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        };

        log::debug!("resolving component '{name}'");
        path.push(name.clone());
        let outcome = self.run_definition(&definition, path);
        path.pop();

        let mut state = self.lock_state();
        state.in_progress.remove(name);
        let result = match outcome {
            Ok(value) => {
                log::debug!("resolved component '{name}'");
                state.resolved.insert(name.clone(), Arc::clone(&value));
                Ok(value)
            }
            Err(err) => {
                log::warn!("component '{name}' failed to resolve: {err}");
                Err(err)
            }
        };
        drop(state);
        self.settled.notify_all();
        result
    }

    /// Resolve prerequisites depth-first, then run the routine. Called with
    /// no lock held.
    fn run_definition(
        &self,
        definition: &ComponentDefinition,
        path: &mut Vec<ComponentName>,
    ) -> Result<SharedValue, RegistryError> {
        for prerequisite in definition.prerequisites() {
            self.resolve_inner(prerequisite, path)?;
        }
        let mut scope = ResolveScope {
            registry: self,
            path,
        };
        definition.run(&mut scope).map_err(|source| RegistryError::InitFailed {
            name: definition.name().clone(),
            source,
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, ResolveState> {
        // Transitions under this lock are single inserts/removes; a poisoned
        // lock cannot hold a half-applied one and is safe to recover.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_definitions(&self) -> MutexGuard<'_, HashMap<ComponentName, Arc<ComponentDefinition>>> {
        self.definitions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("defined", &self.defined_names())
            .field("resolved", &self.resolved_names())
            .finish_non_exhaustive()
    }
}

/// Handle given to initialization routines.
///
/// Grants read access to resolved values and re-entrant resolution that
/// continues the current call path, so genuine dependency cycles are still
/// detected across nested `resolve` calls.
pub struct ResolveScope<'a> {
    registry: &'a ComponentRegistry,
    path: &'a mut Vec<ComponentName>,
}

impl ResolveScope<'_> {
    /// Resolve another component from within a routine.
    pub fn resolve(&mut self, name: &ComponentName) -> Result<SharedValue, RegistryError> {
        self.registry.resolve_inner(name, self.path)
    }

    /// Read an already-resolved value (typically a declared prerequisite).
    pub fn get(&self, name: &ComponentName) -> Option<SharedValue> {
        self.registry.get(name)
    }

    /// Read an already-resolved value downcast to its concrete type.
    pub fn get_resolved<T: Any + Send + Sync>(&self, name: &ComponentName) -> Option<Arc<T>> {
        self.registry.get_resolved::<T>(name)
    }
}
