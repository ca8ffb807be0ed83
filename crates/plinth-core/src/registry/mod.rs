//! # Component Registry
//!
//! Process-wide store of resolved component values, plus the resolver that
//! populates it.
//!
//! A *component* is a named unit of one-time initialization work with an
//! ordered list of prerequisite components. Definitions are registered up
//! front via [`ComponentRegistry::define`]; [`ComponentRegistry::resolve`]
//! walks the prerequisite graph depth-first, runs each initialization
//! routine at most once (process-wide, even under concurrent callers), and
//! records the result. Resolution is demand-driven: nothing runs until a
//! component is asked for.
//!
//! ## Key types
//!
//! - [`ComponentName`] — validated dotted identifier (`"web.configuration"`).
//! - [`ComponentDefinition`] — name + prerequisites + initialization routine.
//! - [`ComponentRegistry`] — resolved values, in-progress guard, resolver.
//! - [`ResolveScope`] — handle given to routines for re-entrant resolution.

pub mod component;
pub mod error;
pub mod resolver;

pub use component::{BoxError, ComponentDefinition, ComponentName, SharedValue};
pub use error::RegistryError;
pub use resolver::{ComponentRegistry, ResolveScope};
