//! # App Facade
//!
//! Read-side composition over the registry: the resolved per-application
//! configurations become a [`Dispatcher`] that routes a request path to the
//! sub-application mounted at the longest matching path prefix. The facade
//! holds no mutable state of its own; the request/response contract itself
//! belongs to the external web stack.

pub mod dispatcher;

pub use dispatcher::{AppConfiguration, Dispatcher, MountPoint};

#[cfg(test)]
mod tests;
