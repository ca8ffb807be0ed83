//! Cross-subsystem integration tests.

pub mod integration;
