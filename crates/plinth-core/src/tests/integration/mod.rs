#![cfg(test)]

pub mod boot_flow_tests;
pub mod concurrency_tests;
