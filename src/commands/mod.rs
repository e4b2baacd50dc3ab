pub mod batch;
pub mod check;
pub mod config;
pub mod transform;
pub mod utils;
pub mod version;

#[cfg(test)]
#[path = "../commands_test.rs"]
mod commands_test;
