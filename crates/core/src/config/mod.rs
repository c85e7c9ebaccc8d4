//! Configuration file loading and resolution.

pub mod loader;
pub mod types;
