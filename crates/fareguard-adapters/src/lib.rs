//! Infrastructure adapters for Fareguard.
//!
//! This crate implements the ports defined in
//! `fareguard-core::application::ports`. It contains all external
//! dependencies and I/O operations: reading the wall clock and loading
//! rules configuration from disk.

pub mod clock;
pub mod rules_loader;

// Re-export commonly used adapters
pub use clock::{FixedClock, ZonedClock};
pub use rules_loader::TomlRulesLoader;
