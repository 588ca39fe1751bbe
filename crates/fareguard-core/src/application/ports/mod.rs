//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `fareguard-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Clock`: today's date in the reference time zone
//!   - `RulesSource`: allow-set configuration loading
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The validate operation on `SearchService`)

pub mod output;

pub use output::{Clock, RulesSource};
