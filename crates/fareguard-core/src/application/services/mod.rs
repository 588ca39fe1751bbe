//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "validate a search request and commit the result".

pub mod search_service;

pub use search_service::{SearchService, ValidationOutcome};
