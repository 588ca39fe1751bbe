//! Fareguard Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Fareguard
//! flight-search validator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Calling code                 │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (SearchService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Driven: Clock, RulesSource)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    fareguard-adapters (Infrastructure)  │
//! │  (ZonedClock, FixedClock, TomlRules...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (SearchValidator, rules registry,      │
//! │   ValidatedSearch)  No I/O dependencies │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fareguard_core::{
//!     application::SearchService,
//!     domain::SearchRequest,
//! };
//! # fn clock() -> Box<dyn fareguard_core::application::Clock> { unimplemented!() }
//!
//! // 1. Build the service (with an injected clock adapter)
//! let mut service = SearchService::with_default_rules(clock());
//!
//! // 2. Validate a raw request
//! let request = SearchRequest::new(
//!     "mel", "syd", "01/12/2026", "15/12/2026", "economy", 2, 1, 0, false,
//! );
//! if service.validate(&request).is_accepted() {
//!     let search = service.last_committed().unwrap();
//!     println!("booked search: {search}");
//! }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        SearchService, ValidationOutcome,
        ports::{Clock, RulesSource},
    };
    pub use crate::domain::{
        AirportCode, CabinClass, PassengerCounts, RulesConfig, SearchRequest, SearchValidator,
        TravelDate, ValidatedSearch,
    };
    pub use crate::error::{FareguardError, FareguardResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
