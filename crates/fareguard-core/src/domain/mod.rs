// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Fareguard.
//!
//! This module contains pure business logic with ZERO I/O dependencies.
//! Reading the current date (the one environmental input the rules need) is
//! handled via the `Clock` port defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or clock reads
//! - **Deterministic**: The rule chain is a pure function of its arguments
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Policy lives in the rules registry, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod rules;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    common::PassengerCounts, itinerary::ValidatedSearch, request::SearchRequest,
};

pub use error::{DomainError, ErrorCategory};

pub use rules::{
    CABIN_REGISTRY, CabinDef, MAX_CHILDREN_PER_ADULT, MAX_INFANTS_PER_ADULT, MAX_PARTY, MIN_PARTY,
    RulesConfig,
};

pub use value_objects::{AirportCode, CabinClass, TravelDate};

pub use validation::SearchValidator;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn airport_code_parses_correctly() {
        assert_eq!(AirportCode::from_str("mel").unwrap().as_str(), "mel");
        assert_eq!(AirportCode::from_str("SYD").unwrap().as_str(), "syd");
        assert!(AirportCode::from_str("melbourne").is_err());
    }

    #[test]
    fn cabin_class_parses_correctly() {
        assert_eq!(
            CabinClass::from_str("economy").unwrap(),
            CabinClass::Economy
        );
        assert_eq!(
            CabinClass::from_str("Premium Economy").unwrap(),
            CabinClass::PremiumEconomy
        );
        assert!(CabinClass::from_str("steerage").is_err());
    }

    #[test]
    fn travel_date_is_strict() {
        assert!(TravelDate::parse("departure date", "01/01/2027").is_ok());
        assert!(TravelDate::parse("departure date", "1/1/2027").is_err());
        assert!(TravelDate::parse("departure date", "29/02/2026").is_err());
    }

    // ========================================================================
    // Rule Chain Tests (cross-module wiring)
    // ========================================================================

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn chain_uses_registry_policy() {
        // A request that is fine except for the cabin registry's
        // first-class children rule.
        let request = SearchRequest::new(
            "mel",
            "syd",
            "01/09/2026",
            "08/09/2026",
            "first",
            1,
            1,
            0,
            false,
        );
        let result = SearchValidator::evaluate(&request, &RulesConfig::default(), today());
        assert!(matches!(
            result,
            Err(DomainError::ChildrenNotPermittedInCabin { .. })
        ));
    }

    #[test]
    fn chain_uses_allow_set_from_config() {
        // A config serving only two airports accepts them and nothing else.
        let rules = RulesConfig::new(
            [AirportCode::new("akl").unwrap(), AirportCode::new("wlg").unwrap()]
                .into_iter()
                .collect(),
        )
        .unwrap();

        let request = SearchRequest::new(
            "akl",
            "wlg",
            "01/09/2026",
            "08/09/2026",
            "economy",
            1,
            0,
            0,
            false,
        );
        assert!(SearchValidator::evaluate(&request, &rules, today()).is_ok());

        let request = SearchRequest::new(
            "mel",
            "wlg",
            "01/09/2026",
            "08/09/2026",
            "economy",
            1,
            0,
            0,
            false,
        );
        assert!(matches!(
            SearchValidator::evaluate(&request, &rules, today()),
            Err(DomainError::UnknownAirport { .. })
        ));
    }

    #[test]
    fn error_categories_partition_sensibly() {
        assert_eq!(
            DomainError::MalformedDate {
                field: "departure date",
                text: "x".into()
            }
            .category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::ChildrenInEmergencyRow.category(),
            ErrorCategory::Policy
        );
        assert_eq!(
            DomainError::EmptyAllowSet.category(),
            ErrorCategory::Configuration
        );
    }

    #[test]
    fn suggestions_are_never_empty() {
        let errors = [
            DomainError::EmptyAllowSet,
            DomainError::ChildrenInEmergencyRow,
            DomainError::PartySizeOutOfRange { total: 10 },
            DomainError::UnknownAirport { code: "zzz".into() },
        ];
        for error in errors {
            assert!(!error.suggestions().is_empty(), "{error} has no suggestions");
        }
    }
}
