// ============================================================================
// domain/error.rs - COMPREHENSIVE ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for display)
/// - Actionable (provides suggestions)
///
/// Note: callers of the validator service never see these directly. The
/// public outcome of a validation run is uniform accept/reject; the typed
/// variants below exist for diagnostics and logging.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input Shape Errors (400-level equivalent)
    // ========================================================================
    #[error("'{text}' is not a valid dd/mm/yyyy calendar date for {field}")]
    MalformedDate { field: &'static str, text: String },

    #[error("'{code}' is not a three-letter airport code")]
    InvalidAirportCode { code: String },

    #[error("unknown cabin class: {value}")]
    UnknownCabinClass { value: String },

    #[error("{field} count cannot be negative: {value}")]
    NegativeCount { field: &'static str, value: i64 },

    // ========================================================================
    // Itinerary Errors
    // ========================================================================
    #[error("departure {depart} is before today ({today})")]
    DepartureInPast {
        depart: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    #[error("return {ret} is before departure {depart}")]
    ReturnBeforeDeparture {
        depart: chrono::NaiveDate,
        ret: chrono::NaiveDate,
    },

    #[error("airport '{code}' is not served")]
    UnknownAirport { code: String },

    #[error("origin and destination are both '{code}'")]
    IdenticalAirports { code: String },

    // ========================================================================
    // Party Policy Violations (409-level equivalent)
    // ========================================================================
    #[error("party size {total} is outside the bookable range")]
    PartySizeOutOfRange { total: u64 },

    #[error("{children} children exceed the limit for {adults} adult(s)")]
    TooManyChildren { children: u32, adults: u32 },

    #[error("{infants} infants exceed the limit for {adults} adult(s)")]
    TooManyInfants { infants: u32, adults: u32 },

    #[error("children cannot travel in {cabin} class")]
    ChildrenNotPermittedInCabin { cabin: String },

    #[error("children cannot be seated in an emergency row")]
    ChildrenInEmergencyRow,

    #[error("infants cannot travel in {cabin} class")]
    InfantsNotPermittedInCabin { cabin: String },

    #[error("infants cannot be seated in an emergency row")]
    InfantsInEmergencyRow,

    #[error("emergency-row seating is not available in {cabin} class")]
    EmergencyRowNotPermitted { cabin: String },

    // ========================================================================
    // Configuration Violations
    // ========================================================================
    #[error("the airport allow-set is empty")]
    EmptyAllowSet,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedDate { field, text } => vec![
                format!("Dates must be dd/mm/yyyy with a four-digit year, got '{text}'"),
                format!("Check that {field} names a day that exists on the calendar"),
            ],
            Self::UnknownAirport { code } => vec![
                format!("'{code}' is not in the served-airport set"),
                "Use one of the configured three-letter codes".into(),
            ],
            Self::IdenticalAirports { .. } => {
                vec!["Origin and destination must differ".into()]
            }
            Self::UnknownCabinClass { value } => vec![
                format!("'{value}' is not a cabin class"),
                "Use one of: economy, premium economy, business, first".into(),
            ],
            Self::PartySizeOutOfRange { total } => vec![
                format!("A booking covers 1 to 9 passengers, got {total}"),
                "Split larger groups across multiple bookings".into(),
            ],
            Self::TooManyChildren { adults, .. } => vec![
                format!("At most 2 children may travel per adult ({adults} adult(s) present)"),
            ],
            Self::TooManyInfants { adults, .. } => vec![
                format!("At most 1 infant may travel per adult ({adults} adult(s) present)"),
            ],
            Self::EmergencyRowNotPermitted { .. }
            | Self::ChildrenInEmergencyRow
            | Self::InfantsInEmergencyRow => vec![
                "Emergency-row seating is economy-only and adults-only".into(),
                "Remove the emergency-row request or adjust the party".into(),
            ],
            Self::EmptyAllowSet => vec![
                "The rules configuration lists no airports".into(),
                "Check the [airports] section of rules.toml".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedDate { .. }
            | Self::InvalidAirportCode { .. }
            | Self::UnknownCabinClass { .. }
            | Self::NegativeCount { .. } => ErrorCategory::Validation,
            Self::DepartureInPast { .. }
            | Self::ReturnBeforeDeparture { .. }
            | Self::UnknownAirport { .. }
            | Self::IdenticalAirports { .. }
            | Self::PartySizeOutOfRange { .. }
            | Self::TooManyChildren { .. }
            | Self::TooManyInfants { .. }
            | Self::ChildrenNotPermittedInCabin { .. }
            | Self::ChildrenInEmergencyRow
            | Self::InfantsNotPermittedInCabin { .. }
            | Self::InfantsInEmergencyRow
            | Self::EmergencyRowNotPermitted { .. } => ErrorCategory::Policy,
            Self::EmptyAllowSet => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Policy,
    Configuration,
    Internal,
}
