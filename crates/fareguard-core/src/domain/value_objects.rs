//! Domain value objects: AirportCode, CabinClass, TravelDate.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity. They hold NO
//! seating-policy logic. All occupancy and party rules live in `rules.rs`.
//! This file's only job is to define the types, their string representations,
//! and their parsers.
//!
//! Parsing is where input normalisation happens: every constructor lower-cases
//! and trims before matching, so callers can feed untrusted text straight in.
//! Normalisation itself never fails; unrecognised input becomes a typed
//! `DomainError`, never a panic.

use crate::domain::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── AirportCode ──────────────────────────────────────────────────────────────

/// A three-letter airport code, stored lowercase.
///
/// Invariant: exactly three ASCII letters. Enforced at construction. Whether
/// a code is actually *served* is a separate question answered by the
/// allow-set in [`crate::domain::rules::RulesConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    /// Parse and normalise a code.
    ///
    /// Trims surrounding whitespace and lower-cases before checking shape.
    pub fn new(code: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = code.as_ref().trim().to_ascii_lowercase();
        if normalized.len() == 3 && normalized.bytes().all(|b| b.is_ascii_lowercase()) {
            Ok(Self(normalized))
        } else {
            Err(DomainError::InvalidAirportCode {
                code: code.as_ref().to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AirportCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AirportCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AirportCode> for String {
    fn from(code: AirportCode) -> Self {
        code.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── CabinClass ───────────────────────────────────────────────────────────────

/// A bookable cabin class.
///
/// To change what a class permits (children, infants, emergency rows), edit
/// the registry entry in `rules.rs`. No match arms here carry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    Economy,
    #[serde(rename = "premium economy")]
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::PremiumEconomy => "premium economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }

    /// All classes, in fare order.
    pub const fn all() -> [CabinClass; 4] {
        [
            Self::Economy,
            Self::PremiumEconomy,
            Self::Business,
            Self::First,
        ]
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CabinClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(Self::Economy),
            "premium economy" | "premium-economy" | "premium_economy" => Ok(Self::PremiumEconomy),
            "business" => Ok(Self::Business),
            "first" => Ok(Self::First),
            other => Err(DomainError::UnknownCabinClass {
                value: other.to_string(),
            }),
        }
    }
}

// ── TravelDate ───────────────────────────────────────────────────────────────

/// A calendar date parsed from strict `dd/mm/yyyy` text.
///
/// Strict means two things:
/// - shape: exactly ten characters, zero-padded day and month, four-digit
///   year (`05/02/2026`, never `5/2/26` or ISO `2026-02-05`);
/// - calendar: the combination must exist (`31/11/2025` and `29/02/2026`
///   are rejected; `29/02/2028` is a real leap day).
///
/// Calendar resolution is delegated to [`chrono::NaiveDate`]; the shape check
/// exists because chrono's numeric parsers are lenient about padding and
/// year width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TravelDate(NaiveDate);

const DATE_FORMAT: &str = "%d/%m/%Y";

impl TravelDate {
    /// Parse `text` as a strict dd/mm/yyyy date.
    ///
    /// `field` names the input slot ("departure date" / "return date") for
    /// diagnostics only; it does not affect parsing.
    pub fn parse(field: &'static str, text: &str) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedDate {
            field,
            text: text.to_string(),
        };

        let bytes = text.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[2] == b'/'
            && bytes[5] == b'/'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| matches!(i, 2 | 5) || b.is_ascii_digit());
        if !shape_ok {
            return Err(malformed());
        }

        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| malformed())
    }

    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for TravelDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
