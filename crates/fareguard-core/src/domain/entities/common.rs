use super::super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Passenger counts known to be non-negative.
///
/// Invariant: each count fits the booking domain (no negatives). Enforced at
/// construction from untrusted signed integers. The party-size *range* and
/// the supervision ratios are deliberately NOT enforced here — they are
/// chain rules in `validation.rs`, so a counts value can exist for a party
/// the policy later rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassengerCounts {
    adults: u32,
    children: u32,
    infants: u32,
}

impl PassengerCounts {
    /// Fallible constructor from raw caller-supplied integers.
    pub fn try_new(adults: i64, children: i64, infants: i64) -> Result<Self, DomainError> {
        let check = |field: &'static str, value: i64| -> Result<u32, DomainError> {
            u32::try_from(value).map_err(|_| DomainError::NegativeCount { field, value })
        };

        Ok(Self {
            adults: check("adult", adults)?,
            children: check("child", children)?,
            infants: check("infant", infants)?,
        })
    }

    pub const fn adults(&self) -> u32 {
        self.adults
    }

    pub const fn children(&self) -> u32 {
        self.children
    }

    pub const fn infants(&self) -> u32 {
        self.infants
    }

    /// Everyone on the booking, lap infants included.
    ///
    /// Widened to u64: each count may individually be anything a caller
    /// managed to pass, and the sum must not wrap before the party-size
    /// rule gets to look at it.
    pub const fn total(&self) -> u64 {
        self.adults as u64 + self.children as u64 + self.infants as u64
    }
}

impl fmt::Display for PassengerCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}A/{}C/{}I",
            self.adults, self.children, self.infants
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accept_zero_and_positive() {
        let counts = PassengerCounts::try_new(2, 1, 0).unwrap();
        assert_eq!(counts.adults(), 2);
        assert_eq!(counts.children(), 1);
        assert_eq!(counts.infants(), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn counts_reject_any_negative_field() {
        assert!(PassengerCounts::try_new(-1, 0, 0).is_err());
        assert!(PassengerCounts::try_new(1, -2, 0).is_err());
        assert!(PassengerCounts::try_new(1, 0, -1).is_err());
    }

    #[test]
    fn zero_total_is_constructible() {
        // The party-size rule, not this type, rejects empty parties.
        assert_eq!(PassengerCounts::try_new(0, 0, 0).unwrap().total(), 0);
    }

    #[test]
    fn display_is_compact() {
        let counts = PassengerCounts::try_new(2, 4, 1).unwrap();
        assert_eq!(counts.to_string(), "2A/4C/1I");
    }
}
