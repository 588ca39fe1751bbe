//! The `ValidatedSearch` record - the rule chain's only output.
//!
//! A `ValidatedSearch` is the fully-normalised, fully-checked form of a
//! search request. Constructing one is the *last* step of the rule chain;
//! once it exists, every invariant of the policy holds:
//!
//! - origin and destination are served airports and differ
//! - departure is not in the past, return is not before departure
//! - the party fits the size and supervision rules
//! - the seating request is legal for the cabin class and party
//!
//! Construction is `pub(crate)` so nothing outside the domain can fabricate
//! a record that skipped the chain.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::{
    entities::common::PassengerCounts,
    value_objects::{AirportCode, CabinClass},
};

/// A committed, fully-validated flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSearch {
    origin: AirportCode,
    destination: AirportCode,
    depart_date: NaiveDate,
    return_date: NaiveDate,
    cabin_class: CabinClass,
    passengers: PassengerCounts,
    emergency_row: bool,
}

impl ValidatedSearch {
    /// Assemble a record from already-checked parts.
    ///
    /// Only the rule chain calls this, after every rule has passed.
    pub(crate) fn new(
        origin: AirportCode,
        destination: AirportCode,
        depart_date: NaiveDate,
        return_date: NaiveDate,
        cabin_class: CabinClass,
        passengers: PassengerCounts,
        emergency_row: bool,
    ) -> Self {
        Self {
            origin,
            destination,
            depart_date,
            return_date,
            cabin_class,
            passengers,
            emergency_row,
        }
    }

    pub const fn origin(&self) -> &AirportCode {
        &self.origin
    }

    pub const fn destination(&self) -> &AirportCode {
        &self.destination
    }

    pub const fn depart_date(&self) -> NaiveDate {
        self.depart_date
    }

    pub const fn return_date(&self) -> NaiveDate {
        self.return_date
    }

    pub const fn cabin_class(&self) -> CabinClass {
        self.cabin_class
    }

    pub const fn passengers(&self) -> PassengerCounts {
        self.passengers
    }

    pub const fn emergency_row(&self) -> bool {
        self.emergency_row
    }
}

impl fmt::Display for ValidatedSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}, {} / {}, {} ({})",
            self.origin,
            self.destination,
            self.depart_date.format("%d/%m/%Y"),
            self.return_date.format("%d/%m/%Y"),
            self.cabin_class,
            self.passengers,
        )?;
        if self.emergency_row {
            write!(f, " [emergency row]")?;
        }
        Ok(())
    }
}
