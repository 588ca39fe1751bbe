//! Zone-pinned system clock using chrono-tz.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use fareguard_core::{
    application::ports::Clock,
    error::{FareguardError, FareguardResult},
};

/// Production clock pinned to one IANA time zone.
///
/// "Today" is the current date *in that zone*, regardless of where the
/// process runs. A fixed UTC offset would drift across daylight-saving
/// transitions, so the zone is resolved through the tz database.
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    zone: Tz,
}

impl ZonedClock {
    /// Create a clock for an explicit zone.
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// The reference zone used by the booking rules: Australia/Melbourne.
    pub fn melbourne() -> Self {
        Self::new(chrono_tz::Australia::Melbourne)
    }

    /// Create a clock from an IANA zone identifier, e.g. from configuration.
    pub fn from_name(name: &str) -> FareguardResult<Self> {
        let zone: Tz = name.parse().map_err(|_| FareguardError::Configuration {
            message: format!("unknown time zone identifier: {name}"),
        })?;
        Ok(Self::new(zone))
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }
}

impl Default for ZonedClock {
    fn default() -> Self {
        Self::melbourne()
    }
}

impl Clock for ZonedClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.zone).date_naive()
    }
}
