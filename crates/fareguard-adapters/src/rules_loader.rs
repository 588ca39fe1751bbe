//! Filesystem-based rules loader.
//!
//! Parses a `rules.toml` file into the domain [`RulesConfig`], making the
//! served-airport allow-set (and optionally the reference time zone)
//! operator-editable without a rebuild.
//!
//! # `rules.toml` format
//!
//! ```toml
//! [airports]
//! codes = ["syd", "mel", "lax", "cdg", "del", "pvg", "doh"]
//!
//! # Optional: the zone used to decide what "today" means.
//! # Defaults to Australia/Melbourne when omitted.
//! [clock]
//! zone = "Australia/Melbourne"
//! ```
//!
//! Codes are normalised exactly like request input (trimmed, lower-cased),
//! so `"MEL"` in the file serves `mel` at validation time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use fareguard_core::{
    application::ports::RulesSource,
    domain::{AirportCode, RulesConfig},
    error::{FareguardError, FareguardResult},
};

use crate::clock::ZonedClock;

// ── Raw (on-disk) representation ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawRules {
    airports: RawAirports,
    clock: Option<RawClock>,
}

#[derive(Debug, Deserialize)]
struct RawAirports {
    codes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawClock {
    zone: String,
}

// ── Loader ───────────────────────────────────────────────────────────────────

/// Loads validator configuration from a TOML file.
#[derive(Debug, Clone)]
pub struct TomlRulesLoader {
    path: PathBuf,
}

impl TomlRulesLoader {
    /// Create a loader for the given `rules.toml` path.
    ///
    /// Nothing is read until [`RulesSource::load`] (or [`Self::clock`]) is
    /// called, so constructing a loader never fails.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The zone-pinned clock named by the file, or the Melbourne default.
    pub fn clock(&self) -> FareguardResult<ZonedClock> {
        match self.read_raw()?.clock {
            Some(raw) => ZonedClock::from_name(&raw.zone),
            None => Ok(ZonedClock::melbourne()),
        }
    }

    fn read_raw(&self) -> FareguardResult<RawRules> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            fareguard_core::application::ApplicationError::RulesLoad {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        toml::from_str(&text).map_err(|e| {
            fareguard_core::application::ApplicationError::RulesParse {
                path: self.path.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl RulesSource for TomlRulesLoader {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> FareguardResult<RulesConfig> {
        let raw = self.read_raw()?;

        let mut airports = std::collections::BTreeSet::new();
        for code in &raw.airports.codes {
            let parsed = AirportCode::new(code).map_err(|e| {
                warn!(%code, "rejected airport code in rules file");
                fareguard_core::application::ApplicationError::RulesParse {
                    path: self.path.clone(),
                    reason: e.to_string(),
                }
            })?;
            if !airports.insert(parsed) {
                debug!(%code, "duplicate airport code in rules file");
            }
        }

        let rules = RulesConfig::new(airports).map_err(FareguardError::Domain)?;
        debug!(airports = rules.airports().len(), "rules loaded");
        Ok(rules)
    }
}
