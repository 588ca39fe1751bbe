//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `fareguard-adapters` crate provides implementations.

use chrono::NaiveDate;

use crate::domain::RulesConfig;
use crate::error::FareguardResult;

/// Port for reading the reference date.
///
/// Implemented by:
/// - `fareguard_adapters::clock::ZonedClock` (production, IANA-zone pinned)
/// - `fareguard_adapters::clock::FixedClock` (testing)
///
/// ## Design Notes
///
/// "Not in the past" is judged against the operator's reference time zone,
/// not the machine's local zone, so validation behaves identically wherever
/// the process runs. Injecting the read keeps the rule chain deterministic
/// and lets tests pin the calendar.
pub trait Clock: Send + Sync {
    /// The current date in the reference time zone.
    fn today(&self) -> NaiveDate;
}

/// Port for loading the allow-set configuration.
///
/// Implemented by:
/// - `fareguard_adapters::rules_loader::TomlRulesLoader` (rules.toml)
///
/// This is the single external interface through which the served-airport
/// set can change; everything else about the policy is compiled in.
pub trait RulesSource: Send + Sync {
    /// Load and validate a rules configuration.
    fn load(&self) -> FareguardResult<RulesConfig>;
}
