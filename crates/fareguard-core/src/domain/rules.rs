//! Seating and party policy registry.
//!
//! # Design Rationale
//!
//! Occupancy policy ("children may not fly first", "emergency rows are
//! economy-only") could be scattered across `match` arms on [`CabinClass`].
//! Instead each cabin class is described exactly once by its [`CabinDef`]:
//! all checks are O(n) table lookups over a four-entry registry.
//!
//! # Changing Policy
//!
//! 1. Edit the relevant [`CabinDef`] entry in [`CABIN_REGISTRY`]
//! 2. That's it — no other files change
//!
//! Party-size limits are plain constants here for the same reason: the rule
//! chain in `validation.rs` reads them, tests assert against them, and
//! nothing else defines a number.

use crate::domain::error::DomainError;
use crate::domain::value_objects::{AirportCode, CabinClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ── Party limits ─────────────────────────────────────────────────────────────

/// Smallest bookable party.
pub const MIN_PARTY: u32 = 1;

/// Largest bookable party (adults + children + infants).
pub const MAX_PARTY: u32 = 9;

/// Each adult may supervise at most this many children.
pub const MAX_CHILDREN_PER_ADULT: u32 = 2;

/// Each adult may carry at most this many lap infants.
pub const MAX_INFANTS_PER_ADULT: u32 = 1;

// ── Cabin definitions ────────────────────────────────────────────────────────

/// Describes everything the domain needs to know about one cabin class.
///
/// This is the single source of truth for a class's occupancy rules. All
/// seating checks in the rule chain derive from here.
#[derive(Debug, Clone, Copy)]
pub struct CabinDef {
    /// The cabin class this entry describes.
    pub class: CabinClass,

    /// Whether children (2-11 years) may occupy seats in this class.
    pub allows_children: bool,

    /// Whether lap infants may travel in this class.
    pub allows_infants: bool,

    /// Whether this class has emergency-row seating at all.
    ///
    /// At most one entry should be `true`; the registry-integrity test
    /// enforces this invariant.
    pub allows_emergency_row: bool,
}

/// Single source of truth for cabin occupancy policy.
///
/// To change policy: edit one entry here. No `match` arms elsewhere.
pub static CABIN_REGISTRY: &[CabinDef] = &[
    CabinDef {
        class: CabinClass::Economy,
        allows_children: true,
        allows_infants: true,
        allows_emergency_row: true, // The only class with emergency rows
    },
    CabinDef {
        class: CabinClass::PremiumEconomy,
        allows_children: true,
        allows_infants: true,
        allows_emergency_row: false,
    },
    CabinDef {
        class: CabinClass::Business,
        allows_children: true,
        allows_infants: false, // No bassinet/lap-infant provision
        allows_emergency_row: false,
    },
    CabinDef {
        class: CabinClass::First,
        allows_children: false, // Adults-only cabin
        allows_infants: true,
        allows_emergency_row: false,
    },
];

fn cabin_def(class: CabinClass) -> &'static CabinDef {
    CABIN_REGISTRY
        .iter()
        .find(|def| def.class == class)
        .expect("every CabinClass variant has a registry entry")
}

/// Whether children may occupy seats in `class`.
pub fn cabin_allows_children(class: CabinClass) -> bool {
    cabin_def(class).allows_children
}

/// Whether lap infants may travel in `class`.
pub fn cabin_allows_infants(class: CabinClass) -> bool {
    cabin_def(class).allows_infants
}

/// Whether `class` has emergency-row seating.
pub fn cabin_allows_emergency_row(class: CabinClass) -> bool {
    cabin_def(class).allows_emergency_row
}

// ── Allow-set configuration ──────────────────────────────────────────────────

/// Immutable validator configuration: the set of served airports.
///
/// Built once at startup, either from [`RulesConfig::default`] (the built-in
/// network) or by a `RulesSource` adapter reading external configuration,
/// and passed to the validator service. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    airports: BTreeSet<AirportCode>,
}

impl RulesConfig {
    /// Create a config from an explicit allow-set.
    ///
    /// An empty set would reject every request, which is always a
    /// configuration mistake, so it is refused here.
    pub fn new(airports: BTreeSet<AirportCode>) -> Result<Self, DomainError> {
        if airports.is_empty() {
            return Err(DomainError::EmptyAllowSet);
        }
        Ok(Self { airports })
    }

    /// The built-in served-airport network.
    pub fn default_airports() -> BTreeSet<AirportCode> {
        ["syd", "mel", "lax", "cdg", "del", "pvg", "doh"]
            .into_iter()
            .map(|code| AirportCode::new(code).expect("built-in codes are well-formed"))
            .collect()
    }

    /// Whether `code` is a served airport.
    pub fn allows(&self, code: &AirportCode) -> bool {
        self.airports.contains(code)
    }

    pub fn airports(&self) -> &BTreeSet<AirportCode> {
        &self.airports
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            airports: Self::default_airports(),
        }
    }
}
