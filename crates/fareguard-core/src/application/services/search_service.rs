//! Search Service - main application orchestrator.
//!
//! This service coordinates the single use case: validate a flight-search
//! request and, only on full success, commit the validated record.
//!
//! It implements the driving port (incoming) and uses the driven `Clock`
//! port (outgoing). All business rules live in the domain rule chain; this
//! layer adds state handling (the committed record), observability, and the
//! collapse of typed rejections into the uniform two-valued outcome.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Clock, RulesSource},
    domain::{RulesConfig, SearchRequest, SearchValidator as validator, ValidatedSearch},
    error::FareguardResult,
};

/// The two public outcomes of a validation run.
///
/// Deliberately cause-free: callers learn *that* a request was rejected,
/// never which rule rejected it. The typed cause is visible only through
/// tracing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected,
}

impl ValidationOutcome {
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Main validation service.
///
/// Owns the allow-set configuration, a clock port, and the last successfully
/// committed search. One instance belongs to one logical owner at a time
/// (`validate` takes `&mut self`); there is no internal locking.
pub struct SearchService {
    rules: RulesConfig,
    clock: Box<dyn Clock>,
    committed: Option<ValidatedSearch>,
}

impl SearchService {
    /// Create a service with an explicit rules configuration.
    pub fn new(rules: RulesConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            rules,
            clock,
            committed: None,
        }
    }

    /// Create a service over the built-in airport network.
    pub fn with_default_rules(clock: Box<dyn Clock>) -> Self {
        Self::new(RulesConfig::default(), clock)
    }

    /// Create a service whose rules come from a configuration source.
    pub fn from_source(source: &dyn RulesSource, clock: Box<dyn Clock>) -> FareguardResult<Self> {
        let rules = source.load()?;
        Ok(Self::new(rules, clock))
    }

    /// Validate a request; commit on full success.
    ///
    /// This is the main use case. On success the previously committed record
    /// (if any) is *replaced*; on rejection it is left byte-for-byte
    /// unchanged. All-or-nothing: the rule chain builds a candidate record
    /// from locals and only the final assignment here is observable.
    #[instrument(
        skip_all,
        fields(
            origin = %request.origin,
            destination = %request.destination,
            cabin = %request.cabin_class,
        )
    )]
    pub fn validate(&mut self, request: &SearchRequest) -> ValidationOutcome {
        match validator::evaluate(request, &self.rules, self.clock.today()) {
            Ok(search) => {
                info!(search = %search, "search request accepted");
                self.committed = Some(search);
                ValidationOutcome::Accepted
            }
            Err(error) => {
                // The cause stays here; callers get the uniform outcome.
                debug!(%error, "search request rejected");
                ValidationOutcome::Rejected
            }
        }
    }

    /// The last successfully validated search, if any.
    pub fn last_committed(&self) -> Option<&ValidatedSearch> {
        self.committed.as_ref()
    }

    /// The allow-set configuration this service validates against.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }
}
