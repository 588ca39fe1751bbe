//! The search-request rule chain.
//!
//! Centralized domain validation: every business rule a request must pass
//! lives here, in one ordered, short-circuiting sequence. The chain is a
//! pure function of `(request, rules, today)` - the current date is an
//! argument, never read from the environment, so evaluation is fully
//! deterministic and replayable in tests.
//!
//! The only way to obtain a [`ValidatedSearch`] is to run the chain to the
//! end; the record is assembled after the final rule, so no partially-valid
//! state can escape.

use chrono::NaiveDate;

use crate::domain::{
    entities::{PassengerCounts, SearchRequest, ValidatedSearch},
    error::DomainError,
    rules::{
        self, MAX_CHILDREN_PER_ADULT, MAX_INFANTS_PER_ADULT, MAX_PARTY, MIN_PARTY, RulesConfig,
    },
    value_objects::{AirportCode, CabinClass, TravelDate},
};

/// Centralized domain validation.
///
/// All rule logic lives here, not scattered across entities.
pub struct SearchValidator;

impl SearchValidator {
    /// Run the full rule chain over a raw request.
    ///
    /// Rules are evaluated in a fixed order and the first failure aborts
    /// with its typed error. Order of checks:
    ///
    /// 1. both date texts parse as strict dd/mm/yyyy calendar dates
    /// 2. departure is not before `today`
    /// 3. return is not before departure (same-day is a legal two-way trip)
    /// 4. origin and destination are served airports and differ
    /// 5. cabin class names a member of the allowed set
    /// 6. counts are non-negative and the party totals 1 to 9
    /// 7. at most two children per adult
    /// 8. at most one infant per adult
    /// 9. a party with children cannot take an emergency row or first class
    /// 10. a party with infants cannot take an emergency row or business class
    /// 11. an emergency-row request requires economy
    pub fn evaluate(
        request: &SearchRequest,
        rules: &RulesConfig,
        today: NaiveDate,
    ) -> Result<ValidatedSearch, DomainError> {
        // 1. Strict calendar parsing.
        let depart = TravelDate::parse("departure date", &request.depart_date)?.date();
        let ret = TravelDate::parse("return date", &request.return_date)?.date();

        // 2. No departures in the past (relative to the reference zone's today).
        if depart < today {
            return Err(DomainError::DepartureInPast { depart, today });
        }

        // 3. Two-way only: the return leg cannot precede the outbound.
        if ret < depart {
            return Err(DomainError::ReturnBeforeDeparture { depart, ret });
        }

        // 4. Airports: well-formed, served, and distinct.
        let origin = Self::served_airport(&request.origin, rules)?;
        let destination = Self::served_airport(&request.destination, rules)?;
        if origin == destination {
            return Err(DomainError::IdenticalAirports {
                code: origin.as_str().to_string(),
            });
        }

        // 5. Cabin class membership (the parse *is* the allow-set check).
        let cabin_class: CabinClass = request.cabin_class.parse()?;

        // 6. Party size.
        let passengers =
            PassengerCounts::try_new(request.adults, request.children, request.infants)?;
        let total = passengers.total();
        if !(u64::from(MIN_PARTY)..=u64::from(MAX_PARTY)).contains(&total) {
            return Err(DomainError::PartySizeOutOfRange { total });
        }

        // 7. Child supervision ratio. Also covers "children need an adult":
        // with zero adults the limit is zero. Widened math so extreme counts
        // cannot wrap.
        if u64::from(passengers.children())
            > u64::from(passengers.adults()) * u64::from(MAX_CHILDREN_PER_ADULT)
        {
            return Err(DomainError::TooManyChildren {
                children: passengers.children(),
                adults: passengers.adults(),
            });
        }

        // 8. Infant supervision ratio.
        if u64::from(passengers.infants())
            > u64::from(passengers.adults()) * u64::from(MAX_INFANTS_PER_ADULT)
        {
            return Err(DomainError::TooManyInfants {
                infants: passengers.infants(),
                adults: passengers.adults(),
            });
        }

        // 9. Children: never in emergency rows, never in adults-only cabins.
        if passengers.children() > 0 {
            if request.emergency_row {
                return Err(DomainError::ChildrenInEmergencyRow);
            }
            if !rules::cabin_allows_children(cabin_class) {
                return Err(DomainError::ChildrenNotPermittedInCabin {
                    cabin: cabin_class.to_string(),
                });
            }
        }

        // 10. Infants: never in emergency rows, never where no lap-infant
        // provision exists.
        if passengers.infants() > 0 {
            if request.emergency_row {
                return Err(DomainError::InfantsInEmergencyRow);
            }
            if !rules::cabin_allows_infants(cabin_class) {
                return Err(DomainError::InfantsNotPermittedInCabin {
                    cabin: cabin_class.to_string(),
                });
            }
        }

        // 11. Emergency rows only exist in classes that have them.
        if request.emergency_row && !rules::cabin_allows_emergency_row(cabin_class) {
            return Err(DomainError::EmergencyRowNotPermitted {
                cabin: cabin_class.to_string(),
            });
        }

        // All rules passed: assemble the record. This is the only
        // construction site for ValidatedSearch.
        Ok(ValidatedSearch::new(
            origin,
            destination,
            depart,
            ret,
            cabin_class,
            passengers,
            request.emergency_row,
        ))
    }

    fn served_airport(raw: &str, rules: &RulesConfig) -> Result<AirportCode, DomainError> {
        let code = AirportCode::new(raw)?;
        if !rules.allows(&code) {
            return Err(DomainError::UnknownAirport {
                code: code.as_str().to_string(),
            });
        }
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed reference date so the chain is deterministic under test.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn fmt(date: NaiveDate) -> String {
        date.format("%d/%m/%Y").to_string()
    }

    fn today_plus(days: i64) -> String {
        fmt(today() + chrono::Duration::days(days))
    }

    /// A request that passes every rule; tests mutate one field at a time.
    fn valid_request() -> SearchRequest {
        SearchRequest::new(
            "mel",
            "syd",
            today_plus(2),
            today_plus(5),
            "economy",
            1,
            0,
            0,
            false,
        )
    }

    fn evaluate(request: &SearchRequest) -> Result<ValidatedSearch, DomainError> {
        SearchValidator::evaluate(request, &RulesConfig::default(), today())
    }

    // ── Happy path ────────────────────────────────────────────────────────────

    #[test]
    fn fully_valid_request_commits_normalized_values() {
        let search = evaluate(&valid_request()).unwrap();
        assert_eq!(search.origin().as_str(), "mel");
        assert_eq!(search.destination().as_str(), "syd");
        assert_eq!(search.cabin_class(), CabinClass::Economy);
        assert_eq!(search.passengers().adults(), 1);
        assert!(!search.emergency_row());
    }

    #[test]
    fn mixed_case_inputs_are_normalized() {
        let mut request = valid_request();
        request.origin = "MEL".into();
        request.cabin_class = "Economy".into();
        let search = evaluate(&request).unwrap();
        assert_eq!(search.origin().as_str(), "mel");
        assert_eq!(search.cabin_class(), CabinClass::Economy);
    }

    // ── Dates ─────────────────────────────────────────────────────────────────

    #[test]
    fn departure_today_is_accepted_yesterday_rejected() {
        let mut request = valid_request();
        request.depart_date = today_plus(0);
        assert!(evaluate(&request).is_ok());

        request.depart_date = today_plus(-1);
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::DepartureInPast { .. })
        ));
    }

    #[test]
    fn same_day_return_is_accepted_earlier_return_rejected() {
        let mut request = valid_request();
        request.depart_date = today_plus(5);
        request.return_date = today_plus(5);
        assert!(evaluate(&request).is_ok());

        request.return_date = today_plus(4);
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::ReturnBeforeDeparture { .. })
        ));
    }

    #[test]
    fn malformed_or_impossible_dates_are_rejected() {
        for bad in ["2026-12-01", "31/11/2026", "29/02/2026", "not a date"] {
            let mut request = valid_request();
            request.depart_date = bad.into();
            assert!(
                matches!(evaluate(&request), Err(DomainError::MalformedDate { .. })),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn real_leap_day_is_accepted() {
        let mut request = valid_request();
        request.depart_date = "29/02/2028".into();
        request.return_date = "29/02/2028".into();
        assert!(evaluate(&request).is_ok());
    }

    // ── Airports ──────────────────────────────────────────────────────────────

    #[test]
    fn unserved_airport_is_rejected() {
        let mut request = valid_request();
        request.origin = "zzz".into();
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::UnknownAirport { .. })
        ));
    }

    #[test]
    fn identical_origin_and_destination_rejected() {
        let mut request = valid_request();
        request.destination = "mel".into();
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::IdenticalAirports { .. })
        ));
    }

    #[test]
    fn identical_airports_detected_across_case() {
        let mut request = valid_request();
        request.origin = "MEL".into();
        request.destination = "mel".into();
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::IdenticalAirports { .. })
        ));
    }

    // ── Cabin class ───────────────────────────────────────────────────────────

    #[test]
    fn unknown_cabin_class_rejected() {
        let mut request = valid_request();
        request.cabin_class = "coach".into();
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::UnknownCabinClass { .. })
        ));
    }

    // ── Party size ────────────────────────────────────────────────────────────

    #[test]
    fn party_totals_one_and_nine_accepted() {
        let mut request = valid_request();
        request.adults = 1;
        assert!(evaluate(&request).is_ok());

        request.adults = 9;
        assert!(evaluate(&request).is_ok());
    }

    #[test]
    fn party_totals_zero_and_ten_rejected() {
        let mut request = valid_request();
        request.adults = 0;
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::PartySizeOutOfRange { total: 0 })
        ));

        request.adults = 10;
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::PartySizeOutOfRange { total: 10 })
        ));
    }

    #[test]
    fn negative_counts_rejected() {
        let mut request = valid_request();
        request.adults = 2;
        request.infants = -1;
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::NegativeCount { .. })
        ));
    }

    // ── Supervision ratios ────────────────────────────────────────────────────

    #[test]
    fn children_at_twice_adults_accepted_beyond_rejected() {
        let mut request = valid_request();
        request.adults = 2;
        request.children = 4;
        assert!(evaluate(&request).is_ok());

        request.children = 5;
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::TooManyChildren { .. })
        ));
    }

    #[test]
    fn children_without_adults_rejected_via_ratio() {
        let mut request = valid_request();
        request.adults = 0;
        request.children = 1;
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::TooManyChildren {
                children: 1,
                adults: 0
            })
        ));
    }

    #[test]
    fn infants_at_adult_parity_accepted_beyond_rejected() {
        let mut request = valid_request();
        request.adults = 2;
        request.infants = 2;
        assert!(evaluate(&request).is_ok());

        request.infants = 3;
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::TooManyInfants { .. })
        ));
    }

    // ── Seating policy ────────────────────────────────────────────────────────

    #[test]
    fn children_cannot_fly_first_class() {
        let mut request = valid_request();
        request.cabin_class = "first".into();
        request.children = 1;
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::ChildrenNotPermittedInCabin { .. })
        ));
    }

    #[test]
    fn children_cannot_take_an_emergency_row_even_in_economy() {
        let mut request = valid_request();
        request.children = 1;
        request.emergency_row = true;
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::ChildrenInEmergencyRow)
        ));
    }

    #[test]
    fn infants_cannot_fly_business_class() {
        let mut request = valid_request();
        request.cabin_class = "business".into();
        request.infants = 1;
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::InfantsNotPermittedInCabin { .. })
        ));
    }

    #[test]
    fn infants_cannot_take_an_emergency_row_even_in_economy() {
        let mut request = valid_request();
        request.infants = 1;
        request.emergency_row = true;
        assert!(matches!(
            evaluate(&request),
            Err(DomainError::InfantsInEmergencyRow)
        ));
    }

    #[test]
    fn infants_may_fly_first_class() {
        let mut request = valid_request();
        request.cabin_class = "first".into();
        request.infants = 1;
        assert!(evaluate(&request).is_ok());
    }

    #[test]
    fn emergency_row_is_economy_only() {
        let mut request = valid_request();
        request.emergency_row = true;
        assert!(evaluate(&request).is_ok());

        for cabin in ["premium economy", "business", "first"] {
            let mut request = valid_request();
            request.cabin_class = cabin.into();
            request.emergency_row = true;
            assert!(
                matches!(
                    evaluate(&request),
                    Err(DomainError::EmergencyRowNotPermitted { .. })
                ),
                "expected rejection for {cabin:?}"
            );
        }
    }

    // ── Determinism ───────────────────────────────────────────────────────────

    #[test]
    fn evaluation_is_pure_and_repeatable() {
        let request = valid_request();
        let first = evaluate(&request).unwrap();
        let second = evaluate(&request).unwrap();
        assert_eq!(first, second);
    }
}
