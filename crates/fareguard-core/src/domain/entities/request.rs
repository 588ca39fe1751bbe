//! The raw, untrusted search request.

/// A flight-search request exactly as the caller supplied it.
///
/// Nothing here is validated: strings may be mixed-case or garbage, counts
/// may be negative, dates are free text. The record exists so the rule chain
/// has one value to evaluate and so tests can state inputs declaratively.
/// Field order follows the validate operation's argument order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub depart_date: String,
    pub return_date: String,
    pub cabin_class: String,
    pub adults: i64,
    pub children: i64,
    pub infants: i64,
    pub emergency_row: bool,
}

impl SearchRequest {
    #[allow(clippy::too_many_arguments)] // Mirrors the nine-field operation signature
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        depart_date: impl Into<String>,
        return_date: impl Into<String>,
        cabin_class: impl Into<String>,
        adults: i64,
        children: i64,
        infants: i64,
        emergency_row: bool,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            depart_date: depart_date.into(),
            return_date: return_date.into(),
            cabin_class: cabin_class.into(),
            adults,
            children,
            infants,
            emergency_row,
        }
    }
}
