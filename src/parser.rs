//! Reservation parser implementations

use crate::date::extract_date;
use crate::name::extract_name;
use crate::normalize::normalize;
use crate::party::extract_party_size;
use crate::time::extract_time;
use crate::types::{ReservationData, ReservationRequest};
use tracing::debug;

/// Capability to turn a reservation request into structured data
///
/// Implementations never fail: fields that cannot be determined are left
/// `None` in the returned [`ReservationData`].
pub trait ReservationParser {
    fn parse(&self, request: &ReservationRequest) -> ReservationData;
}

/// Pattern-based parser for German reservation messages
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedParser;

impl RuleBasedParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReservationParser for RuleBasedParser {
    fn parse(&self, request: &ReservationRequest) -> ReservationData {
        let text = request.text.trim();
        let normalized = normalize(text);

        let data = ReservationData {
            name: extract_name(text),
            date: extract_date(&normalized, request.reference_date()),
            time: extract_time(&normalized),
            party_size: extract_party_size(&normalized),
        };

        debug!("Parsed reservation {} from {:?}", data, normalized);

        data
    }
}

/// Parse a reservation request with the rule-based parser
#[must_use]
pub fn parse_reservation(request: &ReservationRequest) -> ReservationData {
    RuleBasedParser.parse(request)
}
