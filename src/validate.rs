//! Completeness checks on extracted reservation data

use crate::error::ValidationError;
use crate::types::ReservationData;
use chrono::NaiveDate;

/// Collect every failed check, in field order
///
/// `today` is the earliest acceptable reservation day.
#[must_use]
pub fn validate(data: &ReservationData, today: NaiveDate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
        errors.push(ValidationError::MissingName);
    }

    match data.date {
        None => errors.push(ValidationError::MissingDate),
        Some(date) if date < today => errors.push(ValidationError::DateInPast { date, today }),
        Some(_) => {}
    }

    if data.time.is_none() {
        errors.push(ValidationError::MissingTime);
    }

    if data.party_size.is_none() {
        errors.push(ValidationError::MissingPartySize);
    }

    errors
}

/// Check that name, date, time and party size are all usable
#[must_use]
pub fn is_valid(data: &ReservationData, today: NaiveDate) -> bool {
    validate(data, today).is_empty()
}
