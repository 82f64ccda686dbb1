//! Core types for reservation requests and extraction results

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inbound reservation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// Raw message text
    pub text: String,

    /// Anchor for relative dates and weekday arithmetic
    pub timestamp: NaiveDateTime,
}

impl ReservationRequest {
    /// Create a request anchored at the current local time
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::at(text, Local::now().naive_local())
    }

    /// Create a request anchored at an explicit timestamp
    #[must_use]
    pub fn at(text: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            text: text.into(),
            timestamp,
        }
    }

    /// Calendar day of the anchor timestamp
    #[must_use]
    pub fn reference_date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Structured data extracted from a reservation request
///
/// Every field is independently optional; a missing signal in the text
/// leaves its field `None` without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationData {
    /// Guest name as written in the signature
    pub name: Option<String>,

    /// Reservation day
    pub date: Option<NaiveDate>,

    /// Reservation time of day
    pub time: Option<NaiveTime>,

    /// Number of guests
    pub party_size: Option<u32>,
}

impl ReservationData {
    /// Check if nothing at all was extracted
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.party_size.is_none()
    }
}

impl fmt::Display for ReservationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("-");
        let date = self
            .date
            .map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string());
        let time = self
            .time
            .map_or_else(|| "-".to_string(), |t| t.format("%H:%M").to_string());
        let party = self
            .party_size
            .map_or_else(|| "-".to_string(), |n| n.to_string());

        write!(f, "({name}, {date}, {time}, {party})")
    }
}
