//! Error types for reservation extraction

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while decoding a German number word
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Nothing to decode
    #[error("Input is empty")]
    Empty,

    /// The token is not fully consumed by the number grammar
    #[error("Could not decode '{0}' as a number")]
    Unrecognized(String),
}

/// A failed check on extracted reservation data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No guest name was found, or it is blank
    #[error("Missing guest name")]
    MissingName,

    /// No reservation date was found
    #[error("Missing reservation date")]
    MissingDate,

    /// The reservation date lies before the reference day
    #[error("Reservation date {date} lies before {today}")]
    DateInPast { date: NaiveDate, today: NaiveDate },

    /// No reservation time was found
    #[error("Missing reservation time")]
    MissingTime,

    /// No party size was found
    #[error("Missing party size")]
    MissingPartySize,
}

/// Result type for number decoding
pub type Result<T> = std::result::Result<T, DecodeError>;
