// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! German Reservation Extractor
//!
//! Extracts structured table reservations from free-form German text such
//! as emails or chat messages.
//!
//! # Features
//!
//! - Guest name from the signature after a closing phrase
//! - Absolute, partial and relative dates ("übermorgen", "in 3 Wochen",
//!   "übernächsten Freitag")
//! - Clock times with range and morning/evening handling
//! - Party size from counts, idioms ("zu zweit") and ranges
//! - Decoding of German number words ("zweihundertdreiunddreißig")
//!
//! # Example
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use reservation_extract::{ReservationRequest, parse_reservation};
//!
//! let timestamp = NaiveDate::from_ymd_opt(2025, 3, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let request = ReservationRequest::at(
//!     "Guten Tag, einen Tisch für 8 Mann am 1.5. 9 Uhr abends, Gruß Franz Schulze",
//!     timestamp,
//! );
//! let data = parse_reservation(&request);
//!
//! assert_eq!(data.name.as_deref(), Some("Franz Schulze"));
//! assert_eq!(data.date, NaiveDate::from_ymd_opt(2025, 5, 1));
//! assert_eq!(data.time, NaiveTime::from_hms_opt(21, 0, 0));
//! assert_eq!(data.party_size, Some(8));
//! ```

mod date;
mod error;
mod name;
mod normalize;
mod numbers;
mod parser;
mod party;
mod patterns;
mod time;
mod types;
mod validate;

pub use date::extract_date;
pub use error::{DecodeError, Result, ValidationError};
pub use name::extract_name;
pub use normalize::normalize;
pub use numbers::decode;
pub use parser::{ReservationParser, RuleBasedParser, parse_reservation};
pub use party::extract_party_size;
pub use time::extract_time;
pub use types::*;
pub use validate::{is_valid, validate};
