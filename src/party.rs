//! Party size extraction
//!
//! Several independent patterns contribute candidates and the largest one
//! wins, so conflicting signals err on the side of enough seats.

use crate::patterns::{PARTY_DIRECT_REGEX, PARTY_QUALIFIED_REGEX, PARTY_RANGE_REGEX};
use tracing::trace;

/// Extract the number of guests from normalized text
#[must_use]
pub fn extract_party_size(normalized: &str) -> Option<u32> {
    let direct = PARTY_DIRECT_REGEX
        .captures_iter(normalized)
        .filter_map(|caps| caps["count"].parse::<u32>().ok());

    let qualified = PARTY_QUALIFIED_REGEX
        .captures_iter(normalized)
        .filter_map(|caps| {
            if caps.name("tail").is_some() {
                trace!("Discarding party size candidate {}", &caps[0]);
                return None;
            }
            caps["count"].parse::<u32>().ok()
        });

    let ranges = PARTY_RANGE_REGEX.captures_iter(normalized).filter_map(|caps| {
        let low = caps["low"].parse::<u32>().ok()?;
        let high = caps["high"].parse::<u32>().ok()?;
        Some(low.max(high))
    });

    direct.chain(qualified).chain(ranges).max()
}
