//! Reservation time extraction

use crate::patterns::{EVENING_REGEX, MORNING_REGEX, TIME_RANGE_REGEX, TIME_REGEX};
use chrono::{NaiveTime, Timelike};
use regex::Captures;
use tracing::trace;

/// Extract the reservation time from normalized text
///
/// A range such as "zwischen 18 und 19 uhr" resolves to its earlier bound.
/// Morning and evening markers shift 12-hour readings, so "9 uhr abends"
/// becomes 21:00.
#[must_use]
pub fn extract_time(normalized: &str) -> Option<NaiveTime> {
    let time = time_range(normalized).or_else(|| single_time(normalized))?;
    Some(apply_day_period(normalized, time))
}

fn time_range(text: &str) -> Option<NaiveTime> {
    TIME_RANGE_REGEX.captures_iter(text).find_map(|caps| {
        let from = clock(&caps, "from_h", "from_m")?;
        let to = clock(&caps, "to_h", "to_m")?;
        Some(from.min(to))
    })
}

fn single_time(text: &str) -> Option<NaiveTime> {
    TIME_REGEX.captures_iter(text).find_map(|caps| {
        if caps.name("h").is_some() {
            clock(&caps, "h", "m")
        } else {
            clock(&caps, "uhr_h", "uhr_m")
        }
    })
}

/// Build a time from an hour group and an optional minute group
fn clock(caps: &Captures, hour: &str, minute: &str) -> Option<NaiveTime> {
    let h: u32 = caps.name(hour)?.as_str().parse().ok()?;
    let m: u32 = caps
        .name(minute)
        .map_or(Ok(0), |m| m.as_str().parse())
        .ok()?;
    let time = NaiveTime::from_hms_opt(h, m, 0);
    if time.is_none() {
        trace!("Discarding invalid clock time {}", &caps[0]);
    }
    time
}

fn apply_day_period(text: &str, time: NaiveTime) -> NaiveTime {
    let mut hour = time.hour();
    if MORNING_REGEX.is_match(text) && hour > 12 {
        hour -= 12;
    }
    if EVENING_REGEX.is_match(text) && hour < 12 {
        hour += 12;
    }
    time.with_hour(hour).unwrap_or(time)
}
