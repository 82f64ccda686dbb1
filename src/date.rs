//! Reservation date extraction
//!
//! Resolution runs in a fixed order and the first hit wins: absolute date,
//! partial date, "morgen"/"übermorgen", "in N Tagen/Wochen/...", qualified
//! units ("nächste Woche") and finally weekday names.

use crate::patterns::{
    ABSOLUTE_DATE_REGEX, DURATION_ITEM_REGEX, DURATION_LIST_REGEX, PARTIAL_DATE_REGEX,
    QUALIFIED_UNIT_REGEX, RELATIVE_DAY_REGEX, WEEKDAY_ABBREVIATION_REGEX, WEEKDAY_REGEX,
    weekday_index,
};
use chrono::{Datelike, Days, Months, NaiveDate};
use regex::Captures;
use tracing::trace;

/// Calendar unit of a relative offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "tag" => Some(Self::Day),
            "woche" => Some(Self::Week),
            "monat" => Some(Self::Month),
            "jahr" => Some(Self::Year),
            _ => None,
        }
    }

    fn shift(self, date: NaiveDate, amount: u32) -> Option<NaiveDate> {
        match self {
            Self::Day => date.checked_add_days(Days::new(u64::from(amount))),
            Self::Week => date.checked_add_days(Days::new(u64::from(amount) * 7)),
            Self::Month => date.checked_add_months(Months::new(amount)),
            Self::Year => date.checked_add_months(Months::new(amount.checked_mul(12)?)),
        }
    }
}

/// Extract the reservation date from normalized text
///
/// `reference` anchors every relative expression and supplies the year of
/// partial dates such as `19.3.`.
#[must_use]
pub fn extract_date(normalized: &str, reference: NaiveDate) -> Option<NaiveDate> {
    absolute_date(normalized)
        .or_else(|| partial_date(normalized, reference.year()))
        .or_else(|| relative_day(normalized, reference))
        .or_else(|| duration_offset(normalized, reference))
        .or_else(|| qualified_unit(normalized, reference))
        .or_else(|| weekday(normalized, reference))
}

fn absolute_date(text: &str) -> Option<NaiveDate> {
    ABSOLUTE_DATE_REGEX.captures_iter(text).find_map(|caps| {
        let year: i32 = caps["year"].parse().ok()?;
        let year = if caps["year"].len() == 2 { 2000 + year } else { year };
        calendar_date(&caps, year)
    })
}

fn partial_date(text: &str, year: i32) -> Option<NaiveDate> {
    PARTIAL_DATE_REGEX.captures_iter(text).find_map(|caps| {
        if caps.name("clock").is_some() {
            trace!("Discarding clock time {} as a date", &caps[0]);
            return None;
        }
        calendar_date(&caps, year)
    })
}

fn calendar_date(caps: &Captures, year: i32) -> Option<NaiveDate> {
    let day: u32 = caps["day"].parse().ok()?;
    let month: u32 = caps["month"].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day);
    if date.is_none() {
        trace!("Discarding invalid calendar date {}", &caps[0]);
    }
    date
}

fn relative_day(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    // "uebermorgen" has to win even when a bare "morgen" appears first
    let days = if RELATIVE_DAY_REGEX
        .captures_iter(text)
        .any(|caps| caps.name("over").is_some())
    {
        2
    } else if RELATIVE_DAY_REGEX.is_match(text) {
        1
    } else {
        return None;
    };
    reference.checked_add_days(Days::new(days))
}

fn duration_offset(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let mut date = reference;
    let mut applied = false;

    for list in DURATION_LIST_REGEX.captures_iter(text) {
        for item in DURATION_ITEM_REGEX.captures_iter(&list["list"]) {
            let (Ok(amount), Some(unit)) =
                (item["amount"].parse::<u32>(), Unit::parse(&item["unit"]))
            else {
                trace!("Discarding duration {}", &item[0]);
                continue;
            };
            if let Some(shifted) = unit.shift(date, amount) {
                date = shifted;
                applied = true;
            }
        }
    }

    applied.then_some(date)
}

fn qualified_unit(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let caps = QUALIFIED_UNIT_REGEX.captures(text)?;
    let unit = Unit::parse(&caps["unit"])?;
    unit.shift(reference, offset(&caps))
}

fn weekday(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let caps = WEEKDAY_REGEX
        .captures(text)
        .or_else(|| WEEKDAY_ABBREVIATION_REGEX.captures(text))?;
    let target = weekday_index(&caps["day"])?;
    let current = reference.weekday().number_from_monday();

    let mut days = (target + 7 - current) % 7;
    if days == 0 {
        days = 7;
    }
    if offset(&caps) > 1 {
        days += 7;
    }
    reference.checked_add_days(Days::new(u64::from(days)))
}

/// One unit ahead for "nächste"/"kommende", two for "übernächste"
fn offset(caps: &Captures) -> u32 {
    if caps.name("over").is_some() { 2 } else { 1 }
}
