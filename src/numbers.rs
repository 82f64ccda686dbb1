//! German number-word decoding
//!
//! Turns cardinal words such as "einundzwanzig" or
//! "dreihundertfünfundzwanzigtausendsechshundertsiebenundvierzig" into
//! integers by consuming the word left to right: scale words first, then
//! tens, then units, with "und" as a linking syllable.

use crate::error::{DecodeError, Result};
use crate::patterns::{SCALES, TENS, UNITS};

/// Decode a German number word (or a plain integer literal) into its value
pub fn decode(word: &str) -> Result<i64> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err(DecodeError::Empty);
    }

    if let Ok(number) = word.parse::<i64>() {
        return Ok(number);
    }

    let (sign, body) = word
        .strip_prefix("minus")
        .map_or((1, word.as_str()), |rest| (-1, rest));

    if body == "null" {
        return Ok(0);
    }
    if body.is_empty() {
        return Err(DecodeError::Unrecognized(word.clone()));
    }

    decompose(body, 0, 0)
        .and_then(|value| value.checked_mul(sign))
        .ok_or_else(|| DecodeError::Unrecognized(word.clone()))
}

/// Depth-first walk over the remaining word; the first complete parse wins
fn decompose(rest: &str, sum: i64, current: i64) -> Option<i64> {
    if rest.is_empty() {
        return sum.checked_add(current);
    }

    let rest = rest.strip_prefix("und").unwrap_or(rest);

    for (scale_word, scale) in SCALES {
        if let Some(remaining) = rest.strip_prefix(scale_word) {
            let factor = current.max(1).checked_mul(*scale);
            let step = if *scale > 100 {
                factor
                    .and_then(|flushed| sum.checked_add(flushed))
                    .map(|sum| (sum, 0))
            } else {
                factor.map(|current| (sum, current))
            };
            if let Some((sum, current)) = step
                && let Some(total) = decompose(remaining, sum, current)
            {
                return Some(total);
            }
        }
    }

    for (word, value) in TENS.iter().chain(UNITS) {
        if let Some(remaining) = rest.strip_prefix(word)
            && let Some(current) = current.checked_add(*value)
            && let Some(total) = decompose(remaining, sum, current)
        {
            return Some(total);
        }
    }

    None
}
