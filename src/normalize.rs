//! Text normalization shared by the date, time and party-size extractors

use crate::numbers::decode;
use crate::patterns::{MONTH_REGEX, WORD_REGEX, month_number};
use regex::Captures;

/// Normalize a message for pattern matching
///
/// Lowercases, folds umlauts and ß to ASCII digraphs, rewrites month names
/// to `M.` (`"12. april"` becomes `"12.4."`) and replaces every number word
/// with its digits. The result depends on the input text only.
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded = fold_umlauts(&text.trim().to_lowercase());

    let with_months = MONTH_REGEX.replace_all(&folded, |caps: &Captures| {
        let month = month_number(&caps["month"]).unwrap_or_default();
        if caps.name("dot").is_some() {
            format!(".{month}.")
        } else {
            format!("{month}.")
        }
    });

    WORD_REGEX
        .replace_all(&with_months, |caps: &Captures| {
            let word = &caps[0];
            decode(word).map_or_else(|_| word.to_string(), |number| number.to_string())
        })
        .into_owned()
}

fn fold_umlauts(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'ä' => folded.push_str("ae"),
            'ö' => folded.push_str("oe"),
            'ü' => folded.push_str("ue"),
            'ß' => folded.push_str("ss"),
            _ => folded.push(c),
        }
    }
    folded
}
