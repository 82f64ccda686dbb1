//! Shared vocabularies and compiled patterns
//!
//! Every regex here runs against normalized text (lowercase, umlauts folded,
//! number words replaced by digits) except [`NAME_REGEX`], which runs
//! case-insensitively on the original message.

use regex::Regex;
use std::sync::LazyLock;

/// Scale words, highest priority during number decoding
pub const SCALES: &[(&str, i64)] = &[
    ("hundert", 100),
    ("tausend", 1_000),
    ("millionen", 1_000_000),
    ("million", 1_000_000),
    ("milliarden", 1_000_000_000),
    ("milliarde", 1_000_000_000),
];

pub const TENS: &[(&str, i64)] = &[
    ("zwanzig", 20),
    ("dreißig", 30),
    ("dreissig", 30),
    ("vierzig", 40),
    ("fünfzig", 50),
    ("fuenfzig", 50),
    ("sechzig", 60),
    ("siebzig", 70),
    ("achtzig", 80),
    ("neunzig", 90),
];

/// Unit words, including the ordinal stems of "zu zweit", "zu dritt", ...
pub const UNITS: &[(&str, i64)] = &[
    ("einen", 1),
    ("einem", 1),
    ("einer", 1),
    ("eins", 1),
    ("eine", 1),
    ("ein", 1),
    ("alleine", 1),
    ("allein", 1),
    ("zweit", 2),
    ("zwei", 2),
    ("drei", 3),
    ("dritt", 3),
    ("viert", 4),
    ("vier", 4),
    ("fünft", 5),
    ("fünf", 5),
    ("fuenft", 5),
    ("fuenf", 5),
    ("sechzehn", 16),
    ("sechst", 6),
    ("sechs", 6),
    ("siebzehn", 17),
    ("sieben", 7),
    ("siebt", 7),
    ("acht", 8),
    ("neunt", 9),
    ("neun", 9),
    ("zehnt", 10),
    ("zehn", 10),
    ("elft", 11),
    ("elf", 11),
    ("zwölft", 12),
    ("zwölf", 12),
    ("zwoelft", 12),
    ("zwoelf", 12),
];

/// Month names after umlaut folding; full names precede their abbreviations
pub const MONTHS: &[(&str, u32)] = &[
    ("januar", 1),
    ("jan", 1),
    ("februar", 2),
    ("feb", 2),
    ("maerz", 3),
    ("maer", 3),
    ("april", 4),
    ("apr", 4),
    ("mai", 5),
    ("juni", 6),
    ("jun", 6),
    ("juli", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("oktober", 10),
    ("okt", 10),
    ("november", 11),
    ("nov", 11),
    ("dezember", 12),
    ("dez", 12),
];

/// Weekday names indexed Monday=1 ... Sunday=7
pub const WEEKDAYS: &[(&str, u32)] = &[
    ("montag", 1),
    ("dienstag", 2),
    ("mittwoch", 3),
    ("donnerstag", 4),
    ("freitag", 5),
    ("samstag", 6),
    ("sonntag", 7),
];

pub const WEEKDAY_ABBREVIATIONS: &[(&str, u32)] = &[
    ("mo", 1),
    ("di", 2),
    ("mi", 3),
    ("do", 4),
    ("fr", 5),
    ("sa", 6),
    ("so", 7),
];

/// Nouns that count heads; longer inflections first
const PEOPLE: &[&str] = &[
    "personen",
    "person",
    "leuten",
    "leute",
    "freunden",
    "freunde",
    "freund",
    "kindern",
    "kinder",
    "kind",
    "herren",
    "herr",
    "maenner",
    "mann",
    "jungen",
    "junge",
    "damen",
    "dame",
    "frauen",
    "frau",
    "maedchen",
    "gaesten",
    "gaeste",
    "erwachsenen",
    "erwachsene",
];

const QUALIFIER: &str = r"(?:naechste|kommende)[nrs]?";

fn alternation<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words.into_iter().collect::<Vec<_>>().join("|")
}

fn weekday_names() -> String {
    alternation(WEEKDAYS.iter().map(|(name, _)| *name))
}

fn people_nouns() -> String {
    alternation(PEOPLE.iter().copied())
}

/// Look up the weekday index of a full name or abbreviation
#[must_use]
pub fn weekday_index(name: &str) -> Option<u32> {
    WEEKDAYS
        .iter()
        .chain(WEEKDAY_ABBREVIATIONS)
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, index)| *index)
}

/// Look up the month number of a full or abbreviated month name
#[must_use]
pub fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, number)| *number)
}

// Normalizer patterns
pub static MONTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let months = alternation(MONTHS.iter().map(|(name, _)| *name));
    Regex::new(&format!(r"(?P<dot>\.\s?)?\b(?P<month>{months})\b")).unwrap()
});

pub static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-z]+\b").unwrap());

// Name pattern
pub static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:gr(?:ü|ue|u)(?:ß|ss)(?:en|e)?|danke|dank)(?s:.*?)\b([a-zäöüß]+\s+[a-zäöüß]+)\b",
    )
    .unwrap()
});

// Date patterns
pub static ABSOLUTE_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<day>\d{1,2})\.(?P<month>\d{1,2})\.(?P<year>\d{4}|\d{2})\b").unwrap()
});

// `clock` marks "19.10 uhr", which is a time rather than a date
pub static PARTIAL_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<day>\d{1,2})\.(?P<month>\d{1,2})\b(?P<clock>\s*uhr\b)?").unwrap()
});

pub static RELATIVE_DAY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?P<over>ueber)?morgen\b").unwrap());

pub static DURATION_LIST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let unit = r"(?:tagen|tage|tag|wochen|woche|monaten|monate|monat|jahren|jahre|jahr)\b";
    Regex::new(&format!(
        r"\bin\s+(?P<list>\d+\s+{unit}(?:(?:\s*,\s*|\s+und\s+)\d+\s+{unit})*)"
    ))
    .unwrap()
});

pub static DURATION_ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<amount>\d+)\s+(?P<unit>tag|woche|monat|jahr)").unwrap()
});

pub static QUALIFIED_UNIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?P<over>ueber)?{QUALIFIER}\s+(?P<unit>tag|woche|monat|jahr)\b"
    ))
    .unwrap()
});

pub static WEEKDAY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let days = weekday_names();
    Regex::new(&format!(
        r"\b(?:(?P<over>ueber)?{QUALIFIER}\s+)?(?P<day>{days})"
    ))
    .unwrap()
});

// Two-letter forms collide with ordinary words ("so", "do"), so they need
// a leading "am" or qualifier.
pub static WEEKDAY_ABBREVIATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let days = alternation(WEEKDAY_ABBREVIATIONS.iter().map(|(name, _)| *name));
    Regex::new(&format!(
        r"\b(?:am\s+)?(?:(?P<over>ueber)?{QUALIFIER}\s+|am\s+)(?P<day>{days})\b"
    ))
    .unwrap()
});

// Time patterns
pub static TIME_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bzwischen\s+(?P<from_h>\d{1,2})(?:[:.](?P<from_m>\d{2}))?\s*(?:und|bis|-)\s*(?P<to_h>\d{1,2})(?:[:.](?P<to_m>\d{2}))?\s*uhr\b",
    )
    .unwrap()
});

pub static TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?P<h>\d{1,2}):(?P<m>\d{2})\b|\b(?P<uhr_h>\d{1,2})(?:\.(?P<uhr_m>\d{2}))?\s*uhr\b",
    )
    .unwrap()
});

pub static MORNING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let days = weekday_names();
    Regex::new(&format!(r"\bmorgens\b|fruehstueck|(?:{days})morgen")).unwrap()
});

pub static EVENING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let days = weekday_names();
    Regex::new(&format!(
        r"\babends\b|abendessen|\bnachmittags\b|(?:{days})abend"
    ))
    .unwrap()
});

// Party-size patterns
pub static PARTY_DIRECT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let nouns = people_nouns();
    Regex::new(&format!(r"\b(?P<count>\d+)\s*(?:{nouns})\b")).unwrap()
});

// `tail` captures clock times, dates and table counts so callers can drop them
pub static PARTY_QUALIFIED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:zu|fuer|sind|mindestens|maximal|hoechstens|bis\s+zu|nicht\s+mehr\s+als)\s+(?P<count>\d+)\b(?P<tail>\s*uhr\b|[.:]\d|\s+tische?\b)?",
    )
    .unwrap()
});

pub static PARTY_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let nouns = people_nouns();
    Regex::new(&format!(
        r"\b(?:zwischen\s+)?(?P<low>\d+)\s*(?:und|bis|-)\s*(?P<high>\d+)\s*(?:{nouns})\b"
    ))
    .unwrap()
});
