use reservation_extract::*;

fn extract(text: &str) -> Option<u32> {
    extract_party_size(&normalize(text))
}

// --- Direct counts ---

#[test]
fn test_count_before_people_noun() {
    assert_eq!(extract("einen Tisch für zwei Personen"), Some(2));
    assert_eq!(extract("für 8 Mann"), Some(8));
    assert_eq!(extract("mit 5 Freunden"), Some(5));
    assert_eq!(extract("wir sind zwölf Leute"), Some(12));
}

#[test]
fn test_ordinal_group_size() {
    assert_eq!(extract("wir kommen zu zweit"), Some(2));
    assert_eq!(extract("wir kommen zu dritt"), Some(3));
    assert_eq!(extract("wir kommen zu fünft"), Some(5));
}

#[test]
fn test_qualified_counts() {
    assert_eq!(extract("wir sind 7"), Some(7));
    assert_eq!(extract("mindestens 4"), Some(4));
    assert_eq!(extract("bis zu 6"), Some(6));
    assert_eq!(extract("nicht mehr als 3"), Some(3));
    assert_eq!(extract("maximal 10"), Some(10));
    assert_eq!(extract("höchstens neun"), Some(9));
}

// --- Ranges ---

#[test]
fn test_range_takes_upper_bound() {
    assert_eq!(extract("zwischen 2 und 4 Personen"), Some(4));
    assert_eq!(extract("2-4 Personen"), Some(4));
    assert_eq!(extract("3 bis 4 Leuten"), Some(4));
}

#[test]
fn test_range_in_reverse_order() {
    assert_eq!(extract("zwischen 12 und 8 Leute"), Some(12));
}

// --- Guards ---

#[test]
fn test_clock_time_is_not_a_party() {
    assert_eq!(extract("für 20 Uhr"), None);
    assert_eq!(extract("bis zu 19.30"), None);
    assert_eq!(extract("zu 18:00"), None);
}

#[test]
fn test_table_count_is_not_a_party() {
    assert_eq!(extract("für 2 Tische"), None);
    assert_eq!(extract("für einen Tisch"), None);
}

#[test]
fn test_time_next_to_party() {
    assert_eq!(extract("am 19.3. für 4 Personen um 20 Uhr"), Some(4));
}

// --- Conflicting signals ---

#[test]
fn test_largest_candidate_wins() {
    assert_eq!(extract("für 2 Personen, wir sind 7"), Some(7));
    assert_eq!(extract("zu zweit, vielleicht 3 Personen"), Some(3));
}

// --- Absence ---

#[test]
fn test_no_party_size() {
    assert_eq!(extract("einen Tisch am Montag um 20 Uhr"), None);
    assert_eq!(extract(""), None);
}
