use reservation_extract::*;

#[test]
fn test_normalize_lowercases_and_trims() {
    assert_eq!(normalize("  Hallo Welt  "), "hallo welt");
}

#[test]
fn test_normalize_folds_umlauts() {
    assert_eq!(normalize("Grüße aus Köln, Bär"), "gruesse aus koeln, baer");
    assert_eq!(normalize("Straße"), "strasse");
}

#[test]
fn test_normalize_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
}

// --- Months ---

#[test]
fn test_normalize_month_after_day() {
    assert_eq!(normalize("am 12. April"), "am 12.4.");
    assert_eq!(normalize("am 1. Januar um"), "am 1.1. um");
    assert_eq!(normalize("am 3. März"), "am 3.3.");
}

#[test]
fn test_normalize_standalone_month() {
    assert_eq!(normalize("im Dezember"), "im 12.");
    assert_eq!(normalize("Anfang Okt"), "anfang 10.");
}

#[test]
fn test_normalize_every_month_occurrence() {
    assert_eq!(normalize("vom 2. Mai bis 9. Mai"), "vom 2.5. bis 9.5.");
}

#[test]
fn test_normalize_month_needs_whole_word() {
    assert_eq!(normalize("per Mail"), "per mail");
    assert_eq!(normalize("Junior"), "junior");
}

// --- Number words ---

#[test]
fn test_normalize_number_words() {
    assert_eq!(
        normalize("für zwei Personen"),
        "fuer 2 personen"
    );
    assert_eq!(normalize("wir kommen zu fünft"), "wir kommen zu 5");
    assert_eq!(
        normalize("einundzwanzig Gäste"),
        "21 gaeste"
    );
}

#[test]
fn test_normalize_keeps_other_words() {
    assert_eq!(
        normalize("Achtung, bitte beachten"),
        "achtung, bitte beachten"
    );
    assert_eq!(normalize("und"), "und");
}

#[test]
fn test_normalize_full_message() {
    let text = "Hallo, bitte für zwei Personen einen Tisch am 9. April um 20:00 Uhr, Vielen Dank Klaus Müller";
    assert_eq!(
        normalize(text),
        "hallo, bitte fuer 2 personen 1 tisch am 9.4. um 20:00 uhr, vielen dank klaus mueller"
    );
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = [
        "hallo, bitte fuer 2 personen am 19.3. um 20:00 uhr",
        "Guten Tag, einen Tisch für 8 Mann am 1. Mai, Gruß Franz Schulze",
        "Übermorgen zu dritt, abends",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }
}
