use rosterboard::core::parser::{parse, parse_with_diagnostics};
use rosterboard::models::{NO_NAME, RosterEntry};

#[test]
fn parses_comma_separated_entries() {
    let entries = parse("1-03 Jane Doe, 2-04 Bob");
    assert_eq!(
        entries,
        vec![
            RosterEntry::new("1-03", "Jane Doe"),
            RosterEntry::new("2-04", "Bob"),
        ]
    );
}

#[test]
fn token_without_name_gets_placeholder() {
    assert_eq!(parse("1-03"), vec![RosterEntry::new("1-03", NO_NAME)]);
}

#[test]
fn consecutive_tokens_are_separate_entries() {
    let entries = parse("1-03 2-04, 3-05");
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.display_name == NO_NAME));
}

#[test]
fn leading_words_are_dropped() {
    let outcome = parse_with_diagnostics("garbage text 1-03 Name");
    assert_eq!(outcome.entries, vec![RosterEntry::new("1-03", "Name")]);
    assert_eq!(outcome.dropped, vec!["garbage", "text"]);
}

#[test]
fn newlines_and_extra_separators_are_ignored() {
    let entries = parse("1-03   Ann\r\n\r\n2-04,,,Bea Smith\n");
    assert_eq!(
        entries,
        vec![
            RosterEntry::new("1-03", "Ann"),
            RosterEntry::new("2-04", "Bea Smith"),
        ]
    );
}

#[test]
fn duplicate_tokens_are_kept() {
    let entries = parse("1-03 Ann 1-03 Ann");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], entries[1]);
}

#[test]
fn words_glued_to_digits_do_not_open_entries() {
    // "1-03a" is not a token, so it is part of the name
    let entries = parse("2-01 Zoe 1-03a");
    assert_eq!(entries, vec![RosterEntry::new("2-01", "Zoe 1-03a")]);
}

#[test]
fn empty_input_yields_nothing() {
    let outcome = parse_with_diagnostics("  \n ,, ");
    assert!(outcome.entries.is_empty());
    assert!(outcome.dropped.is_empty());
}
