mod common;
use common::{hidden, item};

use rosterboard::core::matcher::match_roster;
use rosterboard::core::parser::parse;
use rosterboard::core::tally::ActivityTally;
use rosterboard::models::Category::{KF, Media, SportEX, SportIN};
use rosterboard::models::{Category, RosterEntry, Slot};

fn tokens(entries: &[rosterboard::models::BucketEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.token.as_str()).collect()
}

#[test]
fn unmatched_tokens_only_land_in_unidentified() {
    let catalog = vec![item("1-01", Some(KF), None)];
    let report = match_roster(&parse("1-01 Ann 3-40 Ghost"), &catalog);

    assert_eq!(report.unidentified, vec![RosterEntry::new("3-40", "Ghost")]);
    for slot in Slot::ALL {
        for (_, entries) in report.buckets(slot).iter() {
            assert!(entries.iter().all(|e| e.token != "3-40"));
        }
    }
}

#[test]
fn item_with_both_slots_appears_once_per_slot() {
    let catalog = vec![item("1-02", Some(Media), Some(SportIN))];
    let report = match_roster(&parse("1-02 Bob"), &catalog);

    assert_eq!(tokens(report.slot_a.get(Media)), vec!["1-02"]);
    assert_eq!(tokens(report.slot_b.get(SportIN)), vec!["1-02"]);
    assert_eq!(report.slot_a.total(), 1);
    assert_eq!(report.slot_b.total(), 1);
    assert!(report.unidentified.is_empty());
}

#[test]
fn item_without_activities_is_unidentified() {
    let catalog = vec![item("1-05", None, None)];
    let report = match_roster(&parse("1-05 Eve"), &catalog);
    assert_eq!(report.unidentified.len(), 1);
    assert_eq!(report.slot_a.total() + report.slot_b.total(), 0);
}

#[test]
fn hidden_items_do_not_match() {
    let catalog = vec![hidden(item("2-07", Some(KF), Some(KF)))];
    let report = match_roster(&parse("2-07 Hidden"), &catalog);
    assert_eq!(report.unidentified.len(), 1);
    assert_eq!(report.slot_a.total(), 0);
}

#[test]
fn buckets_follow_fixed_order_and_are_always_present() {
    let catalog = vec![
        item("1-01", Some(SportIN), None),
        item("1-02", Some(KF), None),
    ];
    let report = match_roster(&parse("1-01 A 1-02 B"), &catalog);

    let order: Vec<Category> = report.slot_a.iter().map(|(c, _)| c).collect();
    assert_eq!(order, vec![KF, Media, SportEX, SportIN]);

    let json = serde_json::to_string(&report.slot_b).unwrap();
    assert_eq!(json, r#"{"KF":[],"Media":[],"SportEX":[],"SportIN":[]}"#);
}

#[test]
fn bucket_preserves_input_order() {
    let catalog = vec![
        item("1-01", Some(SportEX), None),
        item("1-02", Some(SportEX), None),
        item("1-03", Some(SportEX), None),
    ];
    let report = match_roster(&parse("1-03 C 1-01 A 1-02 B"), &catalog);
    assert_eq!(tokens(report.slot_a.get(SportEX)), vec!["1-03", "1-01", "1-02"]);
}

#[test]
fn duplicate_roster_lines_count_twice() {
    let catalog = vec![item("1-01", Some(KF), None)];
    let report = match_roster(&parse("1-01 Ann 1-01 Ann"), &catalog);
    assert_eq!(report.slot_a.get(KF).len(), 2);
    assert_eq!(report.total_entries(), 2);
}

#[test]
fn last_catalog_item_wins_on_duplicate_tokens() {
    let catalog = vec![item("1-01", Some(KF), None), item("1-01", Some(Media), None)];
    let report = match_roster(&parse("1-01 Ann"), &catalog);
    assert!(report.slot_a.get(KF).is_empty());
    assert_eq!(report.slot_a.get(Media).len(), 1);
}

#[test]
fn matching_is_idempotent() {
    let catalog = vec![
        item("1-01", Some(KF), Some(Media)),
        item("2-02", None, Some(SportEX)),
    ];
    let entries = parse("1-01 Ann, 2-02 Bob, 3-03 Cid");
    assert_eq!(match_roster(&entries, &catalog), match_roster(&entries, &catalog));
}

#[test]
fn tally_counts_visible_items_only() {
    let catalog = vec![
        item("1-01", Some(KF), Some(Media)),
        item("1-02", Some(KF), None),
        hidden(item("1-03", Some(KF), Some(Media))),
        item("2-01", None, Some(SportIN)),
    ];
    let tally = ActivityTally::from_catalog(&catalog);

    assert_eq!(tally.count(Slot::A, KF), 2);
    assert_eq!(tally.count(Slot::B, Media), 1);
    assert_eq!(tally.count(Slot::B, SportIN), 1);
    assert_eq!(tally.slot_total(Slot::A), 2);
    assert_eq!(tally.slot_total(Slot::B), 2);
}
