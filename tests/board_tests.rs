mod common;
use common::seeded_pool;

use rosterboard::core::assign::{AssignLogic, ToggleOutcome};
use rosterboard::core::pages::PageSettingsLogic;
use rosterboard::db::initialize::seed_pages;
use rosterboard::db::queries::{find_by_token, load_items};
use rosterboard::errors::AppError;
use rosterboard::models::Category::{KF, Media, SportEX};
use rosterboard::models::Slot;

fn log_rows(pool: &rosterboard::db::pool::DbPool, op: &str) -> i64 {
    pool.conn
        .query_row("SELECT COUNT(*) FROM log WHERE operation = ?1", [op], |r| {
            r.get(0)
        })
        .unwrap()
}

#[test]
fn seeding_creates_three_pages_once() {
    let pool = seeded_pool("board_seed");
    assert_eq!(load_items(&pool.conn, None).unwrap().len(), 162);

    let page2 = load_items(&pool.conn, Some(2)).unwrap();
    assert_eq!(page2.len(), 54);
    assert_eq!(page2[0].token, "2-01");
    assert_eq!(page2[53].token, "2-54");

    assert_eq!(seed_pages(&pool.conn).unwrap(), 0);
}

#[test]
fn toggle_sets_then_clears() {
    let mut pool = seeded_pool("board_toggle");

    let first = AssignLogic::toggle(&mut pool, "1-03", Slot::A, KF).unwrap();
    assert_eq!(first, ToggleOutcome::Set(KF));
    let item = find_by_token(&pool.conn, "1-03").unwrap().unwrap();
    assert_eq!(item.slot_a, Some(KF));

    let second = AssignLogic::toggle(&mut pool, "1-03", Slot::A, KF).unwrap();
    assert_eq!(second, ToggleOutcome::Cleared(KF));
    let item = find_by_token(&pool.conn, "1-03").unwrap().unwrap();
    assert_eq!(item.slot_a, None);

    assert_eq!(log_rows(&pool, "set"), 2);
}

#[test]
fn toggle_other_category_replaces_selection() {
    let mut pool = seeded_pool("board_replace");
    AssignLogic::toggle(&mut pool, "2-10", Slot::B, Media).unwrap();
    AssignLogic::toggle(&mut pool, "2-10", Slot::B, SportEX).unwrap();

    let item = find_by_token(&pool.conn, "2-10").unwrap().unwrap();
    assert_eq!(item.slot_b, Some(SportEX));
    assert_eq!(item.slot_a, None);
}

#[test]
fn toggle_rejects_bad_tokens() {
    let mut pool = seeded_pool("board_bad_tokens");
    assert!(matches!(
        AssignLogic::toggle(&mut pool, "abc", Slot::A, KF),
        Err(AppError::InvalidToken(_))
    ));
    assert!(matches!(
        AssignLogic::toggle(&mut pool, "4-01", Slot::A, KF),
        Err(AppError::InvalidToken(_))
    ));
    assert!(matches!(
        AssignLogic::toggle(&mut pool, "1-99", Slot::A, KF),
        Err(AppError::UnknownToken(_))
    ));
}

#[test]
fn disabled_slot_cannot_be_assigned() {
    let mut pool = seeded_pool("board_disabled");
    PageSettingsLogic::set_slot_enabled(&mut pool, 3, Slot::B, false).unwrap();

    let err = AssignLogic::toggle(&mut pool, "3-01", Slot::B, KF).unwrap_err();
    assert!(matches!(err, AppError::SlotDisabled { page: 3, .. }));

    // slot A and other pages are unaffected
    AssignLogic::toggle(&mut pool, "3-01", Slot::A, KF).unwrap();
    AssignLogic::toggle(&mut pool, "1-01", Slot::B, KF).unwrap();

    let settings = PageSettingsLogic::load(&pool, 3).unwrap();
    assert!(settings.slot_a_enabled);
    assert!(!settings.slot_b_enabled);
}

#[test]
fn clear_and_clear_all() {
    let mut pool = seeded_pool("board_clear");
    AssignLogic::toggle(&mut pool, "1-01", Slot::A, KF).unwrap();
    AssignLogic::toggle(&mut pool, "1-01", Slot::B, Media).unwrap();
    AssignLogic::toggle(&mut pool, "2-02", Slot::A, KF).unwrap();
    AssignLogic::toggle(&mut pool, "3-03", Slot::B, KF).unwrap();

    let before = AssignLogic::clear(&mut pool, "1-01").unwrap();
    assert!(before.is_assigned());
    assert!(!find_by_token(&pool.conn, "1-01").unwrap().unwrap().is_assigned());

    assert_eq!(AssignLogic::clear_all(&mut pool).unwrap(), 2);
    assert!(load_items(&pool.conn, None).unwrap().iter().all(|i| !i.is_assigned()));
    assert_eq!(log_rows(&pool, "clear"), 2);
}

#[test]
fn visible_count_shows_first_items_by_token() {
    let mut pool = seeded_pool("board_visible");
    PageSettingsLogic::set_visible_count(&mut pool, 1, 10).unwrap();
    assert_eq!(PageSettingsLogic::visible_count(&pool, 1).unwrap(), 10);

    let visible: Vec<String> = load_items(&pool.conn, Some(1))
        .unwrap()
        .into_iter()
        .filter(|i| i.visible)
        .map(|i| i.token)
        .collect();
    assert_eq!(visible.first().map(String::as_str), Some("1-01"));
    assert_eq!(visible.last().map(String::as_str), Some("1-10"));

    // other pages untouched, growing again restores items
    assert_eq!(PageSettingsLogic::visible_count(&pool, 2).unwrap(), 54);
    PageSettingsLogic::set_visible_count(&mut pool, 1, 54).unwrap();
    assert_eq!(PageSettingsLogic::visible_count(&pool, 1).unwrap(), 54);
}

#[test]
fn visible_count_is_bounded() {
    let mut pool = seeded_pool("board_visible_bounds");
    assert!(matches!(
        PageSettingsLogic::set_visible_count(&mut pool, 1, 0),
        Err(AppError::InvalidCount(0))
    ));
    assert!(matches!(
        PageSettingsLogic::set_visible_count(&mut pool, 1, 55),
        Err(AppError::InvalidCount(55))
    ));
    assert!(matches!(
        PageSettingsLogic::check_page(4),
        Err(AppError::InvalidPage(4))
    ));
}

#[test]
fn migrations_are_recorded_once() {
    let pool = seeded_pool("board_migrations_once");
    rosterboard::db::initialize::init_db(&pool.conn).expect("second run");

    let applied: Vec<String> = pool
        .conn
        .prepare("SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(applied, vec!["20250301_0001_numbers_page_index"]);

    let hidden: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM numbers WHERE visible = 0", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(hidden, 0);
}
