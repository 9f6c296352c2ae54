mod common;
use common::{hidden, item};

use rosterboard::models::Category::{KF, SportIN};
use rosterboard::render::grid::GridView;

#[test]
fn snapshot_keeps_visible_items_of_the_page_sorted() {
    let items = vec![
        item("1-10", None, None),
        item("1-02", Some(KF), None),
        hidden(item("1-05", Some(KF), None)),
        item("2-01", None, None),
    ];
    let view = GridView::from_items(1, &items);
    let tokens: Vec<&str> = view.rows.iter().map(|r| r.token.as_str()).collect();
    assert_eq!(tokens, vec!["1-02", "1-10"]);
}

#[test]
fn header_mirrors_both_slots_around_the_number() {
    assert_eq!(
        GridView::header(),
        vec![
            "KF", "Media", "SportEX", "SportIN", "Number", "KF", "Media", "SportEX", "SportIN"
        ]
    );
}

#[test]
fn selected_cells_are_marked() {
    let view = GridView::from_items(1, &[item("1-02", Some(KF), Some(SportIN))]);
    assert_eq!(
        view.rows[0].cells(),
        vec!["X", "", "", "", "1-02", "", "", "", "X"]
    );
}

#[test]
fn offscreen_frame_has_fixed_width_and_natural_height() {
    let items = vec![item("3-01", None, None), item("3-02", None, None)];
    let frame = GridView::from_items(3, &items).clone_offscreen(1200);

    assert_eq!(frame.width, 1200);
    // header + 2 rows of 40 px, 16 px padding on both sides, 1 px borders
    assert_eq!(frame.height, 154);
    assert!(frame.svg.contains(r#"id="page-3-grid""#));
    assert!(frame.svg.contains(">3-02</text>"));
}

#[test]
fn empty_page_still_has_a_header_row() {
    let frame = GridView::from_items(2, &[]).clone_offscreen(1200);
    assert_eq!(frame.height, 74);
    assert!(frame.svg.contains(">Number</text>"));
}
