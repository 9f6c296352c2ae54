//! Row model for the `numbers` table.

use crate::models::{Category, Slot};
use serde::Serialize;

pub const PAGES: [u8; 3] = [1, 2, 3];
pub const ITEMS_PER_PAGE: u32 = 54;

/// A numbered seat on one of the pages, with its two activity slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: i64,
    pub token: String,
    pub page: u8,
    pub slot_a: Option<Category>,
    pub slot_b: Option<Category>,
    pub visible: bool,
}

impl Item {
    pub fn slot(&self, slot: Slot) -> Option<Category> {
        match slot {
            Slot::A => self.slot_a,
            Slot::B => self.slot_b,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.slot_a.is_some() || self.slot_b.is_some()
    }
}

/// Token for the `number`-th seat of `page`, zero padded: `1-03`.
pub fn make_token(page: u8, number: u32) -> String {
    format!("{}-{:02}", page, number)
}

/// Page prefix of a token (`"2-17"` → `Some(2)`), when it is a valid page.
pub fn page_of_token(token: &str) -> Option<u8> {
    let (page, number) = token.split_once('-')?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let page: u8 = page.parse().ok()?;
    PAGES.contains(&page).then_some(page)
}
