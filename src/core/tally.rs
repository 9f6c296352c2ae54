//! Per-slot, per-category counts recomputed from the catalog on demand.

use crate::models::{Category, Item, Slot};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityTally {
    slot_a: [usize; 4],
    slot_b: [usize; 4],
}

impl ActivityTally {
    /// Count the assignments of every visible item.
    pub fn from_catalog(items: &[Item]) -> Self {
        let mut tally = Self::default();
        for item in items.iter().filter(|i| i.visible) {
            if let Some(c) = item.slot_a {
                tally.slot_a[c.index()] += 1;
            }
            if let Some(c) = item.slot_b {
                tally.slot_b[c.index()] += 1;
            }
        }
        tally
    }

    pub fn count(&self, slot: Slot, category: Category) -> usize {
        match slot {
            Slot::A => self.slot_a[category.index()],
            Slot::B => self.slot_b[category.index()],
        }
    }

    pub fn slot_total(&self, slot: Slot) -> usize {
        Category::ALL.iter().map(|c| self.count(slot, *c)).sum()
    }
}
