//! Bucketed result of matching a roster against the catalog.

use crate::models::{Category, RosterEntry, Slot};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A matched roster line inside one slot/category bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketEntry {
    pub display_name: String,
    pub token: String,
}

/// The four category buckets of one slot, always in `Category::ALL` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityBuckets {
    buckets: [Vec<BucketEntry>; 4],
}

impl ActivityBuckets {
    pub fn push(&mut self, category: Category, entry: BucketEntry) {
        self.buckets[category.index()].push(entry);
    }

    pub fn get(&self, category: Category) -> &[BucketEntry] {
        &self.buckets[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[BucketEntry])> {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

impl Serialize for ActivityBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, entries) in self.iter() {
            map.serialize_entry(category.to_db_str(), entries)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub slot_a: ActivityBuckets,
    pub slot_b: ActivityBuckets,
    pub unidentified: Vec<RosterEntry>,
}

impl Report {
    pub fn buckets(&self, slot: Slot) -> &ActivityBuckets {
        match slot {
            Slot::A => &self.slot_a,
            Slot::B => &self.slot_b,
        }
    }

    pub(crate) fn buckets_mut(&mut self, slot: Slot) -> &mut ActivityBuckets {
        match slot {
            Slot::A => &mut self.slot_a,
            Slot::B => &mut self.slot_b,
        }
    }

    /// Every placed line: both slots plus the unidentified list.
    pub fn total_entries(&self) -> usize {
        self.slot_a.total() + self.slot_b.total() + self.unidentified.len()
    }
}
