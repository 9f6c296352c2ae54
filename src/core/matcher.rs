//! Roster matcher: buckets parsed entries by the slots of their catalog item.

use crate::models::{BucketEntry, Item, Report, RosterEntry, Slot};
use std::collections::HashMap;

/// Match `entries` against `catalog`.
///
/// Only visible items take part; an entry whose token has no visible item, or
/// whose item has both slots empty, lands in `unidentified`. An item with both
/// slots set places the entry in one bucket of each slot. When the catalog
/// repeats a token the last item wins.
pub fn match_roster(entries: &[RosterEntry], catalog: &[Item]) -> Report {
    let by_token: HashMap<&str, &Item> = catalog
        .iter()
        .filter(|item| item.visible)
        .map(|item| (item.token.as_str(), item))
        .collect();

    let mut report = Report::default();

    for entry in entries {
        let Some(item) = by_token.get(entry.token.as_str()) else {
            report.unidentified.push(entry.clone());
            continue;
        };

        if !item.is_assigned() {
            report.unidentified.push(entry.clone());
            continue;
        }

        for slot in Slot::ALL {
            if let Some(category) = item.slot(slot) {
                report.buckets_mut(slot).push(
                    category,
                    BucketEntry {
                        display_name: entry.display_name.clone(),
                        token: entry.token.clone(),
                    },
                );
            }
        }
    }

    report
}
