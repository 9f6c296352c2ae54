//! Roster parser: turns pasted free text into `(token, name)` entries.
//!
//! Input is tolerant by construction. Words are separated by commas or
//! whitespace, a word shaped like `<digits>-<digits>` opens a new entry and
//! every following word up to the next token belongs to its name:
//!
//! ```text
//! 1-03 Jane Doe, 2-04 Bob
//! 3-11
//! ```
//!
//! yields `1-03 Jane Doe`, `2-04 Bob` and `3-11 NO NAME`. Words before the
//! first token are discarded. Duplicated tokens are kept as separate entries.

use crate::models::{NO_NAME, RosterEntry};
use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("separator pattern"));
static TOKEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+-[0-9]+$").expect("token pattern"));
static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)-([0-9]+)(?:\s+(.+))?$").expect("entry pattern"));

/// Result of a parse, with the words that could not be attached to any entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub entries: Vec<RosterEntry>,
    pub dropped: Vec<String>,
}

pub fn parse(text: &str) -> Vec<RosterEntry> {
    parse_with_diagnostics(text).entries
}

pub fn parse_with_diagnostics(text: &str) -> ParseOutcome {
    let normalized = text.replace(['\r', '\n'], " ");

    let mut outcome = ParseOutcome::default();
    let mut flushed: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for word in SEPARATORS.split(&normalized).filter(|w| !w.is_empty()) {
        if TOKEN_WORD.is_match(word) {
            if let Some(open) = current.take() {
                flushed.push(open.trim().to_string());
            }
            current = Some(word.to_string());
        } else if let Some(open) = current.as_mut() {
            open.push(' ');
            open.push_str(word);
        } else {
            outcome.dropped.push(word.to_string());
        }
    }

    if let Some(open) = current {
        let open = open.trim().to_string();
        if !open.is_empty() {
            flushed.push(open);
        }
    }

    for raw in flushed {
        match entry_from_str(&raw) {
            Some(entry) => outcome.entries.push(entry),
            None => outcome.dropped.push(raw),
        }
    }

    outcome
}

fn entry_from_str(raw: &str) -> Option<RosterEntry> {
    let caps = ENTRY.captures(raw)?;
    let token = format!("{}-{}", &caps[1], &caps[2]);
    let name = caps
        .get(3)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_NAME);
    Some(RosterEntry::new(token, name))
}
