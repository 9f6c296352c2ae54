use serde::Serialize;

/// Name used when a roster line carries a token but no name.
pub const NO_NAME: &str = "NO NAME";

/// One `(token, name)` pair read from pasted roster text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub token: String,
    pub display_name: String,
}

impl RosterEntry {
    pub fn new(token: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            display_name: display_name.into(),
        }
    }
}
