use serde::Serialize;

/// One of the two independent activity assignments of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::A, Slot::B];

    /// Column holding this slot in the `numbers` table.
    pub fn column(&self) -> &'static str {
        match self {
            Slot::A => "activity1",
            Slot::B => "activity2",
        }
    }

    /// Settings key storing whether the slot is enabled on `page`.
    pub fn setting_key(&self, page: u8) -> String {
        format!("page{}_{}Enabled", page, self.column())
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "a" | "1" | "activity1" => Some(Slot::A),
            "b" | "2" | "activity2" => Some(Slot::B),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Slot::A => "Activity 1",
            Slot::B => "Activity 2",
        }
    }
}
