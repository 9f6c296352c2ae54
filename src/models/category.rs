use serde::Serialize;
use std::fmt;

/// The four activity categories a slot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    KF,
    Media,
    SportEX,
    SportIN,
}

impl Category {
    /// Fixed display order used by every listing and report.
    pub const ALL: [Category; 4] = [
        Category::KF,
        Category::Media,
        Category::SportEX,
        Category::SportIN,
    ];

    /// Position inside `ALL`, used to index bucket arrays.
    pub fn index(&self) -> usize {
        match self {
            Category::KF => 0,
            Category::Media => 1,
            Category::SportEX => 2,
            Category::SportIN => 3,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Category::KF => "KF",
            Category::Media => "Media",
            Category::SportEX => "SportEX",
            Category::SportIN => "SportIN",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "KF" => Some(Category::KF),
            "Media" => Some(Category::Media),
            "SportEX" => Some(Category::SportEX),
            "SportIN" => Some(Category::SportIN),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "kf" => Some(Category::KF),
            "media" => Some(Category::Media),
            "sportex" => Some(Category::SportEX),
            "sportin" => Some(Category::SportIN),
            _ => None,
        }
    }

    /// Header color used in the rendered report.
    pub fn color(&self) -> &'static str {
        match self {
            Category::KF => "#28a745",
            Category::Media => "#fd7e14",
            Category::SportEX => "#6f42c1",
            Category::SportIN => "#20c997",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
