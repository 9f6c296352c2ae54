/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::Category;

/// Terminal color closest to the category's report color.
pub fn color_for_category(category: Category) -> &'static str {
    match category {
        Category::KF => GREEN,
        Category::Media => YELLOW,
        Category::SportEX => MAGENTA,
        Category::SportIN => CYAN,
    }
}

/// Category name in its color, or a grey dash when the slot is empty.
pub fn colorize_category(value: Option<Category>) -> String {
    match value {
        Some(c) => format!("{}{}{}", color_for_category(c), c, RESET),
        None => format!("{GREY}-{RESET}"),
    }
}

pub fn colorize_flag(enabled: bool) -> String {
    if enabled {
        format!("{GREEN}on{RESET}")
    } else {
        format!("{RED}off{RESET}")
    }
}
