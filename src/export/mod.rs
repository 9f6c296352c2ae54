mod fs_utils;
pub mod pages;
pub mod report;

pub use pages::{PageExport, PageExporter};
pub use report::{GenerateLogic, GenerateOptions, GenerateOutcome};

use crate::ui::messages::success;
use std::path::Path;

pub const REPORT_FILE: &str = "activity-lists.png";

/// Fixed width of the off-screen grid frame.
pub const GRID_FRAME_WIDTH: u32 = 1200;
pub const GRID_SCALE: f32 = 2.0;

pub fn page_file_name(page: u8) -> String {
    format!("page-{page}-export.png")
}

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
