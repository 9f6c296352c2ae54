//! Retained table view of one page, as exported to `page-<n>-export.png`.
//!
//! The grid is kept as rows and cells and serialized as a whole to SVG
//! markup; it does not share the poster's drawing instructions.

use super::escape_xml;
use super::metrics::{ArialMetrics, Font, TextMeasure};
use crate::models::{Category, Item, Slot};
use std::fmt::Write as _;

pub const NUMBER_HEADER: &str = "Number";
pub const MARK: &str = "X";

const FONT_SIZE: f64 = 16.0;
const ROW_HEIGHT: f64 = 40.0;
const CONTAINER_PADDING: f64 = 16.0;
const CELL_PADDING: f64 = 8.0;
const NARROW_CELL_PADDING: f64 = 4.0;

/// Font stack used when no rasterizer supplies one.
pub const DEFAULT_FONT_STACK: &str = "Arial, Helvetica, sans-serif";

const BORDER: &str = "#d1d5db";
const HEADER_FILL: &str = "#f3f4f6";
const INK: &str = "#111827";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub token: String,
    pub slot_a: Option<Category>,
    pub slot_b: Option<Category>,
}

impl GridRow {
    fn slot(&self, slot: Slot) -> Option<Category> {
        match slot {
            Slot::A => self.slot_a,
            Slot::B => self.slot_b,
        }
    }

    /// Cell texts left to right: slot A categories, token, slot B categories.
    pub fn cells(&self) -> Vec<String> {
        let marks = |slot: Slot| {
            Category::ALL.into_iter().map(move |c| {
                if self.slot(slot) == Some(c) {
                    MARK.to_string()
                } else {
                    String::new()
                }
            })
        };
        marks(Slot::A)
            .chain(std::iter::once(self.token.clone()))
            .chain(marks(Slot::B))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub page: u8,
    pub rows: Vec<GridRow>,
}

/// A copy of the grid laid out at a fixed width, ready to rasterize.
#[derive(Debug, Clone, PartialEq)]
pub struct OffscreenFrame {
    pub width: u32,
    pub height: u32,
    pub svg: String,
}

impl GridView {
    /// Snapshot of `page`: visible items only, ordered by token.
    pub fn from_items(page: u8, items: &[Item]) -> Self {
        let mut rows: Vec<GridRow> = items
            .iter()
            .filter(|i| i.page == page && i.visible)
            .map(|i| GridRow {
                token: i.token.clone(),
                slot_a: i.slot_a,
                slot_b: i.slot_b,
            })
            .collect();
        rows.sort_by(|a, b| a.token.cmp(&b.token));
        Self { page, rows }
    }

    pub fn header() -> Vec<String> {
        let names = || Category::ALL.into_iter().map(|c| c.to_string());
        names()
            .chain(std::iter::once(NUMBER_HEADER.to_string()))
            .chain(names())
            .collect()
    }

    fn column_widths(&self, m: &dyn TextMeasure) -> Vec<f64> {
        let bold = Font::bold(FONT_SIZE);
        let regular = Font::regular(FONT_SIZE);

        let token_width = self
            .rows
            .iter()
            .map(|r| m.measure(&r.token, bold))
            .fold(m.measure(NUMBER_HEADER, bold), f64::max);

        Self::header()
            .iter()
            .map(|h| {
                if h == NUMBER_HEADER {
                    token_width + NARROW_CELL_PADDING * 2.0
                } else {
                    m.measure(h, bold).max(m.measure(MARK, regular)) + CELL_PADDING * 2.0
                }
            })
            .collect()
    }

    /// Clone the grid into a frame of fixed `width` and natural height.
    pub fn clone_offscreen(&self, width: u32) -> OffscreenFrame {
        self.clone_offscreen_with(width, &ArialMetrics, DEFAULT_FONT_STACK)
    }

    /// Same as `clone_offscreen`, sized with `measure` and drawn in `font_family`.
    pub fn clone_offscreen_with(
        &self,
        width: u32,
        measure: &dyn TextMeasure,
        font_family: &str,
    ) -> OffscreenFrame {
        let widths = self.column_widths(measure);
        let table_width: f64 = widths.iter().sum();
        let table_height = ROW_HEIGHT * (self.rows.len() + 1) as f64;

        let frame_width = f64::from(width);
        let height = (table_height + CONTAINER_PADDING * 2.0 + 2.0).ceil() as u32;
        let left = ((frame_width - table_width) / 2.0).max(CONTAINER_PADDING);
        let top = CONTAINER_PADDING + 1.0;

        let mut body = String::new();
        let _ = writeln!(
            body,
            r##"<rect x="0.5" y="0.5" width="{:.2}" height="{}" rx="8" fill="#ffffff" stroke="{BORDER}"/>"##,
            frame_width - 1.0,
            height - 1
        );
        let _ = writeln!(
            body,
            r#"<rect x="{left:.2}" y="{top:.2}" width="{table_width:.2}" height="{ROW_HEIGHT}" fill="{HEADER_FILL}"/>"#
        );

        let header = Self::header();
        self.write_row(&mut body, &header, &widths, left, top, true);
        for (i, row) in self.rows.iter().enumerate() {
            let y = top + ROW_HEIGHT * (i + 1) as f64;
            self.write_row(&mut body, &row.cells(), &widths, left, y, false);
        }

        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
<g id="page-{page}-grid" font-family="{family}" font-size="{FONT_SIZE}" fill="{INK}">
{body}</g>
</svg>
"#,
            page = self.page,
            family = escape_xml(font_family)
        );

        OffscreenFrame { width, height, svg }
    }

    fn write_row(
        &self,
        out: &mut String,
        cells: &[String],
        widths: &[f64],
        left: f64,
        y: f64,
        header: bool,
    ) {
        let mut x = left;
        let weight = if header { "bold" } else { "normal" };
        let token_column = Category::ALL.len();

        for (i, (cell, w)) in cells.iter().zip(widths).enumerate() {
            let _ = writeln!(
                out,
                r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{ROW_HEIGHT}" fill="none" stroke="{BORDER}"/>"#
            );
            if !cell.is_empty() {
                // the token column is rendered medium weight
                let weight = if i == token_column && !header { "500" } else { weight };
                let _ = writeln!(
                    out,
                    r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-weight="{weight}">{}</text>"#,
                    x + w / 2.0,
                    y + ROW_HEIGHT / 2.0 + FONT_SIZE * 0.35,
                    escape_xml(cell)
                );
            }
            x += w;
        }
    }
}
