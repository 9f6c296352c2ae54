//! Layout of the activity lists poster (`activity-lists.png`).
//!
//! Everything is drawn on an 800 px wide portrait canvas. Font sizes and line
//! heights switch to a compact tier past 30 placed entries, and the canvas
//! grows 5 px per entry past 50 so the category blocks are never clipped.
//! The unidentified block is only drawn when the remaining height fits it.

use super::canvas::{Anchor, Canvas, Rect};
use super::metrics::{ArialMetrics, Font, TextMeasure, truncate_to_fit};
use crate::config::Config;
use crate::models::{Category, Report, Slot};
use serde::Serialize;

pub const WIDTH: u32 = 800;
pub const BASE_HEIGHT: u32 = 1131;
pub const COMPACT_THRESHOLD: usize = 30;
const GROWTH_THRESHOLD: usize = 50;
const GROWTH_PER_ENTRY: u32 = 5;

const PAPER_MARGIN: f64 = 20.0;
const PADDING: f64 = 40.0;
const CONTENT_Y: f64 = 130.0;
const HEADER_BAND_HEIGHT: f64 = 70.0;
pub const COLUMN_WIDTH: f64 = (WIDTH as f64 - PADDING * 2.0) / 2.0 - 20.0;
pub const SLOT_A_X: f64 = PADDING + 20.0;
pub const SLOT_B_X: f64 = PADDING + COLUMN_WIDTH + 40.0;
pub const INNER_COLUMN_WIDTH: f64 = (COLUMN_WIDTH - 30.0) / 2.0;
const UNIDENTIFIED_COLUMNS: usize = 4;

const INK: &str = "#212529";
const MUTED: &str = "#999999";
const WHITE: &str = "#ffffff";
const BAND: &str = "#f8f9fa";
const HEADER_BAND: &str = "#343a40";
const SLOT_TITLE: &str = "#007bff";
const ALERT: &str = "#dc3545";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    Normal,
    Compact,
}

impl Tier {
    pub fn for_entries(total_entries: usize) -> Self {
        if total_entries > COMPACT_THRESHOLD {
            Tier::Compact
        } else {
            Tier::Normal
        }
    }

    pub fn font_size(&self) -> f64 {
        match self {
            Tier::Normal => 16.0,
            Tier::Compact => 14.0,
        }
    }

    pub fn line_height(&self) -> f64 {
        match self {
            Tier::Normal => 30.0,
            Tier::Compact => 24.0,
        }
    }

    pub fn title_size(&self) -> f64 {
        match self {
            Tier::Normal => 28.0,
            Tier::Compact => 22.0,
        }
    }

    pub fn header_size(&self) -> f64 {
        match self {
            Tier::Normal => 22.0,
            Tier::Compact => 18.0,
        }
    }

    pub fn spacing(&self) -> f64 {
        match self {
            Tier::Normal => 25.0,
            Tier::Compact => 15.0,
        }
    }
}

pub fn canvas_height(total_entries: usize) -> u32 {
    let extra = total_entries.saturating_sub(GROWTH_THRESHOLD) as u32;
    BASE_HEIGHT + extra * GROWTH_PER_ENTRY
}

/// Where the unidentified block ended up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Placement {
    /// Nothing to place.
    Empty,
    Drawn { top: f64, box_height: f64 },
    /// Not enough room left; the entries are left out of the image.
    Skipped { remaining: f64, needed: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutSummary {
    pub tier: Tier,
    pub total_entries: usize,
    pub height: u32,
    pub unidentified: Placement,
}

#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub canvas: Canvas,
    pub summary: LayoutSummary,
}

/// Texts printed on the poster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    pub title: String,
    pub slot_a: String,
    pub slot_b: String,
    pub unidentified: String,
    pub total_suffix: String,
}

impl ReportLabels {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            title: cfg.report_title.clone(),
            slot_a: cfg.slot_a_label.clone(),
            slot_b: cfg.slot_b_label.clone(),
            unidentified: cfg.unidentified_title.clone(),
            total_suffix: cfg.total_suffix.clone(),
        }
    }

    fn slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::A => &self.slot_a,
            Slot::B => &self.slot_b,
        }
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub struct ReportLayout {
    labels: ReportLabels,
    date: String,
    measure: Box<dyn TextMeasure>,
}

impl ReportLayout {
    pub fn new(labels: ReportLabels, date: impl Into<String>) -> Self {
        Self {
            labels,
            date: date.into(),
            measure: Box::new(ArialMetrics),
        }
    }

    pub fn with_measure(mut self, measure: Box<dyn TextMeasure>) -> Self {
        self.measure = measure;
        self
    }

    /// Lay out `report`. `total_people` is the number of parsed roster lines
    /// shown in the header.
    pub fn render(&self, report: &Report, total_people: usize) -> RenderedReport {
        let total_entries = report.total_entries();
        let tier = Tier::for_entries(total_entries);
        let height = canvas_height(total_entries);
        let width = f64::from(WIDTH);

        let mut canvas = Canvas::new(WIDTH, height);
        let full = Rect::new(0.0, 0.0, width, f64::from(height));
        canvas.fill_rect(full, WHITE);
        canvas.gradient_rect(full, BAND, WHITE);
        canvas.shadow_rect(
            Rect::new(
                PAPER_MARGIN,
                PAPER_MARGIN,
                width - PAPER_MARGIN * 2.0,
                f64::from(height) - PAPER_MARGIN * 2.0,
            ),
            WHITE,
            5.0,
            12.0,
            0.1,
        );

        self.draw_header(&mut canvas, total_people);

        let mut y = CONTENT_Y + 30.0;
        for (slot, x) in [(Slot::A, SLOT_A_X), (Slot::B, SLOT_B_X)] {
            canvas.text(
                x,
                y,
                self.labels.slot(slot),
                Font::bold(tier.title_size()),
                SLOT_TITLE,
                Anchor::Start,
            );
        }
        y += 40.0;

        for (idx, category) in Category::ALL.into_iter().enumerate() {
            y = self.draw_category(&mut canvas, report, category, idx, tier, y);
        }

        let unidentified = self.draw_unidentified(&mut canvas, report, tier, y);

        RenderedReport {
            canvas,
            summary: LayoutSummary {
                tier,
                total_entries,
                height,
                unidentified,
            },
        }
    }

    fn draw_header(&self, canvas: &mut Canvas, total_people: usize) {
        let width = f64::from(WIDTH);
        canvas.fill_rect(
            Rect::new(
                PAPER_MARGIN,
                PAPER_MARGIN,
                width - PAPER_MARGIN * 2.0,
                HEADER_BAND_HEIGHT,
            ),
            HEADER_BAND,
        );
        canvas.text(
            PADDING,
            55.0,
            &self.labels.title,
            Font::bold(28.0),
            WHITE,
            Anchor::Start,
        );
        canvas.text(
            width - PADDING,
            40.0,
            &format!("Total: {} {}", total_people, self.labels.total_suffix),
            Font::bold(20.0),
            WHITE,
            Anchor::End,
        );
        canvas.text(
            width - PADDING,
            65.0,
            &self.date,
            Font::regular(16.0),
            WHITE,
            Anchor::End,
        );
    }

    /// Draw one category row across both slot columns; returns the next y.
    fn draw_category(
        &self,
        canvas: &mut Canvas,
        report: &Report,
        category: Category,
        idx: usize,
        tier: Tier,
        mut y: f64,
    ) -> f64 {
        let columns = [
            (SLOT_A_X, report.slot_a.get(category)),
            (SLOT_B_X, report.slot_b.get(category)),
        ];
        let lh = tier.line_height();

        // band goes under the text
        if idx % 2 == 0 {
            let rows = columns
                .iter()
                .map(|(_, entries)| entries.len().div_ceil(2))
                .max()
                .unwrap_or(0);
            let band_height = rows as f64 * lh + 40.0;
            for (x, _) in &columns {
                canvas.fill_rect(
                    Rect::new(x - 10.0, y - 25.0, COLUMN_WIDTH - 20.0, band_height),
                    BAND,
                );
            }
        }

        for (x, entries) in &columns {
            canvas.text(
                *x,
                y,
                &format!("{} - {}", category, entries.len()),
                Font::bold(tier.header_size()),
                category.color(),
                Anchor::Start,
            );
        }
        y += 30.0;

        let mut tallest: f64 = 0.0;
        for (x, entries) in &columns {
            let split = entries.len().div_ceil(2);
            for (i, entry) in entries.iter().enumerate() {
                let inner_col = if i < split { 0.0 } else { 1.0 };
                let row = i % split;
                let entry_x = x + inner_col * INNER_COLUMN_WIDTH;
                let entry_y = y + row as f64 * lh;
                self.draw_entry(
                    canvas,
                    entry_x,
                    entry_y,
                    i,
                    &entry.display_name,
                    &entry.token,
                    tier,
                    |number_width| INNER_COLUMN_WIDTH - number_width - 5.0,
                );
                tallest = tallest.max((row + 1) as f64 * lh);
            }
        }

        y + tallest + tier.spacing()
    }

    fn draw_unidentified(
        &self,
        canvas: &mut Canvas,
        report: &Report,
        tier: Tier,
        mut y: f64,
    ) -> Placement {
        let entries = &report.unidentified;
        if entries.is_empty() {
            return Placement::Empty;
        }

        let width = f64::from(WIDTH);
        let lh = tier.line_height();
        let per_column = entries.len().div_ceil(UNIDENTIFIED_COLUMNS);
        let remaining = f64::from(canvas.height) - y - PADDING;
        let needed = 120.0 + per_column as f64 * lh;

        if remaining < needed {
            return Placement::Skipped { remaining, needed };
        }

        y += 40.0;
        let box_height = (remaining - 40.0).min(needed);
        let frame = Rect::new(
            PAPER_MARGIN + 20.0,
            y - 20.0,
            width - PAPER_MARGIN * 2.0 - 40.0,
            box_height,
        );
        canvas.fill_rect(frame, BAND);
        canvas.stroke_rect(frame, ALERT, 2.0);
        canvas.text(
            width / 2.0,
            y + 10.0,
            &self.labels.unidentified,
            Font::bold(tier.header_size()),
            ALERT,
            Anchor::Middle,
        );
        let top = frame.y;
        y += 40.0;

        let column_width = (width - PAPER_MARGIN * 2.0 - 80.0) / UNIDENTIFIED_COLUMNS as f64;
        for (i, entry) in entries.iter().enumerate() {
            let col = i / per_column;
            let row = i % per_column;
            self.draw_entry(
                canvas,
                PAPER_MARGIN + 40.0 + col as f64 * column_width,
                y + row as f64 * lh,
                i,
                &entry.display_name,
                &entry.token,
                tier,
                |number_width| column_width - number_width - 10.0,
            );
        }

        Placement::Drawn { top, box_height }
    }

    /// `"<n>."` bold, then the (possibly truncated) name, then the muted token.
    #[allow(clippy::too_many_arguments)]
    fn draw_entry(
        &self,
        canvas: &mut Canvas,
        x: f64,
        y: f64,
        index: usize,
        name: &str,
        token: &str,
        tier: Tier,
        available: impl Fn(f64) -> f64,
    ) {
        let bold = Font::bold(tier.font_size());
        let regular = Font::regular(tier.font_size());

        let number = format!("{}.", index + 1);
        canvas.text(x, y, &number, bold, INK, Anchor::Start);
        let number_width = self.measure.measure(&number, bold);

        let token_width = self.measure.measure(token, regular);
        let limit = available(number_width) - token_width - 15.0;
        let name = truncate_to_fit(self.measure.as_ref(), &format!(" {name}"), regular, limit);

        canvas.text(x + number_width, y, &name, regular, INK, Anchor::Start);
        let name_width = self.measure.measure(&name, regular);
        canvas.text(
            x + number_width + name_width + 5.0,
            y,
            token,
            regular,
            MUTED,
            Anchor::Start,
        );
    }
}
