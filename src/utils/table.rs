//! Table rendering utilities for CLI outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ansi pattern"));

/// Display width of `s` ignoring ANSI color sequences.
pub fn visible_width(s: &str) -> usize {
    ANSI.replace_all(s, "").width()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn pad(cell: &str, col: &Column, width: usize) -> String {
        let fill = " ".repeat(width.saturating_sub(visible_width(cell)));
        match col.align {
            Align::Left => format!("{cell}{fill}"),
            Align::Right => format!("{fill}{cell}"),
        }
    }

    pub fn render(&self) -> String {
        // columns grow to fit their widest cell
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .fold(col.width.max(visible_width(&col.header)), usize::max)
            })
            .collect();

        let mut out = String::new();

        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&Self::pad(&col.header, col, *w));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, (col, w)) in self.columns.iter().zip(&widths).enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&Self::pad(cell, col, *w));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
