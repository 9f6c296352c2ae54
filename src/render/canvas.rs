//! Immediate drawing instructions, serialized to SVG for rasterization.

use super::escape_xml;
use super::metrics::Font;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// Horizontal alignment of a text run relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn svg(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        fill: String,
    },
    /// Top to bottom linear gradient.
    GradientRect {
        rect: Rect,
        top: String,
        bottom: String,
    },
    /// Filled rectangle casting a soft black shadow.
    ShadowRect {
        rect: Rect,
        fill: String,
        offset_x: f64,
        blur: f64,
        opacity: f64,
    },
    StrokeRect {
        rect: Rect,
        stroke: String,
        width: f64,
    },
    /// Text drawn on its alphabetic baseline at `y`.
    Text {
        x: f64,
        y: f64,
        text: String,
        font: Font,
        fill: String,
        anchor: Anchor,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    ops: Vec<DrawOp>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn fill_rect(&mut self, rect: Rect, fill: &str) {
        self.ops.push(DrawOp::FillRect {
            rect,
            fill: fill.to_string(),
        });
    }

    pub fn gradient_rect(&mut self, rect: Rect, top: &str, bottom: &str) {
        self.ops.push(DrawOp::GradientRect {
            rect,
            top: top.to_string(),
            bottom: bottom.to_string(),
        });
    }

    pub fn shadow_rect(&mut self, rect: Rect, fill: &str, offset_x: f64, blur: f64, opacity: f64) {
        self.ops.push(DrawOp::ShadowRect {
            rect,
            fill: fill.to_string(),
            offset_x,
            blur,
            opacity,
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, stroke: &str, width: f64) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            stroke: stroke.to_string(),
            width,
        });
    }

    pub fn text(&mut self, x: f64, y: f64, text: &str, font: Font, fill: &str, anchor: Anchor) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            font,
            fill: fill.to_string(),
            anchor,
        });
    }

    /// All text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn to_svg(&self, font_family: &str) -> String {
        let mut defs = String::new();
        let mut body = String::new();
        let family = escape_xml(font_family);

        for (i, op) in self.ops.iter().enumerate() {
            // writing into a String cannot fail
            let _ = match op {
                DrawOp::FillRect { rect, fill } => writeln!(
                    body,
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                    rect.x, rect.y, rect.w, rect.h, fill
                ),
                DrawOp::GradientRect { rect, top, bottom } => {
                    let _ = writeln!(
                        defs,
                        r#"<linearGradient id="grad{i}" x1="0" y1="0" x2="0" y2="1"><stop offset="0" stop-color="{top}"/><stop offset="1" stop-color="{bottom}"/></linearGradient>"#
                    );
                    writeln!(
                        body,
                        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="url(#grad{i})"/>"#,
                        rect.x, rect.y, rect.w, rect.h
                    )
                }
                DrawOp::ShadowRect {
                    rect,
                    fill,
                    offset_x,
                    blur,
                    opacity,
                } => {
                    let _ = writeln!(
                        defs,
                        r##"<filter id="shadow{i}" x="-10%" y="-10%" width="120%" height="120%"><feDropShadow dx="{offset_x:.2}" dy="0" stdDeviation="{:.2}" flood-color="#000000" flood-opacity="{opacity:.2}"/></filter>"##,
                        blur / 2.0
                    );
                    writeln!(
                        body,
                        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" filter="url(#shadow{i})"/>"#,
                        rect.x, rect.y, rect.w, rect.h, fill
                    )
                }
                DrawOp::StrokeRect {
                    rect,
                    stroke,
                    width,
                } => writeln!(
                    body,
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}" stroke-width="{:.2}"/>"#,
                    rect.x, rect.y, rect.w, rect.h, stroke, width
                ),
                DrawOp::Text {
                    x,
                    y,
                    text,
                    font,
                    fill,
                    anchor,
                } => writeln!(
                    body,
                    r#"<text x="{:.2}" y="{:.2}" font-family="{}" font-size="{}" font-weight="{}" fill="{}" text-anchor="{}" xml:space="preserve">{}</text>"#,
                    x,
                    y,
                    family,
                    font.size,
                    font.weight.svg_weight(),
                    fill,
                    anchor.svg(),
                    escape_xml(text)
                ),
            };
        }

        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<defs>
{defs}</defs>
{body}</svg>
"#,
            w = self.width,
            h = self.height
        )
    }
}
