//! Text measurement for the report layout.
//!
//! Layout decisions (truncation, token placement) depend on text widths.
//! `FaceMetrics` reads the advances of the face the rasterizer draws with;
//! `ArialMetrics` keeps the Helvetica/Arial advance widths (1/1000 em) as the
//! fallback when no face can be parsed.

use fontdue::{Font as FontFace, FontSettings};
use resvg::usvg::fontdb;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    pub fn svg_weight(&self) -> &'static str {
        match self {
            FontWeight::Regular => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontWeight::Regular => "Regular",
            FontWeight::Bold => "Bold",
        })
    }
}

/// Font size in px plus weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f64,
    pub weight: FontWeight,
}

impl Font {
    pub fn regular(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    pub fn bold(size: f64) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }
}

pub trait TextMeasure {
    /// Advance width of `text` in px.
    fn measure(&self, text: &str, font: Font) -> f64;
}

/// ASCII 0x20..=0x7E
#[rustfmt::skip]
const REGULAR: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const DEFAULT_WIDTH: u16 = 556;
const WIDE_WIDTH: u16 = 1000;

/// Arial-compatible advance widths.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArialMetrics;

impl ArialMetrics {
    fn advance(c: char, weight: FontWeight) -> u16 {
        let table = match weight {
            FontWeight::Regular => &REGULAR,
            FontWeight::Bold => &BOLD,
        };
        let c = fold_latin(c);
        match c as u32 {
            0x20..=0x7E => table[(c as u32 - 0x20) as usize],
            // CJK, Hangul, fullwidth forms
            0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF | 0xFF00..=0xFF60 => {
                WIDE_WIDTH
            }
            _ => DEFAULT_WIDTH,
        }
    }
}

impl TextMeasure for ArialMetrics {
    fn measure(&self, text: &str, font: Font) -> f64 {
        let units: u32 = text
            .chars()
            .map(|c| u32::from(Self::advance(c, font.weight)))
            .sum();
        f64::from(units) * font.size / 1000.0
    }
}

/// Advances read from an installed face, regular and bold.
#[derive(Clone)]
pub struct FaceMetrics {
    regular: FontFace,
    bold: FontFace,
}

impl FaceMetrics {
    /// Parse the regular and bold faces of `family`. A missing bold face
    /// falls back to the nearest weight fontdb finds.
    pub fn from_db(db: &fontdb::Database, family: &str) -> Option<Self> {
        let families = [fontdb::Family::Name(family)];
        let load = |weight: fontdb::Weight| {
            let id = db.query(&fontdb::Query {
                families: &families,
                weight,
                stretch: fontdb::Stretch::Normal,
                style: fontdb::Style::Normal,
            })?;
            db.with_face_data(id, |data, index| {
                let settings = FontSettings {
                    collection_index: index,
                    ..Default::default()
                };
                FontFace::from_bytes(data, settings).ok()
            })
            .flatten()
        };

        Some(Self {
            regular: load(fontdb::Weight::NORMAL)?,
            bold: load(fontdb::Weight::BOLD)?,
        })
    }
}

impl TextMeasure for FaceMetrics {
    fn measure(&self, text: &str, font: Font) -> f64 {
        let face = match font.weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        };
        let px = font.size as f32;
        text.chars()
            .map(|c| f64::from(face.metrics(c, px).advance_width))
            .sum()
    }
}

/// Accented Latin letters share the advance of their base letter.
fn fold_latin(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'ç' => 'c',
        'Ç' => 'C',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        '’' | '‘' => '\'',
        _ => c,
    }
}

pub const ELLIPSIS: &str = "...";

/// Shorten `text` one char at a time from the end until `text + "..."` fits in
/// `limit`, then append the ellipsis. Text that already fits is returned as is.
/// The loop stops at one remaining char even if that is still too wide.
pub fn truncate_to_fit(measure: &dyn TextMeasure, text: &str, font: Font, limit: f64) -> String {
    if measure.measure(text, font) <= limit {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    loop {
        let candidate = format!("{}{ELLIPSIS}", chars.iter().collect::<String>());
        if chars.len() <= 1 || measure.measure(&candidate, font) <= limit {
            break;
        }
        chars.pop();
    }

    let mut out: String = chars.into_iter().collect();
    out.push_str(ELLIPSIS);
    out
}
