//! SVG → PNG, fully in memory.

use super::metrics::{ArialMetrics, FaceMetrics, TextMeasure};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use png::{BitDepth, ColorType, Encoder};
use resvg::tiny_skia;
use resvg::usvg::{self, fontdb};
use std::path::Path;
use std::sync::Arc;

/// Families tried, in order, after the configured one.
const FALLBACK_FAMILIES: [&str; 4] = ["Arial", "Helvetica", "Liberation Sans", "DejaVu Sans"];

pub struct Rasterizer {
    fontdb: Arc<fontdb::Database>,
    font_family: String,
    resolved_family: String,
    metrics: Option<FaceMetrics>,
}

impl Rasterizer {
    /// System fonts plus every face found under `font_dir` (when it exists).
    ///
    /// When `font_family` is not installed the closest fallback is used and
    /// `sans-serif` maps to it. Fails when no face is available at all.
    pub fn new(font_family: &str, font_dir: Option<&Path>) -> AppResult<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = font_dir.filter(|d| d.is_dir()) {
            db.load_fonts_dir(dir);
        }

        let resolved = resolve_family(&db, font_family).ok_or_else(|| {
            AppError::Render(format!(
                "no font face available to draw '{font_family}' (set font_dir in the config)"
            ))
        })?;
        if !resolved.eq_ignore_ascii_case(font_family) {
            warning(format!(
                "Font '{font_family}' not found, drawing text with '{resolved}'."
            ));
        }
        db.set_sans_serif_family(resolved.clone());

        let metrics = FaceMetrics::from_db(&db, &resolved);
        if metrics.is_none() {
            warning(format!(
                "Cannot read metrics of '{resolved}', text widths are estimated."
            ));
        }

        Ok(Self {
            fontdb: Arc::new(db),
            font_family: font_family.to_string(),
            resolved_family: resolved,
            metrics,
        })
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Family the glyphs are actually drawn with.
    pub fn resolved_family(&self) -> &str {
        &self.resolved_family
    }

    /// `font-family` value for the generated SVG.
    pub fn font_stack(&self) -> String {
        if self.resolved_family.eq_ignore_ascii_case(&self.font_family) {
            format!("'{}', sans-serif", self.font_family)
        } else {
            format!(
                "'{}', '{}', sans-serif",
                self.font_family, self.resolved_family
            )
        }
    }

    pub fn font_faces(&self) -> usize {
        self.fontdb.len()
    }

    /// Measurer matching the drawn face; Arial widths when the face can't be read.
    pub fn text_measure(&self) -> Box<dyn TextMeasure> {
        match &self.metrics {
            Some(m) => Box::new(m.clone()),
            None => Box::new(ArialMetrics),
        }
    }

    /// Render `svg` at `scale` over an opaque white background and encode it.
    pub fn svg_to_png(&self, svg: &str, scale: f32) -> AppResult<Vec<u8>> {
        let mut opt = usvg::Options::default();
        opt.font_family = self.resolved_family.clone();
        opt.fontdb = Arc::clone(&self.fontdb);

        let tree = usvg::Tree::from_str(svg, &opt)
            .map_err(|e| AppError::Render(format!("SVG parse error: {e}")))?;

        let size = tree.size();
        let width = (size.width() * scale).ceil() as u32;
        let height = (size.height() * scale).ceil() as u32;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            AppError::Render(format!("cannot allocate a {width}x{height} pixmap"))
        })?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        encode_png(&pixmap)
    }
}

/// First installed family among the requested one and the fallbacks, else the
/// family of the first face in the database.
fn resolve_family(db: &fontdb::Database, requested: &str) -> Option<String> {
    let installed = |wanted: &str| {
        db.faces()
            .flat_map(|face| face.families.iter())
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(name, _)| name.clone())
    };

    std::iter::once(requested)
        .chain(FALLBACK_FAMILIES)
        .find_map(installed)
        .or_else(|| {
            db.faces()
                .next()
                .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
        })
}

fn encode_png(pixmap: &tiny_skia::Pixmap) -> AppResult<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut enc = Encoder::new(&mut out, pixmap.width(), pixmap.height());
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        let mut writer = enc
            .write_header()
            .map_err(|e| AppError::Render(format!("PNG header: {e}")))?;
        writer
            .write_image_data(pixmap.data())
            .map_err(|e| AppError::Render(format!("PNG data: {e}")))?;
        writer
            .finish()
            .map_err(|e| AppError::Render(format!("PNG trailer: {e}")))?;
    }
    Ok(out)
}
