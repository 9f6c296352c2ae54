//! Roster → `activity-lists.png` pipeline.

use super::REPORT_FILE;
use super::fs_utils::write_file;
use crate::core::catalog::CatalogProvider;
use crate::core::matcher::match_roster;
use crate::core::parser::parse_with_diagnostics;
use crate::errors::AppResult;
use crate::models::Report;
use crate::render::raster::Rasterizer;
use crate::render::report::{LayoutSummary, ReportLayout};
use crate::ui::messages::warning;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub out_dir: PathBuf,
    pub json: Option<PathBuf>,
    pub force: bool,
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub report: Report,
    pub summary: LayoutSummary,
    pub total_people: usize,
    /// Words and lines the parser could not use.
    pub dropped: Vec<String>,
    /// `None` when rasterization failed and nothing was written.
    pub path: Option<PathBuf>,
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
struct ReportDump<'a> {
    generated_at: String,
    total_people: usize,
    summary: &'a LayoutSummary,
    report: &'a Report,
    dropped: &'a [String],
}

pub struct GenerateLogic;

impl GenerateLogic {
    /// Roster text from `input`; `None` or `-` reads stdin.
    pub fn read_input(input: Option<&str>) -> AppResult<String> {
        match input {
            None | Some("-") => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            Some(path) => Ok(fs::read_to_string(path)?),
        }
    }

    pub fn generate(
        text: &str,
        catalog: &dyn CatalogProvider,
        layout: &ReportLayout,
        raster: &Rasterizer,
        opts: &GenerateOptions,
    ) -> AppResult<GenerateOutcome> {
        let mut warnings = Vec::new();

        let parsed = parse_with_diagnostics(text);
        let total_people = parsed.entries.len();

        let items = match catalog.fetch_catalog(None) {
            Ok(items) => items,
            Err(e) => {
                let msg = format!("catalog fetch failed, matching against an empty catalog: {e}");
                warning(&msg);
                warnings.push(msg);
                Vec::new()
            }
        };

        let report = match_roster(&parsed.entries, &items);
        let rendered = layout.render(&report, total_people);

        let svg = rendered.canvas.to_svg(&raster.font_stack());
        let path = match raster.svg_to_png(&svg, 1.0) {
            Ok(bytes) => {
                let path = opts.out_dir.join(REPORT_FILE);
                write_file(&path, &bytes, opts.force)?;
                Some(path)
            }
            Err(e) => {
                let msg = format!("report rasterization failed: {e}");
                warning(&msg);
                warnings.push(msg);
                None
            }
        };

        if let Some(json_path) = &opts.json {
            Self::write_json(
                json_path,
                &report,
                &rendered.summary,
                total_people,
                &parsed.dropped,
                opts.force,
            )?;
        }

        Ok(GenerateOutcome {
            report,
            summary: rendered.summary,
            total_people,
            dropped: parsed.dropped,
            path,
            warnings,
        })
    }

    fn write_json(
        path: &Path,
        report: &Report,
        summary: &LayoutSummary,
        total_people: usize,
        dropped: &[String],
        force: bool,
    ) -> AppResult<()> {
        let dump = ReportDump {
            generated_at: chrono::Local::now().to_rfc3339(),
            total_people,
            summary,
            report,
            dropped,
        };
        let json = serde_json::to_string_pretty(&dump)?;
        write_file(path, json.as_bytes(), force)
    }
}
