//! Page grid export: `page-<n>-export.png` for one page or all three.

use super::fs_utils::write_file;
use super::{GRID_FRAME_WIDTH, GRID_SCALE, page_file_name};
use crate::core::catalog::CatalogProvider;
use crate::errors::AppResult;
use crate::models::Item;
use crate::models::item::PAGES;
use crate::render::grid::GridView;
use crate::render::raster::Rasterizer;
use crate::ui::messages::warning;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// What happened to one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageExport {
    pub page: u8,
    pub rows: usize,
    /// `None` when rasterization failed and nothing was written.
    pub path: Option<PathBuf>,
    /// Problems met on the way (fetch or rasterization failures).
    pub warnings: Vec<String>,
}

pub struct PageExporter<'a> {
    catalog: &'a dyn CatalogProvider,
    raster: &'a Rasterizer,
    out_dir: PathBuf,
    settle: Duration,
    force: bool,
}

impl<'a> PageExporter<'a> {
    pub fn new(
        catalog: &'a dyn CatalogProvider,
        raster: &'a Rasterizer,
        out_dir: &Path,
        settle: Duration,
        force: bool,
    ) -> Self {
        Self {
            catalog,
            raster,
            out_dir: out_dir.to_path_buf(),
            settle,
            force,
        }
    }

    pub fn export_page(&self, page: u8) -> AppResult<PageExport> {
        let fetched = fetch_page(self.catalog, page);
        Ok(self.render_page(page, fetched))
    }

    /// Fetch the three pages concurrently, then export them one by one.
    pub fn export_all(&self) -> AppResult<Vec<PageExport>> {
        let catalog = self.catalog;
        let fetched: BTreeMap<u8, Fetched> = thread::scope(|s| {
            let handles: Vec<_> = PAGES
                .iter()
                .map(|&page| (page, s.spawn(move || fetch_page(catalog, page))))
                .collect();

            handles
                .into_iter()
                .map(|(page, h)| {
                    let result = h.join().unwrap_or_else(|_| Fetched {
                        items: Vec::new(),
                        error: Some(format!("page {page}: catalog fetch panicked")),
                    });
                    (page, result)
                })
                .collect()
        });

        let mut out = Vec::with_capacity(fetched.len());
        for (page, f) in fetched {
            out.push(self.render_page(page, f));
        }
        Ok(out)
    }

    /// Rasterization and write failures are reported per page, never raised.
    fn render_page(&self, page: u8, fetched: Fetched) -> PageExport {
        let mut warnings: Vec<String> = fetched.error.into_iter().collect();

        let view = GridView::from_items(page, &fetched.items);
        let measure = self.raster.text_measure();
        let font_stack = self.raster.font_stack();
        let frame = view.clone_offscreen_with(GRID_FRAME_WIDTH, measure.as_ref(), &font_stack);

        // let the off-screen frame settle before capture
        if !self.settle.is_zero() {
            thread::sleep(self.settle);
        }

        let path = self.out_dir.join(page_file_name(page));
        let written = self
            .raster
            .svg_to_png(&frame.svg, GRID_SCALE)
            .map_err(|e| format!("page {page}: rasterization failed: {e}"))
            .and_then(|bytes| {
                write_file(&path, &bytes, self.force)
                    .map_err(|e| format!("page {page}: cannot write {}: {e}", path.display()))
            });

        let path = match written {
            Ok(()) => Some(path),
            Err(msg) => {
                warning(&msg);
                warnings.push(msg);
                None
            }
        };

        PageExport {
            page,
            rows: view.rows.len(),
            path,
            warnings,
        }
    }
}

struct Fetched {
    items: Vec<Item>,
    error: Option<String>,
}

/// A failed fetch leaves the page empty rather than aborting the export.
fn fetch_page(catalog: &dyn CatalogProvider, page: u8) -> Fetched {
    match catalog.fetch_catalog(Some(page)) {
        Ok(items) => Fetched { items, error: None },
        Err(e) => {
            let msg = format!("page {page}: catalog fetch failed: {e}");
            warning(&msg);
            Fetched {
                items: Vec::new(),
                error: Some(msg),
            }
        }
    }
}
