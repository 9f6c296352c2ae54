use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::SqliteCatalog;
use crate::core::pages::PageSettingsLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{PageExport, PageExporter, notify_export_success};
use crate::render::raster::Rasterizer;
use crate::utils::path::{optional_dir, output_dir};
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        page,
        all: _,
        out,
        force,
    } = cmd
    {
        let page = page.map(PageSettingsLogic::check_page).transpose()?;

        let catalog = SqliteCatalog::new(cfg.database.clone());
        let font_dir = optional_dir(&cfg.font_dir);
        let raster = Rasterizer::new(&cfg.font_family, font_dir.as_deref())?;
        let out_dir = output_dir(out.as_deref(), &cfg.output_dir);

        let exporter = PageExporter::new(
            &catalog,
            &raster,
            &out_dir,
            Duration::from_millis(cfg.settle_delay_ms),
            *force,
        );

        let results = match page {
            Some(p) => vec![exporter.export_page(p)?],
            None => exporter.export_all()?,
        };

        report(&results, cfg);
    }
    Ok(())
}

fn report(results: &[PageExport], cfg: &Config) {
    for r in results {
        if let Some(path) = &r.path {
            notify_export_success(&format!("Page {} ({} seats)", r.page, r.rows), path);
        }
    }

    if let Ok(pool) = DbPool::new(&cfg.database) {
        for r in results {
            let target = format!("page{}", r.page);
            for w in &r.warnings {
                ttlog_quiet(&pool.conn, "export", &target, w);
            }
            if let Some(path) = &r.path {
                ttlog_quiet(
                    &pool.conn,
                    "export",
                    &target,
                    &format!("{} seats → {}", r.rows, path.display()),
                );
            }
        }
    }
}
