use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::SqliteCatalog;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{GenerateLogic, GenerateOptions, notify_export_success};
use crate::render::raster::Rasterizer;
use crate::render::report::{Placement, ReportLabels, ReportLayout};
use crate::ui::messages::{info, warning};
use crate::utils::colors::{GREY, RESET};
use crate::utils::date::{long_date, today};
use crate::utils::path::{expand_tilde, optional_dir, output_dir};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        input,
        out,
        json,
        diagnostics,
        force,
    } = cmd
    {
        let text = GenerateLogic::read_input(input.as_deref())?;

        let opts = GenerateOptions {
            out_dir: output_dir(out.as_deref(), &cfg.output_dir),
            json: json.as_deref().map(expand_tilde),
            force: *force,
        };

        let catalog = SqliteCatalog::new(cfg.database.clone());
        let font_dir = optional_dir(&cfg.font_dir);
        let raster = Rasterizer::new(&cfg.font_family, font_dir.as_deref())?;
        let layout = ReportLayout::new(
            ReportLabels::from_config(cfg),
            long_date(today(), &cfg.date_locale),
        )
        .with_measure(raster.text_measure());

        let outcome = GenerateLogic::generate(&text, &catalog, &layout, &raster, &opts)?;

        info(format!(
            "{} roster lines, {} placed entries ({:?} layout, {} px tall)",
            outcome.total_people,
            outcome.summary.total_entries,
            outcome.summary.tier,
            outcome.summary.height
        ));

        if let Placement::Skipped { remaining, needed } = outcome.summary.unidentified {
            warning(format!(
                "{} unidentified entries left out: {needed:.0} px needed, {remaining:.0} px left",
                outcome.report.unidentified.len()
            ));
        }

        if *diagnostics {
            if outcome.dropped.is_empty() {
                info("Nothing dropped while parsing.");
            } else {
                warning(format!("{} fragments dropped while parsing:", outcome.dropped.len()));
                for d in &outcome.dropped {
                    println!("  {GREY}{d}{RESET}");
                }
            }
        }

        if let Some(path) = &outcome.path {
            notify_export_success("Activity lists", path);
        }
        if let Some(path) = &opts.json {
            notify_export_success("JSON", path);
        }

        // the catalog may be unreachable; logging is best effort
        if let Ok(pool) = DbPool::new(&cfg.database) {
            for w in &outcome.warnings {
                ttlog_quiet(&pool.conn, "generate", "warning", w);
            }
            ttlog_quiet(
                &pool.conn,
                "generate",
                "activity-lists",
                &format!(
                    "{} lines, {} entries, {} unidentified",
                    outcome.total_people,
                    outcome.summary.total_entries,
                    outcome.report.unidentified.len()
                ),
            );
        }
    }
    Ok(())
}
