use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pages::{PageSettings, PageSettingsLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Slot;
use crate::models::item::{ITEMS_PER_PAGE, PAGES};
use crate::ui::messages::{header, success};
use crate::utils::colors::colorize_flag;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pages {
        page,
        count,
        slot_a,
        slot_b,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(p) = page {
            let p = PageSettingsLogic::check_page(*p)?;

            if let Some(n) = count {
                PageSettingsLogic::set_visible_count(&mut pool, p, *n)?;
                success(format!("Page {p}: {n} visible seats"));
            }
            for (slot, switch) in [(Slot::A, slot_a), (Slot::B, slot_b)] {
                if let Some(s) = switch {
                    PageSettingsLogic::set_slot_enabled(&mut pool, p, slot, s.enabled())?;
                    success(format!(
                        "Page {p}: {} {}",
                        slot.label(),
                        if s.enabled() { "enabled" } else { "disabled" }
                    ));
                }
            }
        }

        let mut rows = Vec::new();
        for p in PAGES {
            rows.push(PageSettingsLogic::load(&pool, p)?);
        }
        print_settings(&rows);
    }
    Ok(())
}

fn print_settings(rows: &[PageSettings]) {
    header("Pages");

    let mut table = Table::new(vec![
        Column::new("Page", 4),
        Column::new("Visible", 7).right(),
        Column::new("Activity 1", 10),
        Column::new("Activity 2", 10),
    ]);

    for s in rows {
        table.add_row(vec![
            s.page.to_string(),
            format!("{}/{}", s.visible, ITEMS_PER_PAGE),
            colorize_flag(s.slot_a_enabled),
            colorize_flag(s.slot_b_enabled),
        ]);
    }

    println!("{}", table.render());
}
