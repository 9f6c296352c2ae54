use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pages::PageSettingsLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_items;
use crate::errors::AppResult;
use crate::models::Item;
use crate::models::item::PAGES;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET, colorize_category};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { page } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let pages: Vec<u8> = match page {
            Some(p) => vec![PageSettingsLogic::check_page(*p)?],
            None => PAGES.to_vec(),
        };

        for p in pages {
            let settings = PageSettingsLogic::load(&pool, p)?;
            let items: Vec<Item> = load_items(&pool.conn, Some(p))?
                .into_iter()
                .filter(|i| i.visible)
                .collect();

            header(format!("Page {p}"));
            print_page(&items, settings.slot_a_enabled, settings.slot_b_enabled);
        }
    }
    Ok(())
}

fn print_page(items: &[Item], slot_a_enabled: bool, slot_b_enabled: bool) {
    if items.is_empty() {
        println!("{GREY}No visible seats.{RESET}\n");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Number", 6),
        Column::new("Activity 1", 10),
        Column::new("Activity 2", 10),
    ]);

    let cell = |enabled: bool, value| {
        if enabled {
            colorize_category(value)
        } else {
            format!("{GREY}disabled{RESET}")
        }
    };

    for item in items {
        table.add_row(vec![
            item.token.clone(),
            cell(slot_a_enabled, item.slot_a),
            cell(slot_b_enabled, item.slot_b),
        ]);
    }

    println!("{}", table.render());
}
