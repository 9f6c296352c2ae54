use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tally::ActivityTally;
use crate::db::pool::DbPool;
use crate::db::queries::load_items;
use crate::errors::AppResult;
use crate::models::{Category, Slot};
use crate::ui::messages::header;
use crate::utils::colors::color_for_category;
use crate::utils::colors::RESET;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let items = load_items(&pool.conn, None)?;
        let tally = ActivityTally::from_catalog(&items);

        header("Activity tally");

        let mut table = Table::new(vec![
            Column::new("Category", 8),
            Column::new(&cfg.slot_a_label, 10).right(),
            Column::new(&cfg.slot_b_label, 10).right(),
        ]);

        for c in Category::ALL {
            table.add_row(vec![
                format!("{}{}{}", color_for_category(c), c, RESET),
                tally.count(Slot::A, c).to_string(),
                tally.count(Slot::B, c).to_string(),
            ]);
        }
        table.add_row(vec![
            "Total".to_string(),
            tally.slot_total(Slot::A).to_string(),
            tally.slot_total(Slot::B).to_string(),
        ]);

        println!("{}", table.render());
    }
    Ok(())
}
