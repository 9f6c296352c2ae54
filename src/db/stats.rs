use crate::db::pool::DbPool;
use crate::models::item::PAGES;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ITEMS PER PAGE
    //
    println!("{}• Items:{}", CYAN, RESET);
    for page in PAGES {
        let (total, visible, assigned): (i64, i64, i64) = pool.conn.query_row(
            "SELECT COUNT(*),
                    COALESCE(SUM(visible), 0),
                    COALESCE(SUM(activity1 IS NOT NULL OR activity2 IS NOT NULL), 0)
             FROM numbers WHERE page = ?1",
            [page],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;
        println!(
            "    page {page}: {GREEN}{total}{RESET} items, {visible} visible, {assigned} assigned"
        );
    }

    //
    // 3) SETTINGS + LOG
    //
    let settings: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM settings", [], |row| row.get(0))?;
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;

    println!("{}• Settings keys:{} {}", CYAN, RESET, settings);
    println!("{}• Log rows:{} {}{}{}", CYAN, RESET, GREY, log_rows, RESET);

    println!();
    Ok(())
}
