use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::models::item::{ITEMS_PER_PAGE, PAGES, make_token};
use chrono::Local;
use rusqlite::{Connection, params};

/// Bring the schema up to date through the migration runner.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Create the 54 default items of every page that has none yet.
/// Returns how many rows were inserted.
pub fn seed_pages(conn: &Connection) -> AppResult<usize> {
    let now = Local::now().to_rfc3339();
    let mut inserted = 0;

    for page in PAGES {
        let existing: i64 = conn.query_row(
            "SELECT COUNT(*) FROM numbers WHERE page = ?1",
            [page],
            |row| row.get(0),
        )?;
        if existing > 0 {
            continue;
        }

        let mut stmt = conn.prepare_cached(
            "INSERT INTO numbers (number, page, activity1, activity2, visible, created_at)
             VALUES (?1, ?2, NULL, NULL, 1, ?3)",
        )?;
        for n in 1..=ITEMS_PER_PAGE {
            inserted += stmt.execute(params![make_token(page, n), page, now])?;
        }
    }

    Ok(inserted)
}
