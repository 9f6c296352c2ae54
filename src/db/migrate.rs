use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Items of the three pages with their two activity slots.
fn create_numbers_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS numbers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            number      TEXT NOT NULL,
            page        INTEGER NOT NULL CHECK(page BETWEEN 1 AND 3),
            activity1   TEXT CHECK(activity1 IN ('KF','Media','SportEX','SportIN')),
            activity2   TEXT CHECK(activity2 IN ('KF','Media','SportEX','SportIN')),
            visible     INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL,
            UNIQUE(page, number)
        );
        "#,
    )?;
    Ok(())
}

/// Plain key/value store for per-page switches.
fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migrate_add_page_index(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_numbers_page_index";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_numbers_page_visible ON numbers(page, visible);",
    )?;

    mark_applied(conn, version, "Added (page, visible) index on numbers")?;
    success(format!("Migration applied: {version}"));
    Ok(())
}

/// Public entry point: run all pending migrations. Idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "numbers")? {
        create_numbers_table(conn)?;
        success("Created numbers table.");
    }

    if !table_exists(conn, "settings")? {
        create_settings_table(conn)?;
        success("Created settings table.");
    }

    migrate_add_page_index(conn)?;

    Ok(())
}
