//! Key/value access to the `settings` table.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};

pub fn get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

/// Insert or replace `key`.
pub fn upsert(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Boolean flag stored as `"true"`/`"false"`; a missing key yields `default`.
pub fn get_flag(conn: &Connection, key: &str, default: bool) -> AppResult<bool> {
    Ok(get(conn, key)?.map(|v| v == "true").unwrap_or(default))
}

pub fn set_flag(conn: &Connection, key: &str, value: bool) -> AppResult<()> {
    upsert(conn, key, if value { "true" } else { "false" })
}
