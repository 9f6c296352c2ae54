use crate::errors::{AppError, AppResult};
use crate::models::{Category, Item, Slot};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ITEM_COLUMNS: &str = "id, number, page, activity1, activity2, visible";

/// Mapping DB → Item (shared by every item query).
pub fn map_row(row: &Row) -> Result<Item> {
    let page: i64 = row.get("page")?;
    let page = u8::try_from(page).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Integer,
            Box::new(AppError::InvalidPage(page)),
        )
    })?;

    Ok(Item {
        id: row.get("id")?,
        token: row.get("number")?,
        page,
        slot_a: category_column(row, "activity1")?,
        slot_b: category_column(row, "activity2")?,
        visible: row.get("visible")?,
    })
}

fn category_column(row: &Row, name: &str) -> Result<Option<Category>> {
    let raw: Option<String> = row.get(name)?;
    match raw {
        None => Ok(None),
        Some(s) => Category::from_db_str(&s).map(Some).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidCategory(s.clone())),
            )
        }),
    }
}

/// All items of `page` (or of every page), ordered by token. Hidden items included.
pub fn load_items(conn: &Connection, page: Option<u8>) -> AppResult<Vec<Item>> {
    let mut out = Vec::new();

    match page {
        Some(p) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ITEM_COLUMNS} FROM numbers WHERE page = ?1 ORDER BY number ASC"
            ))?;
            for r in stmt.query_map([p], map_row)? {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {ITEM_COLUMNS} FROM numbers ORDER BY number ASC"
            ))?;
            for r in stmt.query_map([], map_row)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn find_by_token(conn: &Connection, token: &str) -> AppResult<Option<Item>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ITEM_COLUMNS} FROM numbers WHERE number = ?1 LIMIT 1"
    ))?;
    Ok(stmt.query_row([token], map_row).optional()?)
}

pub fn set_slot(conn: &Connection, id: i64, slot: Slot, value: Option<Category>) -> AppResult<()> {
    let sql = format!("UPDATE numbers SET {} = ?1 WHERE id = ?2", slot.column());
    conn.execute(&sql, params![value.map(|c| c.to_db_str()), id])?;
    Ok(())
}

pub fn clear_item(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE numbers SET activity1 = NULL, activity2 = NULL WHERE id = ?1",
        [id],
    )?;
    Ok(())
}

/// Clear both slots on every item that has one. Returns the number of rows touched.
pub fn clear_all(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE numbers SET activity1 = NULL, activity2 = NULL
         WHERE activity1 IS NOT NULL OR activity2 IS NOT NULL",
        [],
    )?;
    Ok(n)
}

pub fn set_visible(conn: &Connection, id: i64, visible: bool) -> AppResult<()> {
    conn.execute(
        "UPDATE numbers SET visible = ?1 WHERE id = ?2",
        params![visible, id],
    )?;
    Ok(())
}

pub fn visible_count(conn: &Connection, page: u8) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM numbers WHERE page = ?1 AND visible = 1",
        [page],
        |row| row.get(0),
    )?;
    Ok(n)
}
