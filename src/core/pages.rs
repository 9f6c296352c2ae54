use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::{queries, settings};
use crate::errors::{AppError, AppResult};
use crate::models::Slot;
use crate::models::item::{ITEMS_PER_PAGE, PAGES};

/// Snapshot of one page's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    pub page: u8,
    pub visible: i64,
    pub slot_a_enabled: bool,
    pub slot_b_enabled: bool,
}

pub struct PageSettingsLogic;

impl PageSettingsLogic {
    pub fn check_page(page: i64) -> AppResult<u8> {
        u8::try_from(page)
            .ok()
            .filter(|p| PAGES.contains(p))
            .ok_or(AppError::InvalidPage(page))
    }

    pub fn slot_enabled(pool: &DbPool, page: u8, slot: Slot) -> AppResult<bool> {
        settings::get_flag(&pool.conn, &slot.setting_key(page), true)
    }

    pub fn set_slot_enabled(pool: &mut DbPool, page: u8, slot: Slot, enabled: bool) -> AppResult<()> {
        settings::set_flag(&pool.conn, &slot.setting_key(page), enabled)?;
        ttlog_quiet(
            &pool.conn,
            "pages",
            &format!("page{page}"),
            &format!("{} {}", slot.column(), if enabled { "enabled" } else { "disabled" }),
        );
        Ok(())
    }

    pub fn visible_count(pool: &DbPool, page: u8) -> AppResult<i64> {
        queries::visible_count(&pool.conn, page)
    }

    /// Make the first `count` items of `page` (by token order) visible and hide the rest.
    pub fn set_visible_count(pool: &mut DbPool, page: u8, count: i64) -> AppResult<()> {
        if !(1..=i64::from(ITEMS_PER_PAGE)).contains(&count) {
            return Err(AppError::InvalidCount(count));
        }

        let items = queries::load_items(&pool.conn, Some(page))?;

        let tx = pool.conn.transaction()?;
        for (index, item) in items.iter().enumerate() {
            queries::set_visible(&tx, item.id, (index as i64) < count)?;
        }
        tx.commit()?;

        ttlog_quiet(
            &pool.conn,
            "pages",
            &format!("page{page}"),
            &format!("{count} items visible"),
        );
        Ok(())
    }

    pub fn load(pool: &DbPool, page: u8) -> AppResult<PageSettings> {
        Ok(PageSettings {
            page,
            visible: Self::visible_count(pool, page)?,
            slot_a_enabled: Self::slot_enabled(pool, page, Slot::A)?,
            slot_b_enabled: Self::slot_enabled(pool, page, Slot::B)?,
        })
    }
}
