use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::item::page_of_token;
use crate::models::{Category, Item, Slot};

use super::pages::PageSettingsLogic;

/// What a toggle did to the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Set(Category),
    Cleared(Category),
}

pub struct AssignLogic;

impl AssignLogic {
    fn load(pool: &DbPool, token: &str) -> AppResult<Item> {
        if page_of_token(token).is_none() {
            return Err(AppError::InvalidToken(token.to_string()));
        }
        queries::find_by_token(&pool.conn, token)?
            .ok_or_else(|| AppError::UnknownToken(token.to_string()))
    }

    /// Select `category` on `slot`, or clear it when it is already selected.
    pub fn toggle(
        pool: &mut DbPool,
        token: &str,
        slot: Slot,
        category: Category,
    ) -> AppResult<ToggleOutcome> {
        let item = Self::load(pool, token)?;

        if !PageSettingsLogic::slot_enabled(pool, item.page, slot)? {
            return Err(AppError::SlotDisabled {
                slot: slot.label().to_string(),
                page: item.page,
            });
        }

        let outcome = if item.slot(slot) == Some(category) {
            queries::set_slot(&pool.conn, item.id, slot, None)?;
            ToggleOutcome::Cleared(category)
        } else {
            queries::set_slot(&pool.conn, item.id, slot, Some(category))?;
            ToggleOutcome::Set(category)
        };

        let message = match outcome {
            ToggleOutcome::Set(c) => format!("{} set to {}", slot.column(), c),
            ToggleOutcome::Cleared(c) => format!("{} cleared (was {})", slot.column(), c),
        };
        ttlog_quiet(&pool.conn, "set", token, &message);

        Ok(outcome)
    }

    /// Clear both slots of one item. Returns the item as it was before.
    pub fn clear(pool: &mut DbPool, token: &str) -> AppResult<Item> {
        let item = Self::load(pool, token)?;
        queries::clear_item(&pool.conn, item.id)?;
        ttlog_quiet(&pool.conn, "clear", token, "activities cleared");
        Ok(item)
    }

    /// Clear every assignment on every page.
    pub fn clear_all(pool: &mut DbPool) -> AppResult<usize> {
        let n = queries::clear_all(&pool.conn)?;
        ttlog_quiet(
            &pool.conn,
            "clear",
            "all",
            &format!("activities cleared on {n} items"),
        );
        Ok(n)
    }
}
