use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assign::{AssignLogic, ToggleOutcome};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, Slot};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        token,
        slot,
        category,
    } = cmd
    {
        let slot = Slot::from_code(slot).ok_or_else(|| AppError::InvalidSlot(slot.clone()))?;
        let category = Category::from_code(category)
            .ok_or_else(|| AppError::InvalidCategory(category.clone()))?;

        let mut pool = DbPool::new(&cfg.database)?;

        match AssignLogic::toggle(&mut pool, token, slot, category)? {
            ToggleOutcome::Set(c) => {
                success(format!("{token}: {} set to {c}", slot.label()));
            }
            ToggleOutcome::Cleared(c) => {
                info(format!("{token}: {} cleared (was {c})", slot.label()));
            }
        }
    }
    Ok(())
}
