use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::assign::AssignLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { token, all, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if *all {
            if !*yes {
                warning("This clears the activities of every seat on every page.");
                if !confirm("Continue?")? {
                    info("Nothing cleared.");
                    return Ok(());
                }
            }
            let n = AssignLogic::clear_all(&mut pool)?;
            success(format!("Cleared activities on {n} seats"));
        } else if let Some(token) = token {
            let before = AssignLogic::clear(&mut pool, token)?;
            if before.is_assigned() {
                success(format!("{token}: activities cleared"));
            } else {
                info(format!("{token}: nothing to clear"));
            }
        }
    }
    Ok(())
}
