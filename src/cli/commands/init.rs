use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::{init_db, seed_pages};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with every pending migration
///  - the 54 seats of each page, when the page is still empty
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info("Initializing rosterboard…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::new(&db_path)?;
    init_db(&pool.conn)?;
    let seeded = seed_pages(&pool.conn)?;

    if seeded > 0 {
        success(format!("Seeded {seeded} seats"));
    }
    success(format!("Database initialized at {}", &db_path));

    ttlog_quiet(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {db_path} ({seeded} seats seeded)"),
    );

    Ok(())
}
