//! SQLite connection wrapper (one connection per CLI invocation or worker).

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // page fetches may run on parallel connections
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self { conn })
    }
}
