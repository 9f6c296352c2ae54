//! Item catalog seam used by the report and export pipelines.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::Item;

/// Source of catalog snapshots, for one page or for all of them.
///
/// Implementations must be shareable across threads: page exports fetch
/// their snapshots concurrently.
pub trait CatalogProvider: Sync {
    fn fetch_catalog(&self, page: Option<u8>) -> AppResult<Vec<Item>>;
}

/// Catalog backed by the SQLite database. Every fetch opens its own connection.
pub struct SqliteCatalog {
    db_path: String,
}

impl SqliteCatalog {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }
}

impl CatalogProvider for SqliteCatalog {
    fn fetch_catalog(&self, page: Option<u8>) -> AppResult<Vec<Item>> {
        let pool = DbPool::new(&self.db_path)?;
        queries::load_items(&pool.conn, page)
    }
}

/// Fixed in-memory catalog, handy for previews and tests.
impl CatalogProvider for Vec<Item> {
    fn fetch_catalog(&self, page: Option<u8>) -> AppResult<Vec<Item>> {
        Ok(self
            .iter()
            .filter(|item| page.is_none_or(|p| item.page == p))
            .cloned()
            .collect())
    }
}
