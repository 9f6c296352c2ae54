//! Unified application error type.
//! All modules (db, core, render, export, cli) return AppError so the
//! dispatcher can report every failure in the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid token '{0}': expected <page>-<number>, e.g. 1-03")]
    InvalidToken(String),

    #[error("Invalid page {0}: pages go from 1 to 3")]
    InvalidPage(i64),

    #[error("Invalid category '{0}': use one of KF, Media, SportEX, SportIN")]
    InvalidCategory(String),

    #[error("Invalid slot '{0}': use a (activity 1) or b (activity 2)")]
    InvalidSlot(String),

    #[error("Invalid visible count {0}: must be between 1 and 54")]
    InvalidCount(i64),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No item found for token {0}")]
    UnknownToken(String),

    #[error("{slot} is disabled for page {page}")]
    SlotDisabled { slot: String, page: u8 },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Rendering / export errors
    // ---------------------------
    #[error("Render error: {0}")]
    Render(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
