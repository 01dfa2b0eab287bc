//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Store(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No attendance data found for {0}")]
    NoDataForDate(String),

    #[error("No attendance data found between {0} and {1}")]
    NoDataForRange(String, String),

    #[error("No person with id {0} in the roster")]
    UnknownPerson(String),

    // ---------------------------
    // Day-end rollover errors
    // ---------------------------
    #[error("Day-end failed before anything was written: {0}")]
    RolloverArchive(String),

    #[error(
        "Day-end interrupted: history for {0} was saved but the roster was not reset ({1}); run `end-day --resume`"
    )]
    RolloverPending(String, String),

    #[error("A day-end operation is already in progress")]
    RolloverInFlight,

    #[error("Operation requires the admin role: {0}")]
    Forbidden(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
