//! Unified application error type.
//! All modules (db, core, api, cli) return AppError so that a failure can be
//! rendered the same way on the terminal and in the JSON service.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("{0}")]
    DuplicateKey(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Error processing file: {0}")]
    DecodeFailure(String),

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

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Stable machine-readable code used by the JSON service.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DuplicateKey(_) => "duplicate_key",
            AppError::NotFound(_) => "not_found",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::DecodeFailure(_) => "decode_failure",
            _ => "internal",
        }
    }

    /// HTTP-like status reported alongside the error code.
    pub fn status(&self) -> u16 {
        match self {
            AppError::DuplicateKey(_) | AppError::InvalidInput(_) | AppError::DecodeFailure(_) => {
                400
            }
            AppError::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Translate a failed INSERT: unique / primary key violations become
    /// `DuplicateKey(message)`, everything else stays a database error.
    pub fn from_insert(e: rusqlite::Error, message: &str) -> Self {
        if is_unique_violation(&e) {
            AppError::DuplicateKey(message.to_string())
        } else {
            AppError::Db(e)
        }
    }
}

/// True when SQLite rejected a statement because of a UNIQUE or PRIMARY KEY
/// constraint.
pub fn is_unique_violation(e: &rusqlite::Error) -> bool {
    use rusqlite::ffi::{SQLITE_CONSTRAINT_PRIMARYKEY, SQLITE_CONSTRAINT_UNIQUE};

    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == SQLITE_CONSTRAINT_PRIMARYKEY
                || err.extended_code == SQLITE_CONSTRAINT_UNIQUE
    )
}

pub type AppResult<T> = Result<T, AppError>;
