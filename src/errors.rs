//! Unified application error type.
//! Every layer (db, core, cli, export) returns AppError so failures reach the
//! user through a single path.

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
    // Repository / transport
    // ---------------------------
    #[error("Repository unavailable: {0}")]
    Transport(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM or HH:MM:SS)")]
    InvalidTime(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Lookup
    // ---------------------------
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("Entry not found: #{0}")]
    EntryNotFound(i64),

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

/// Coarse classification used when reporting a failure to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or malformed input; the repository was never contacted.
    Validation,
    /// The repository reports that the target does not exist.
    NotFound,
    /// The repository call could not complete.
    Transport,
    /// Local failures (files, configuration, export).
    Local,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Validation(_)
            | AppError::InvalidDate(_)
            | AppError::InvalidTime(_)
            | AppError::InvalidRange(_) => ErrorCategory::Validation,
            AppError::EmployeeNotFound(_) | AppError::EntryNotFound(_) => ErrorCategory::NotFound,
            AppError::Transport(_) | AppError::Migration(_) => ErrorCategory::Transport,
            AppError::Io(_) | AppError::Config(_) | AppError::Export(_) => ErrorCategory::Local,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }
}

pub type AppResult<T> = Result<T, AppError>;
