//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid event type: {0}")]
    InvalidEventType(String),

    #[error("Invalid career type: {0}")]
    InvalidCareerType(String),

    /// Per-field validation failure, `code` mirrors the form error keys
    /// (`invalid_date_format`, `invalid_memorial_date`, ...).
    #[error("Invalid value for '{field}': {code}")]
    Validation { field: &'static str, code: &'static str },

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No event with id {0}")]
    EventNotFound(i64),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / import errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),
}

impl AppError {
    pub fn validation(field: &'static str, code: &'static str) -> Self {
        AppError::Validation { field, code }
    }
}

pub type AppResult<T> = Result<T, AppError>;
