//! Unified application error type.
//! Every module (db, core, cli, utils) returns AppError so that failures
//! reach `main` through a single path.

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
    #[error("Invalid input for {field}: '{value}' is not a number")]
    InvalidInput { field: &'static str, value: String },

    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    #[error("Value out of range for {field}: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Tracker / session errors
    // ---------------------------
    #[error("Inconsistent tracker state: {0}")]
    InvalidState(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Username and password must not be empty")]
    EmptyCredentials,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
