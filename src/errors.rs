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

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Malformed row: {0}")]
    Mapping(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(i64),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    // ---------------------------
    // Catalog lookups
    // ---------------------------
    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Unknown add-on: {0}")]
    UnknownAddOn(String),

    #[error("Unknown stylist: {0}")]
    UnknownStylist(String),

    #[error("Unknown booking: {0}")]
    UnknownBooking(String),

    // ---------------------------
    // Booking errors
    // ---------------------------
    #[error("Invalid client details: {0}")]
    InvalidClient(String),

    #[error("{stylist} does not work on {date}")]
    StylistOffDuty { stylist: String, date: String },

    #[error("Slot {time} on {date} is no longer available")]
    SlotConflict { date: String, time: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

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
