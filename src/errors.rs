//! Unified error type for the school office service.
//!
//! Every layer returns [`Result`]; the bot layer is the only place where errors
//! are turned into user-visible messages.

use sea_orm::DbErr;
use thiserror::Error;

/// All errors produced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings file or environment could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Any persistence failure that is not a known constraint violation
    #[error("Database error: {0}")]
    Database(Box<DbErr>),

    /// A form field failed validation before reaching the database
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Monetary amount is negative, not finite, or too large to write out
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// Number cannot be written out in words
    #[error("Number {value} is outside the supported range for words (0 to 999999)")]
    NumberOutOfRange {
        /// The rejected value
        value: u64,
    },

    /// The storage layer already holds a receipt with this number
    #[error("Receipt number {receipt_number} already exists")]
    ReceiptNumberConflict {
        /// The duplicated receipt number
        receipt_number: String,
    },

    /// No receipt with this number exists
    #[error("Receipt '{receipt_number}' not found")]
    ReceiptNotFound {
        /// The number that was looked up
        receipt_number: String,
    },

    /// No student with this id exists
    #[error("Student {id} not found")]
    StudentNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// The current user lacks the admin role required for an action
    #[error("Permission denied: {action} requires an administrator")]
    PermissionDenied {
        /// The attempted action
        action: String,
    },

    /// Receipt document template failed to compile or render
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// The printable document could not be handed to its destination
    #[error("Print surface unavailable: {reason}")]
    PrintSurfaceUnavailable {
        /// Why the surface could not be opened
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// String formatting error while building a message
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<DbErr> for Error {
    fn from(value: DbErr) -> Self {
        Self::Database(Box::new(value))
    }
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
