//! Core business logic - framework-agnostic receipt issuance, formatting, and printing.

/// Printable receipt document
pub mod document;
/// Brazilian Portuguese money and date formatting
pub mod format;
/// Print/export trigger
pub mod print;
/// Receipt form validation, issuance, and listings
pub mod receipt;
/// Receipt sequence generator
pub mod sequence;
/// Student directory
pub mod student;
/// Numbers and amounts in Portuguese words
pub mod words;
