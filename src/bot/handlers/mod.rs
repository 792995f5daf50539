//! Discord interaction handlers
//!
//! Handlers for interactions that are not commands themselves: autocomplete
//! suggestions and delivering printable receipts as replies.

/// Autocomplete handlers for student names and receipt numbers
pub mod autocomplete;
/// Print surface backed by a Discord reply
pub mod print;
