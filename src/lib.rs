//! School office receipts - a Discord bot for a private tutoring office
//!
//! This crate issues sequentially numbered payment receipts (`REC-<year>-<seq>`),
//! keeps a small student directory, and renders each receipt as a printable
//! A5 landscape document with the amount written out in Portuguese words.

#![deny(
    unsafe_code,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    rust_2018_idioms,
)]
#![allow(clippy::module_name_repetitions)]

// `missing_docs` stays a warning: `poise::command` expands to undocumented items.

/// Discord bot interface - commands, handlers, and bot context
pub mod bot;
/// Explicit query cache for listings
pub mod cache;
/// Configuration management for database, settings, and admin roles
pub mod config;
/// Core business logic - framework-agnostic receipt issuance, formatting, and printing
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
