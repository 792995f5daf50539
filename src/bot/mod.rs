//! Bot layer - Discord-specific interface and command handlers
//!
//! Slash commands are the action boundary of the service: every failure coming
//! out of the core is caught here and shown to the user as a short `❌` reply.

/// Discord command implementations (receipts, students, general)
pub mod commands;
/// Framework setup and the bot's main loop
pub mod framework;
/// Discord interaction handlers (autocomplete, print replies)
pub mod handlers;

use crate::{
    cache::QueryCache,
    config::{roles::AdminRoster, settings::Settings},
    core::document::DocumentRenderer,
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use tracing::warn;

/// Shared data available to all bot commands.
pub struct BotData {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Cached listings, invalidated by writes
    pub cache: QueryCache,
    /// Compiled receipt template
    pub renderer: DocumentRenderer,
    /// Loaded settings.toml
    pub settings: Settings,
    /// Users allowed to run admin-only commands
    pub admins: AdminRoster,
}

impl BotData {
    /// Creates the shared context for all commands.
    ///
    /// # Errors
    /// Returns an error if the receipt template does not compile.
    pub fn new(
        database: DatabaseConnection,
        settings: Settings,
        admins: AdminRoster,
    ) -> Result<Self> {
        Ok(Self {
            database,
            cache: QueryCache::new(),
            renderer: DocumentRenderer::new()?,
            settings,
            admins,
        })
    }
}

/// Tells the user that `action` failed, as a message only they can see.
///
/// # Errors
/// Returns an error only if Discord rejects the reply itself.
pub async fn notify_failure(
    ctx: poise::Context<'_, BotData, Error>,
    action: &str,
    error: &Error,
) -> Result<()> {
    warn!("{action} failed for user {}: {error}", ctx.author().id);
    ctx.send(
        poise::CreateReply::default()
            .content(format!("❌ {action}: {error}"))
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

pub use commands::*;
pub use handlers::*;
