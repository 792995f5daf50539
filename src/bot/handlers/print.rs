//! Print surface that hands the printable page to the user as a Discord attachment.

use crate::{
    bot::BotData,
    core::print::{PrintJob, PrintOutcome, PrintSurface},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::{info, warn};

/// Replies to the invoking command with the page attached.
pub struct ReplySurface<'a> {
    ctx: poise::Context<'a, BotData, Error>,
}

impl<'a> ReplySurface<'a> {
    /// Surface replying in the channel of `ctx`.
    #[must_use]
    pub const fn new(ctx: poise::Context<'a, BotData, Error>) -> Self {
        Self { ctx }
    }
}

impl PrintSurface for ReplySurface<'_> {
    async fn open(&self, job: &PrintJob) -> Result<PrintOutcome> {
        let mut content = format!(
            "🧾 Recibo {}: abra o arquivo anexo no navegador para imprimir.",
            job.receipt_number()
        );
        if let Some(hint) = job.user_hint() {
            content.push('\n');
            content.push_str(hint);
        }

        let attachment =
            serenity::CreateAttachment::bytes(job.html().as_bytes().to_vec(), job.file_name());
        self.ctx
            .send(
                poise::CreateReply::default()
                    .content(content)
                    .attachment(attachment),
            )
            .await
            .map_err(|e| {
                warn!("Could not attach {}: {e}", job.file_name());
                Error::PrintSurfaceUnavailable {
                    reason: e.to_string(),
                }
            })?;

        info!("Delivered printable receipt {}", job.receipt_number());
        Ok(PrintOutcome::Delivered)
    }
}
