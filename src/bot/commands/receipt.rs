//! Receipt Discord commands - issue, list, view and export receipts.
//!
//! Receipts are write-once, so there is no edit or delete command.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete, handlers::print::ReplySurface, notify_failure},
        core::{
            format,
            print::{ExportDirectory, PrintJob, PrintMode, PrintSurface},
            receipt::{self, ReceiptForm},
        },
        errors::{Error, Result},
    };
    use std::fmt::Write;
    use tracing::info;

    /// Listings longer than this are cut short in the reply.
    const MAX_LISTED: usize = 20;

    /// Parent command for receipts.
    #[poise::command(
        slash_command,
        rename = "recibo",
        subcommands("receipt_new", "receipt_list", "receipt_view", "receipt_pdf")
    )]
    pub async fn receipt(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Comandos de recibo:\n\
            `/recibo novo` - Gerar um novo recibo\n\
            `/recibo listar` - Listar recibos\n\
            `/recibo ver` - Imprimir um recibo\n\
            `/recibo pdf` - Salvar um recibo como PDF";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Issues a new receipt with the next sequential number.
    ///
    /// Picking a student from the suggestions links the receipt to the
    /// directory; typing any other name issues it for that name as-is.
    #[poise::command(slash_command, rename = "novo")]
    pub async fn receipt_new(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Aluno (escolha da lista ou digite o nome)"]
        #[autocomplete = "autocomplete::autocomplete_student"]
        aluno: String,
        #[description = "Referente a (ex: Mensalidade Janeiro/2026)"] descricao: String,
        #[description = "Valor em reais (ex: 450,00)"] valor: String,
        #[description = "Data do pagamento (AAAA-MM-DD). Padrão: hoje."] data: Option<String>,
    ) -> Result<()> {
        let is_directory_id = aluno.trim().parse::<i64>().is_ok();
        let form = ReceiptForm {
            student_id: is_directory_id.then(|| aluno.clone()),
            student_name: aluno,
            description: descricao,
            amount: valor,
            date: data.unwrap_or_else(|| chrono::Local::now().date_naive().to_string()),
        };

        // Reject bad input before any database call.
        let new_receipt = match form.parse() {
            Ok(parsed) => parsed,
            Err(e) => return notify_failure(ctx, "Dados inválidos", &e).await,
        };

        let bot_data = ctx.data();
        let stored =
            match receipt::issue_receipt(&bot_data.database, &bot_data.cache, new_receipt).await {
                Ok(stored) => stored,
                Err(e) => return notify_failure(ctx, "Erro ao gerar recibo", &e).await,
            };

        info!(
            "User {} issued receipt {}",
            ctx.author().id,
            stored.receipt_number
        );
        ctx.say(format!(
            "✅ Recibo gerado com sucesso! **{}** · {} · {} · {}\nUse `/recibo ver {}` para imprimir.",
            stored.receipt_number,
            stored.student_name,
            format::format_currency(stored.amount),
            format::format_short_date(stored.date),
            stored.receipt_number,
        ))
        .await?;
        Ok(())
    }

    /// Lists receipts, newest first, optionally filtered by student or number.
    #[poise::command(slash_command, rename = "listar")]
    pub async fn receipt_list(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Filtrar por aluno ou número"] busca: Option<String>,
    ) -> Result<()> {
        let bot_data = ctx.data();
        let receipts = match receipt::list_receipts(&bot_data.database, &bot_data.cache).await {
            Ok(receipts) => receipts,
            Err(e) => return notify_failure(ctx, "Erro ao listar recibos", &e).await,
        };

        let matching = receipt::search_receipts(&receipts, busca.as_deref().unwrap_or_default());
        if matching.is_empty() {
            ctx.say("🧾 Nenhum recibo encontrado.").await?;
            return Ok(());
        }

        let totals = receipt::summarize_receipts(matching.iter().copied());
        let mut text = String::from("🧾 **Recibos**\n");
        for r in matching.iter().take(MAX_LISTED) {
            writeln!(
                &mut text,
                "`{}` · {} · {} · {} · {}",
                r.receipt_number,
                format::format_short_date(r.date),
                r.student_name,
                r.description,
                format::format_currency(r.amount)
            )?;
        }
        if matching.len() > MAX_LISTED {
            writeln!(&mut text, "… e mais {}", matching.len() - MAX_LISTED)?;
        }
        write!(
            &mut text,
            "**Total:** {} recibo(s) · {}",
            totals.count,
            format::format_currency(totals.total)
        )?;

        ctx.say(text).await?;
        Ok(())
    }

    /// Sends a receipt ready to print.
    #[poise::command(slash_command, rename = "ver")]
    pub async fn receipt_view(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Número do recibo (ex: REC-2026-003)"]
        #[autocomplete = "autocomplete::autocomplete_receipt_number"]
        numero: String,
    ) -> Result<()> {
        deliver_receipt(ctx, &numero, PrintMode::Print).await
    }

    /// Sends a receipt to be saved as PDF from the print dialog.
    #[poise::command(slash_command, rename = "pdf")]
    pub async fn receipt_pdf(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Número do recibo (ex: REC-2026-003)"]
        #[autocomplete = "autocomplete::autocomplete_receipt_number"]
        numero: String,
    ) -> Result<()> {
        deliver_receipt(ctx, &numero, PrintMode::SavePdf).await
    }

    async fn deliver_receipt(
        ctx: poise::Context<'_, BotData, Error>,
        receipt_number: &str,
        mode: PrintMode,
    ) -> Result<()> {
        let bot_data = ctx.data();

        let found = match receipt::get_receipt_by_number(&bot_data.database, receipt_number).await
        {
            Ok(found) => found,
            Err(e) => return notify_failure(ctx, "Erro ao buscar recibo", &e).await,
        };
        let Some(stored) = found else {
            let missing = Error::ReceiptNotFound {
                receipt_number: receipt_number.to_string(),
            };
            return notify_failure(ctx, "Recibo não encontrado", &missing).await;
        };

        let job = match PrintJob::new(&bot_data.renderer, &stored, mode) {
            Ok(job) => job,
            Err(e) => return notify_failure(ctx, "Erro ao gerar o documento", &e).await,
        };

        if let Err(e) = ReplySurface::new(ctx).open(&job).await {
            return notify_failure(ctx, "Não foi possível enviar o recibo", &e).await;
        }

        if let Some(dir) = &bot_data.settings.print.export_dir {
            if let Err(e) = ExportDirectory::new(dir).open(&job).await {
                return notify_failure(ctx, "Não foi possível exportar o recibo", &e).await;
            }
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
