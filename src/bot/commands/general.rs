//! General Discord commands - ping and help.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command, rename = "ajuda")]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let office = &ctx.data().settings.office.name;
        let help_text = format!(
            "**{office} - Ajuda**\n\n\
            **Recibos**\n\
            • `/recibo novo <aluno> <descricao> <valor> [data]` - Gera um novo recibo.\n\
            • `/recibo listar [busca]` - Lista os recibos, do mais recente ao mais antigo.\n\
            • `/recibo ver <numero>` - Envia o recibo pronto para impressão.\n\
            • `/recibo pdf <numero>` - Envia o recibo para salvar como PDF.\n\n\
            **Alunos**\n\
            • `/aluno novo <nome> [contatos]` - Cadastra um aluno.\n\
            • `/aluno listar` - Lista os alunos cadastrados.\n\
            • `/aluno excluir <aluno>` - Remove um aluno (somente administradores).\n\n\
            **Utilitários**\n\
            • `/ping` - Verifica se o bot está respondendo.\n\
            • `/ajuda` - Mostra esta mensagem."
        );

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
