//! Student Discord commands - register, list and remove students.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete, notify_failure},
        core::{
            format,
            student::{self, NewStudent},
        },
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Parent command for the student directory.
    #[poise::command(
        slash_command,
        rename = "aluno",
        subcommands("student_new", "student_list", "student_delete")
    )]
    pub async fn student(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Comandos de aluno:\n\
            `/aluno novo` - Cadastrar aluno\n\
            `/aluno listar` - Listar alunos\n\
            `/aluno excluir` - Excluir aluno (administradores)";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Registers a student in the directory.
    #[poise::command(slash_command, rename = "novo")]
    pub async fn student_new(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Nome completo"] nome: String,
        #[description = "E-mail"] email: Option<String>,
        #[description = "Telefone"] telefone: Option<String>,
        #[description = "Série (ex: 9º ano)"] serie: Option<String>,
        #[description = "Nome do responsável"] responsavel: Option<String>,
        #[description = "Telefone do responsável"] telefone_responsavel: Option<String>,
    ) -> Result<()> {
        let bot_data = ctx.data();
        let new_student = NewStudent {
            name: nome,
            email,
            phone: telefone,
            grade: serie,
            responsible_name: responsavel,
            responsible_phone: telefone_responsavel,
        };

        match student::create_student(&bot_data.database, &bot_data.cache, new_student).await {
            Ok(stored) => {
                ctx.say(format!("✅ Aluno cadastrado com sucesso: **{}**", stored.name))
                    .await?;
                Ok(())
            }
            Err(e) => notify_failure(ctx, "Erro ao cadastrar aluno", &e).await,
        }
    }

    /// Lists registered students, newest first.
    #[poise::command(slash_command, rename = "listar")]
    pub async fn student_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let bot_data = ctx.data();
        let students = match student::list_students(&bot_data.database, &bot_data.cache).await {
            Ok(students) => students,
            Err(e) => return notify_failure(ctx, "Erro ao listar alunos", &e).await,
        };

        if students.is_empty() {
            ctx.say("👩‍🎓 Nenhum aluno cadastrado. Use `/aluno novo` para começar.")
                .await?;
            return Ok(());
        }

        let mut text = String::from("👩‍🎓 **Alunos**\n");
        for s in &students {
            write!(&mut text, "• {}", s.name)?;
            if let Some(grade) = &s.grade {
                write!(&mut text, " · {grade}")?;
            }
            if let Some(responsible) = &s.responsible_name {
                write!(&mut text, " · resp. {responsible}")?;
            }
            writeln!(
                &mut text,
                " · desde {}",
                format::format_short_date(s.created_at.date_naive())
            )?;
        }

        ctx.say(text).await?;
        Ok(())
    }

    /// Removes a student. Issued receipts keep the student's name.
    #[poise::command(slash_command, rename = "excluir")]
    pub async fn student_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Aluno a excluir"]
        #[autocomplete = "autocomplete::autocomplete_student"]
        aluno: String,
    ) -> Result<()> {
        let bot_data = ctx.data();

        if !bot_data.admins.is_admin(&ctx.author().id.to_string()) {
            let denied = Error::PermissionDenied {
                action: "excluir aluno".to_string(),
            };
            return notify_failure(ctx, "Acesso negado", &denied).await;
        }

        let student_id = match aluno.trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                let invalid = Error::InvalidField {
                    field: "aluno",
                    reason: "escolha um aluno da lista".to_string(),
                };
                return notify_failure(ctx, "Dados inválidos", &invalid).await;
            }
        };

        match student::delete_student(&bot_data.database, &bot_data.cache, student_id).await {
            Ok(()) => {
                ctx.say("✅ Aluno excluído com sucesso!").await?;
                Ok(())
            }
            Err(e) => notify_failure(ctx, "Erro ao excluir aluno", &e).await,
        }
    }
}

// Re-export all commands
pub use inner::*;
