//! Autocomplete handlers for Discord slash command parameters.

use crate::{
    bot::BotData,
    core::{receipt, student},
    errors::Error,
};
use poise::serenity_prelude as serenity;

/// Discord shows at most this many suggestions.
const MAX_SUGGESTIONS: usize = 25;

/// Suggests students whose name contains the partial input.
///
/// The visible label is the name; the submitted value is the student id, so the
/// command can link the receipt to the directory entry.
pub async fn autocomplete_student(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<serenity::AutocompleteChoice> {
    let db = &ctx.data().database;

    let Ok(students) = student::find_students_by_name(db, partial).await else {
        return Vec::new();
    };

    students
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|s| serenity::AutocompleteChoice::new(s.name, s.id.to_string()))
        .collect()
}

/// Suggests receipt numbers or student names matching the partial input,
/// newest receipts first.
pub async fn autocomplete_receipt_number(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let data = ctx.data();

    let Ok(receipts) = receipt::list_receipts(&data.database, &data.cache).await else {
        return Vec::new();
    };

    receipt::search_receipts(&receipts, partial)
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|r| r.receipt_number.clone())
        .collect()
}
