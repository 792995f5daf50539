//! Receipt business logic - form validation, issuance, and listings.
//!
//! Issuance is two steps: read the receipt count to derive the next number,
//! then insert the row. Form input arrives as loose strings and is parsed into
//! a [`NewReceipt`] before anything touches the database, so invalid input never
//! produces a partial side effect. Receipts are never updated or deleted.

use crate::{
    cache::{CacheKey, CachedValue, QueryCache},
    core::{sequence, student},
    entities::{Receipt, receipt},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, SqlErr, prelude::*};
use serde::Deserialize;
use tracing::{info, instrument, warn};

/// Largest accepted amount; the whole part must still be writable in words.
pub const MAX_AMOUNT: f64 = 999_999.99;

/// Receipt form exactly as submitted: every field is still a string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReceiptForm {
    /// Directory id of the student, if one was picked
    #[serde(default)]
    pub student_id: Option<String>,
    /// Student name as typed or picked
    pub student_name: String,
    /// What the payment refers to
    pub description: String,
    /// Amount in reais, `.` or `,` as decimal separator
    pub amount: String,
    /// Payment date, `YYYY-MM-DD`
    pub date: String,
}

/// A validated receipt ready to be issued.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReceipt {
    /// Directory id of the student
    pub student_id: Option<i64>,
    /// Student name to print
    pub student_name: String,
    /// What the payment refers to
    pub description: String,
    /// Amount in reais
    pub amount: f64,
    /// Payment date
    pub date: NaiveDate,
}

impl ReceiptForm {
    /// Validates the form into a [`NewReceipt`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidField`] or [`Error::InvalidAmount`] for the first
    /// field that fails validation.
    pub fn parse(&self) -> Result<NewReceipt> {
        let student_name = required(&self.student_name, "student_name")?;
        let description = required(&self.description, "description")?;
        let amount = parse_amount(&self.amount)?;
        let date = parse_date(&self.date)?;
        let student_id = self
            .student_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|raw| {
                raw.parse::<i64>().map_err(|_| Error::InvalidField {
                    field: "student_id",
                    reason: format!("'{raw}' is not a student id"),
                })
            })
            .transpose()?;

        Ok(NewReceipt {
            student_id,
            student_name,
            description,
            amount,
            date,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidField {
            field,
            reason: "cannot be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Parses an amount typed as `450`, `450.00`, `450,00` or `1.234,56`.
///
/// At most two decimal places are accepted, so `1.234` is rejected rather than
/// read as one real and change.
///
/// # Errors
/// Returns [`Error::InvalidField`] if the text is not a number or has more than
/// two decimal places, and [`Error::InvalidAmount`] if it is negative, not
/// finite, or above [`MAX_AMOUNT`].
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidField {
            field: "amount",
            reason: "cannot be empty".to_string(),
        });
    }

    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };

    if normalized
        .split_once('.')
        .is_some_and(|(_, fraction)| fraction.len() > 2)
    {
        return Err(Error::InvalidField {
            field: "amount",
            reason: format!("'{trimmed}' has more than two decimal places"),
        });
    }

    let amount: f64 = normalized.parse().map_err(|_| Error::InvalidField {
        field: "amount",
        reason: format!("'{trimmed}' is not a number"),
    })?;

    if !amount.is_finite() || amount < 0.0 || amount > MAX_AMOUNT {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(amount)
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Errors
/// Returns [`Error::InvalidField`] if the text is not a valid date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| Error::InvalidField {
        field: "date",
        reason: format!("'{trimmed}' is not a date in YYYY-MM-DD form"),
    })
}

/// Inserts a receipt under an already generated number.
///
/// A duplicate number is reported as [`Error::ReceiptNumberConflict`]; the
/// receipt is not renumbered or retried.
///
/// # Errors
/// Returns an error if the insert fails.
#[instrument(skip(db, new_receipt), fields(student = %new_receipt.student_name))]
pub async fn insert_receipt(
    db: &DatabaseConnection,
    new_receipt: &NewReceipt,
    receipt_number: String,
) -> Result<receipt::Model> {
    let model = receipt::ActiveModel {
        receipt_number: Set(receipt_number.clone()),
        student_id: Set(new_receipt.student_id),
        student_name: Set(new_receipt.student_name.clone()),
        description: Set(new_receipt.description.clone()),
        amount: Set(new_receipt.amount),
        date: Set(new_receipt.date),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    model.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            warn!("Receipt number {receipt_number} already taken: {detail}");
            Error::ReceiptNumberConflict { receipt_number }
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => Error::StudentNotFound {
            id: new_receipt.student_id.unwrap_or_default(),
        },
        _ => e.into(),
    })
}

/// Issues a receipt numbered for the current year.
///
/// # Errors
/// See [`issue_receipt_in_year`].
pub async fn issue_receipt(
    db: &DatabaseConnection,
    cache: &QueryCache,
    new_receipt: NewReceipt,
) -> Result<receipt::Model> {
    issue_receipt_in_year(db, cache, new_receipt, sequence::current_year()).await
}

/// Issues a receipt: copies the student's current name, derives the next
/// number for `year`, inserts the row, and invalidates the receipt listing.
///
/// Count and insert are not atomic. If another issuance took the same number
/// in between, the insert fails with [`Error::ReceiptNumberConflict`].
///
/// # Errors
/// Returns an error if the student id is unknown, the count query fails, or
/// the insert fails. Nothing is stored in any of those cases.
#[instrument(skip(db, cache, new_receipt))]
pub async fn issue_receipt_in_year(
    db: &DatabaseConnection,
    cache: &QueryCache,
    mut new_receipt: NewReceipt,
    year: i32,
) -> Result<receipt::Model> {
    new_receipt.student_name =
        student::resolve_student_name(db, new_receipt.student_id, &new_receipt.student_name)
            .await?;

    let receipt_number = sequence::next_receipt_number(db, year).await?;
    let stored = insert_receipt(db, &new_receipt, receipt_number).await?;

    cache.invalidate(CacheKey::Receipts).await;
    info!(
        "Issued receipt {} for {}: amount={:.2}",
        stored.receipt_number, stored.student_name, stored.amount
    );
    Ok(stored)
}

/// All receipts, newest first. Served from the cache when populated.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_receipts(
    db: &DatabaseConnection,
    cache: &QueryCache,
) -> Result<Vec<receipt::Model>> {
    if let Some(receipts) = cache.receipts().await {
        return Ok(receipts);
    }

    let receipts = Receipt::find()
        .order_by_desc(receipt::Column::CreatedAt)
        .order_by_desc(receipt::Column::Id)
        .all(db)
        .await?;
    cache
        .set(CacheKey::Receipts, CachedValue::Receipts(receipts.clone()))
        .await;
    Ok(receipts)
}

/// Looks up a receipt by its printed number (case-insensitive on the prefix).
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_receipt_by_number(
    db: &DatabaseConnection,
    receipt_number: &str,
) -> Result<Option<receipt::Model>> {
    Receipt::find()
        .filter(receipt::Column::ReceiptNumber.eq(receipt_number.trim().to_uppercase()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Looks up a receipt by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_receipt_by_id(
    db: &DatabaseConnection,
    receipt_id: i64,
) -> Result<Option<receipt::Model>> {
    Receipt::find_by_id(receipt_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Filters receipts whose student name or number contains `term`, ignoring case.
/// An empty term keeps everything.
#[must_use]
pub fn search_receipts<'a>(receipts: &'a [receipt::Model], term: &str) -> Vec<&'a receipt::Model> {
    let needle = term.trim().to_lowercase();
    receipts
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r.student_name.to_lowercase().contains(&needle)
                || r.receipt_number.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Count and sum of a set of receipts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReceiptTotals {
    /// Number of receipts
    pub count: usize,
    /// Sum of their amounts
    pub total: f64,
}

/// Totals for a listing footer.
#[must_use]
pub fn summarize_receipts<'a, I>(receipts: I) -> ReceiptTotals
where
    I: IntoIterator<Item = &'a receipt::Model>,
{
    receipts
        .into_iter()
        .fold(ReceiptTotals { count: 0, total: 0.0 }, |acc, r| ReceiptTotals {
            count: acc.count + 1,
            total: acc.total + r.amount,
        })
}
