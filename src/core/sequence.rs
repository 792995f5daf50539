//! Receipt sequence generator.
//!
//! The next number is derived from the total count of stored receipts:
//! `REC-<year>-<count + 1>`, zero padded to three digits. Counting and the
//! later insert are two separate statements, so two issuances running at the
//! same time can observe the same count and produce the same number. Nothing
//! here locks or reserves a number; the unique constraint on
//! `receipts.receipt_number` rejects the second insert.

use crate::{entities::Receipt, errors::Result};
use chrono::Datelike;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tracing::{debug, instrument};

/// Prefix of every receipt number.
pub const RECEIPT_PREFIX: &str = "REC";

/// Formats the number that follows `count` existing receipts.
///
/// `format_receipt_number(2026, 2)` is `REC-2026-003`. Sequences past 999 keep
/// growing (`REC-2026-1000`).
#[must_use]
pub fn format_receipt_number(year: i32, count: u64) -> String {
    format!("{RECEIPT_PREFIX}-{year}-{:03}", count + 1)
}

/// The current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Reads the receipt count and returns the next receipt number for `year`.
///
/// Read-only: the number is not reserved.
///
/// # Errors
/// Returns an error if the count query fails; no receipt number is produced.
#[instrument(skip(db))]
pub async fn next_receipt_number(db: &DatabaseConnection, year: i32) -> Result<String> {
    let count = Receipt::find().count(db).await?;
    let number = format_receipt_number(year, count);
    debug!("Next receipt number after {count} receipts: {number}");
    Ok(number)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::{create_test_receipt, init_test_tracing, setup_test_db};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    #[test]
    fn test_format_receipt_number_pads_to_three_digits() {
        assert_eq!(format_receipt_number(2026, 0), "REC-2026-001");
        assert_eq!(format_receipt_number(2026, 2), "REC-2026-003");
        assert_eq!(format_receipt_number(2026, 98), "REC-2026-099");
        assert_eq!(format_receipt_number(2026, 999), "REC-2026-1000");
    }

    #[tokio::test]
    async fn test_next_number_on_empty_table() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        assert_eq!(next_receipt_number(&db, 2026).await?, "REC-2026-001");
        Ok(())
    }

    #[tokio::test]
    async fn test_next_number_follows_count() -> Result<()> {
        init_test_tracing();
        let db = setup_test_db().await?;
        create_test_receipt(&db, "REC-2026-001").await?;
        create_test_receipt(&db, "REC-2026-002").await?;

        assert_eq!(next_receipt_number(&db, 2026).await?, "REC-2026-003");
        Ok(())
    }

    #[tokio::test]
    async fn test_count_failure_propagates() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let result = next_receipt_number(&db, 2026).await;
        assert!(matches!(result, Err(Error::Database(_))));
    }
}
