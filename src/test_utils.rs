//! Shared test utilities.
//!
//! Helpers for setting up in-memory databases and creating students and
//! receipts with sensible defaults.

use crate::{
    cache::QueryCache,
    core::{
        receipt::{ReceiptForm, insert_receipt},
        student::{NewStudent, create_student},
    },
    entities,
    errors::Result,
};
use chrono::{NaiveDate, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// The receipt form used throughout the tests.
///
/// Maria Silva, "Mensalidade Janeiro/2026", R$ 450,00 on 2026-01-06.
pub fn sample_form() -> ReceiptForm {
    ReceiptForm {
        student_id: None,
        student_name: "Maria Silva".to_string(),
        description: "Mensalidade Janeiro/2026".to_string(),
        amount: "450.00".to_string(),
        date: "2026-01-06".to_string(),
    }
}

/// A stored-looking receipt that never touched a database.
#[allow(clippy::unwrap_used)]
pub fn sample_receipt_model() -> entities::receipt::Model {
    entities::receipt::Model {
        id: 3,
        receipt_number: "REC-2026-003".to_string(),
        student_id: None,
        student_name: "Maria Silva".to_string(),
        description: "Mensalidade Janeiro/2026".to_string(),
        amount: 450.0,
        date: NaiveDate::from_ymd_opt(2026, 1, 6).unwrap(),
        created_at: Utc.with_ymd_and_hms(2026, 1, 6, 14, 30, 0).unwrap(),
    }
}

/// Inserts the sample receipt under a fixed number, bypassing the sequence.
pub async fn create_test_receipt(
    db: &DatabaseConnection,
    receipt_number: &str,
) -> Result<entities::receipt::Model> {
    let new_receipt = sample_form().parse()?;
    insert_receipt(db, &new_receipt, receipt_number.to_string()).await
}

/// Registers a student with only a name.
pub async fn create_test_student(
    db: &DatabaseConnection,
    cache: &QueryCache,
    name: &str,
) -> Result<entities::student::Model> {
    create_student(db, cache, NewStudent::named(name)).await
}
