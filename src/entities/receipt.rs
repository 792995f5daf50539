//! Receipt entity - An immutable record of a single payment.
//!
//! Each receipt carries a human-readable `receipt_number` (`REC-<year>-<seq>`),
//! the student name as it was when the receipt was issued, a description,
//! the amount paid and the payment date. Receipts are write-once: the crate
//! exposes no update or delete path for them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Receipt database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "receipts")]
pub struct Model {
    /// Unique identifier assigned by the database
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-facing sequential number, e.g. `REC-2026-003`
    #[sea_orm(unique)]
    pub receipt_number: String,
    /// Student the payment came from, if it was picked from the directory
    pub student_id: Option<i64>,
    /// Student name copied at issuance so later renames do not alter the receipt
    pub student_name: String,
    /// What the payment refers to (e.g. "Mensalidade Janeiro/2026")
    pub description: String,
    /// Amount paid in reais
    pub amount: f64,
    /// Payment date printed on the document
    pub date: Date,
    /// When the receipt row was stored
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Receipt and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A receipt optionally belongs to one student
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "SetNull"
    )]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
