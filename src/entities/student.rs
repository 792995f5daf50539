//! Student entity - The office's student directory.
//!
//! Receipts only read the student's id and name; the remaining contact fields
//! are kept so the directory is useful on its own.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Student database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Unique identifier for the student
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name of the student
    pub name: String,
    /// Contact e-mail
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// School grade (e.g. "9º ano")
    pub grade: Option<String>,
    /// Name of the parent or guardian
    pub responsible_name: Option<String>,
    /// Phone of the parent or guardian
    pub responsible_phone: Option<String>,
    /// When the student was registered
    pub created_at: DateTimeUtc,
    /// When the student was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Student and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One student has many receipts
    #[sea_orm(has_many = "super::receipt::Entity")]
    Receipts,
}

impl Related<super::receipt::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Receipts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
