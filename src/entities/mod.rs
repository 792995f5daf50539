//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod receipt;
pub mod student;

// Re-export specific types to avoid conflicts
pub use receipt::{Column as ReceiptColumn, Entity as Receipt, Model as ReceiptModel};
pub use student::{Column as StudentColumn, Entity as Student, Model as StudentModel};
