//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// General utility commands
pub mod general;

/// Receipt commands
pub mod receipt;

/// Student directory commands
pub mod student;

// Export commands
pub use general::*;
pub use receipt::*;
pub use student::*;
