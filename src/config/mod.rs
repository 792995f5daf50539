/// Database configuration and connection management
pub mod database;

/// Admin role lookup from environment variables
pub mod roles;

/// Settings loading from settings.toml
pub mod settings;
