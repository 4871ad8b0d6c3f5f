//! Core utilities shared by the library and the binary
//!
//! - `config`: where the franchise database lives

pub mod config;

pub use config::{default_database_path, resolve_database_path, DATABASE_FILE};
