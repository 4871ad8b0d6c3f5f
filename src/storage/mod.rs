//! Storage layer for the franchise statistics dataset
//!
//! This module is the schema accessor: a thin, read-only abstraction over the
//! SQLite store, organized into logical components:
//! - `models`: Row types for games, players, team stats, drafts and box scores
//! - `schema`: Database connection and schema management
//! - `queries`: Parameterized primitive reads
//!
//! Nothing here caches or retries; database failures surface as
//! [`StatsError::Database`](crate::StatsError::Database).

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
mod tests;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::{StatsDatabase, SCHEMA};
