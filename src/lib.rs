//! Core of a personal trading journal: per-user daily risk plans, an
//! append-only trade ledger with aggregates, a compounding monthly target
//! plan, a trade-entry lock, and minimal session handling. All state lives
//! in a local SQLite key/value store; the presentation layer calls the
//! functions in [`commands`] and re-reads after each mutation.
//!
//! Two handles on the same database file race last-write-wins per value
//! (each mutation rewrites a whole JSON document). That mirrors the
//! two-browser-tabs case and is an accepted limitation.

pub mod commands;
pub mod dates;
pub mod db;
pub mod error;
pub mod models;

pub use db::Database;
pub use error::{JournalError, Result};
