//! # linkmind-storage
//!
//! SQLite persistence for the audit engine: the probation list and the
//! append-only financial ledger.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use linkmind_core::errors::{LinkMindError, StorageError};

/// Wrap a SQLite failure message as a storage error.
pub fn to_storage_err(message: impl Into<String>) -> LinkMindError {
    LinkMindError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
