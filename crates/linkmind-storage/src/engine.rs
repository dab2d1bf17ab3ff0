//! StorageEngine: the probation list and financial ledger behind one
//! serialized write connection.

use std::path::Path;

use chrono::NaiveDate;

use linkmind_core::config::StorageConfig;
use linkmind_core::errors::{LinkMindError, LinkMindResult, StorageError};
use linkmind_core::models::{LedgerEntry, ProbationRecord};
use linkmind_core::traits::{ICaseStore, IFinancialLedger, IProbationStore};

use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries::{ledger_ops, probation_ops};
use crate::to_storage_err;

/// The main storage engine. Every statement runs on one serialized
/// connection, so each trait call is atomic with respect to the others.
pub struct StorageEngine {
    writer: WriteConnection,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> LinkMindResult<Self> {
        Self::open_with_config(path, &StorageConfig::default())
    }

    /// Open with explicit storage settings. `config.db_path` is ignored in
    /// favour of `path`.
    pub fn open_with_config(path: &Path, config: &StorageConfig) -> LinkMindResult<Self> {
        let writer = WriteConnection::open(path, config.busy_timeout_ms)?;
        let engine = Self { writer };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> LinkMindResult<Self> {
        let engine = Self {
            writer: WriteConnection::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> LinkMindResult<()> {
        self.writer.with_conn(migrations::run_migrations)
    }

    /// Direct access to the connection (maintenance and tests).
    pub fn writer(&self) -> &WriteConnection {
        &self.writer
    }

    /// Every readable probation record. Corrupt rows are skipped.
    pub fn list_probation(&self) -> LinkMindResult<Vec<ProbationRecord>> {
        let rows = self.writer.with_conn(probation_ops::list_probation_rows)?;
        Ok(rows
            .into_iter()
            .filter_map(|row| match row.into_record() {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping corrupt probation row");
                    None
                }
            })
            .collect())
    }

    /// Ledger entries booked against one link, oldest first.
    pub fn ledger_for_link(&self, link_id: &str) -> LinkMindResult<Vec<LedgerEntry>> {
        self.writer
            .with_conn(|conn| ledger_ops::entries_for_link(conn, link_id))
    }

    /// Total value recovered across the whole ledger.
    pub fn total_recovered(&self) -> LinkMindResult<f64> {
        self.writer.with_conn(ledger_ops::total_recovered)
    }

    pub fn ledger_entry_count(&self) -> LinkMindResult<usize> {
        self.writer.with_conn(ledger_ops::entry_count)
    }
}

impl IProbationStore for StorageEngine {
    fn get(&self, link_id: &str) -> LinkMindResult<Option<ProbationRecord>> {
        match self
            .writer
            .with_conn(|conn| probation_ops::get_probation(conn, link_id))
        {
            Err(LinkMindError::Storage(StorageError::CorruptRecord { link_id, details })) => {
                tracing::warn!(link_id = %link_id, details = %details, "corrupt probation record read as absent");
                Ok(None)
            }
            other => other,
        }
    }

    fn insert_if_absent(&self, record: &ProbationRecord) -> LinkMindResult<bool> {
        self.writer
            .with_conn(|conn| probation_ops::insert_if_absent(conn, record))
    }

    fn update(
        &self,
        link_id: &str,
        last_seen_date: NaiveDate,
        strike_delta: u32,
    ) -> LinkMindResult<bool> {
        self.writer.with_conn(|conn| {
            probation_ops::record_strike(conn, link_id, last_seen_date, strike_delta)
        })
    }

    fn delete(&self, link_id: &str) -> LinkMindResult<bool> {
        self.writer
            .with_conn(|conn| probation_ops::delete_probation(conn, link_id))
    }
}

impl IFinancialLedger for StorageEngine {
    fn append(&self, entry: &LedgerEntry) -> LinkMindResult<()> {
        self.writer
            .with_conn(|conn| ledger_ops::insert_entry(conn, entry).map(|_| ()))
    }
}

impl ICaseStore for StorageEngine {
    /// Ledger entries and the probation delete commit together or not at all.
    fn close_case(&self, link_id: &str, entries: &[LedgerEntry]) -> LinkMindResult<()> {
        self.writer.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(e.to_string()))?;
            for entry in entries {
                ledger_ops::insert_entry(&tx, entry)?;
            }
            probation_ops::delete_probation(&tx, link_id)?;
            tx.commit().map_err(|e| to_storage_err(e.to_string()))
        })
    }

    fn replace(&self, record: &ProbationRecord) -> LinkMindResult<()> {
        self.writer.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(e.to_string()))?;
            probation_ops::delete_probation(&tx, &record.link_id)?;
            probation_ops::insert_if_absent(&tx, record)?;
            tx.commit().map_err(|e| to_storage_err(e.to_string()))
        })
    }
}
