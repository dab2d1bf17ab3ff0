//! Raw SQL operations for the append-only financial_ledger table.

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use linkmind_core::errors::{LinkMindError, LinkMindResult, StorageError};
use linkmind_core::models::LedgerEntry;

use crate::to_storage_err;

/// Append one entry. Returns the new row id.
pub fn insert_entry(conn: &Connection, entry: &LedgerEntry) -> LinkMindResult<i64> {
    conn.execute(
        "INSERT INTO financial_ledger (date, link_id, action_taken, recovered_value)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            entry.date.format("%Y-%m-%d").to_string(),
            entry.link_id,
            entry.action_taken,
            entry.recovered_value,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

/// All entries for a link in insertion order.
pub fn entries_for_link(conn: &Connection, link_id: &str) -> LinkMindResult<Vec<LedgerEntry>> {
    let mut stmt = conn
        .prepare(
            "SELECT date, link_id, action_taken, recovered_value
             FROM financial_ledger
             WHERE link_id = ?1
             ORDER BY id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![link_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut entries = Vec::new();
    for row in rows {
        let (date, link_id, action_taken, recovered_value) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
            LinkMindError::Storage(StorageError::SqliteError {
                message: format!("ledger date {date:?} for {link_id}: {e}"),
            })
        })?;
        entries.push(LedgerEntry {
            date,
            link_id,
            action_taken,
            recovered_value,
        });
    }
    Ok(entries)
}

/// Sum of every recovered value on the ledger.
pub fn total_recovered(conn: &Connection) -> LinkMindResult<f64> {
    conn.query_row(
        "SELECT COALESCE(SUM(recovered_value), 0.0) FROM financial_ledger",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Number of ledger rows.
pub fn entry_count(conn: &Connection) -> LinkMindResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM financial_ledger", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
