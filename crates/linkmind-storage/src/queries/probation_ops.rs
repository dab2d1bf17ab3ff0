//! Raw SQL operations for the probation_list table.

use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, Connection, OptionalExtension};

use linkmind_core::errors::{LinkMindError, LinkMindResult, StorageError};
use linkmind_core::models::ProbationRecord;

use crate::to_storage_err;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw probation row as stored, before validation.
///
/// Columns are read as dynamic values so a row written with the wrong
/// storage class surfaces as a corrupt record, not a driver error.
#[derive(Debug, Clone)]
pub struct RawProbationRow {
    pub link_id: Value,
    pub offense_summary: Value,
    pub start_date: Value,
    pub last_seen: Value,
    pub strike_count: Value,
}

impl RawProbationRow {
    /// Validate the row into a record.
    pub fn into_record(self) -> LinkMindResult<ProbationRecord> {
        let key = describe(&self.link_id);
        let corrupt = |details: String| {
            LinkMindError::Storage(StorageError::CorruptRecord {
                link_id: key.clone(),
                details,
            })
        };

        let link_id = text_column("link_id", self.link_id).map_err(&corrupt)?;
        let offense_summary =
            text_column("offense_summary", self.offense_summary).map_err(&corrupt)?;
        let start_date = date_column("start_date", self.start_date).map_err(&corrupt)?;
        let last_seen_date = date_column("last_seen", self.last_seen).map_err(&corrupt)?;
        let strike_count = match self.strike_count {
            Value::Integer(n) => u32::try_from(n)
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| corrupt(format!("strike_count {n} below 1")))?,
            other => {
                return Err(corrupt(format!(
                    "strike_count stored as {}",
                    other.data_type()
                )))
            }
        };

        Ok(ProbationRecord {
            link_id,
            offense_summary,
            start_date,
            last_seen_date,
            strike_count,
        })
    }
}

fn text_column(column: &str, value: Value) -> Result<String, String> {
    match value {
        Value::Text(s) => Ok(s),
        other => Err(format!("{column} stored as {}", other.data_type())),
    }
}

fn date_column(column: &str, value: Value) -> Result<NaiveDate, String> {
    let raw = text_column(column, value)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| format!("{column} {raw:?}: {e}"))
}

/// Printable key for error reports, whatever its storage class.
fn describe(value: &Value) -> String {
    match value {
        Value::Text(s) => s.clone(),
        Value::Integer(n) => n.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Blob(_) => "<blob>".to_string(),
        Value::Null => "<null>".to_string(),
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Read a probation record. A row that exists but fails validation is
/// reported as [`StorageError::CorruptRecord`].
pub fn get_probation(conn: &Connection, link_id: &str) -> LinkMindResult<Option<ProbationRecord>> {
    let row = conn
        .query_row(
            "SELECT link_id, offense_summary, start_date, last_seen, strike_count
             FROM probation_list WHERE link_id = ?1",
            params![link_id],
            map_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(RawProbationRow::into_record).transpose()
}

/// Insert a record unless the key is taken. Returns whether a row was inserted.
pub fn insert_if_absent(conn: &Connection, record: &ProbationRecord) -> LinkMindResult<bool> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO probation_list
                (link_id, offense_summary, start_date, last_seen, strike_count)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.link_id,
                record.offense_summary,
                format_date(record.start_date),
                format_date(record.last_seen_date),
                record.strike_count,
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(inserted > 0)
}

/// Increment the strike count in SQL so concurrent writers never lose a strike.
pub fn record_strike(
    conn: &Connection,
    link_id: &str,
    last_seen: NaiveDate,
    strike_delta: u32,
) -> LinkMindResult<bool> {
    let updated = conn
        .execute(
            "UPDATE probation_list
             SET last_seen = ?1, strike_count = strike_count + ?2
             WHERE link_id = ?3",
            params![format_date(last_seen), strike_delta, link_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(updated > 0)
}

/// Delete a record. Returns whether a row existed.
pub fn delete_probation(conn: &Connection, link_id: &str) -> LinkMindResult<bool> {
    let deleted = conn
        .execute(
            "DELETE FROM probation_list WHERE link_id = ?1",
            params![link_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(deleted > 0)
}

/// Every raw row, ordered by start date then link id.
pub fn list_probation_rows(conn: &Connection) -> LinkMindResult<Vec<RawProbationRow>> {
    let mut stmt = conn
        .prepare(
            "SELECT link_id, offense_summary, start_date, last_seen, strike_count
             FROM probation_list
             ORDER BY start_date ASC, link_id ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], map_row)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(out)
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawProbationRow> {
    Ok(RawProbationRow {
        link_id: row.get(0)?,
        offense_summary: row.get(1)?,
        start_date: row.get(2)?,
        last_seen: row.get(3)?,
        strike_count: row.get(4)?,
    })
}
