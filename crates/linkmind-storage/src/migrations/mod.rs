//! Schema migrations, applied in order and recorded in `schema_version`.

mod v001_audit_tables;

use rusqlite::{params, Connection};

use linkmind_core::errors::{LinkMindError, LinkMindResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> LinkMindResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_audit_tables::migrate)];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 1;

/// Bring the schema up to [`LATEST_VERSION`].
pub fn run_migrations(conn: &Connection) -> LinkMindResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for &(version, migrate) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        migrate(conn).map_err(|e| {
            LinkMindError::Storage(StorageError::MigrationFailed {
                version,
                reason: e.to_string(),
            })
        })?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            params![version],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
        tracing::info!(version, "applied schema migration");
    }
    Ok(())
}

/// Highest applied migration, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> LinkMindResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
