//! v001: probation_list, financial_ledger.

use rusqlite::Connection;

use linkmind_core::errors::LinkMindResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LinkMindResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS probation_list (
            link_id          TEXT PRIMARY KEY,
            offense_summary  TEXT NOT NULL,
            start_date       TEXT NOT NULL,
            last_seen        TEXT NOT NULL,
            strike_count     INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS financial_ledger (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            date             TEXT NOT NULL,
            link_id          TEXT NOT NULL,
            action_taken     TEXT NOT NULL,
            recovered_value  REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_ledger_link ON financial_ledger(link_id);
        CREATE INDEX IF NOT EXISTS idx_ledger_date ON financial_ledger(date);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
