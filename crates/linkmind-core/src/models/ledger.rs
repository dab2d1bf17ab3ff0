use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Append-only record of value recovered by one remediation action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub link_id: String,
    /// `RICO_<CODE>`.
    pub action_taken: String,
    pub recovered_value: f64,
}
