use chrono::NaiveDate;

use crate::errors::LinkMindResult;
use crate::models::ProbationRecord;

/// Durable table of links under observation, keyed by link id.
pub trait IProbationStore: Send + Sync {
    /// Read the record for `link_id`. Unreadable rows come back as `None`.
    fn get(&self, link_id: &str) -> LinkMindResult<Option<ProbationRecord>>;

    /// Insert unless a row already holds the key. Returns whether it inserted.
    fn insert_if_absent(&self, record: &ProbationRecord) -> LinkMindResult<bool>;

    /// Bump the strike count by `strike_delta` and move `last_seen_date`.
    /// Returns whether a row was updated.
    fn update(
        &self,
        link_id: &str,
        last_seen_date: NaiveDate,
        strike_delta: u32,
    ) -> LinkMindResult<bool>;

    /// Remove the record. Returns whether a row existed.
    fn delete(&self, link_id: &str) -> LinkMindResult<bool>;
}
