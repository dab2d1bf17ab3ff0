use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Durable per-link escalation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbationRecord {
    pub link_id: String,
    /// Offense codes from the indictment, comma-joined.
    pub offense_summary: String,
    /// Set on indictment, never changed afterwards.
    pub start_date: NaiveDate,
    pub last_seen_date: NaiveDate,
    pub strike_count: u32,
}

impl ProbationRecord {
    /// A fresh record for a first offense observed on `today`.
    pub fn indict(link_id: &str, offense_summary: &str, today: NaiveDate) -> Self {
        Self {
            link_id: link_id.to_string(),
            offense_summary: offense_summary.to_string(),
            start_date: today,
            last_seen_date: today,
            strike_count: 1,
        }
    }

    /// Whole days on probation as of `today`. A start date in the future
    /// counts as zero.
    pub fn age_days(&self, today: NaiveDate) -> u32 {
        let days = (today - self.start_date).num_days();
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }
}
