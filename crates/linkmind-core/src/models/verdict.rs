use serde::{Deserialize, Serialize};

use super::Offense;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictStatus {
    Guilty,
    Innocent,
}

/// The evaluator's complete judgment for one snapshot.
///
/// Fields are private so `status` and `total_savings` always agree with
/// `offenses`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    status: VerdictStatus,
    offenses: Vec<Offense>,
    total_savings: f64,
}

impl Verdict {
    pub fn from_offenses(offenses: Vec<Offense>) -> Self {
        let status = if offenses.is_empty() {
            VerdictStatus::Innocent
        } else {
            VerdictStatus::Guilty
        };
        let total_savings = offenses.iter().map(|o| o.estimated_savings).sum();
        Self {
            status,
            offenses,
            total_savings,
        }
    }

    pub fn innocent() -> Self {
        Self::from_offenses(Vec::new())
    }

    pub fn status(&self) -> VerdictStatus {
        self.status
    }

    pub fn is_guilty(&self) -> bool {
        self.status == VerdictStatus::Guilty
    }

    pub fn offenses(&self) -> &[Offense] {
        &self.offenses
    }

    pub fn total_savings(&self) -> f64 {
        self.total_savings
    }

    /// Comma-joined offense codes, e.g. `LICENSE,BW,ZOMBIE`.
    pub fn summary(&self) -> String {
        self.offenses
            .iter()
            .map(|o| o.kind.code())
            .collect::<Vec<_>>()
            .join(",")
    }
}
