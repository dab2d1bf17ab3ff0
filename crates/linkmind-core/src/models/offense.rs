use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::LEDGER_ACTION_PREFIX;

/// Policy violation categories, in rule-declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OffenseKind {
    LicenseHoarding,
    SpectrumWaste,
    ZombiePort,
}

impl OffenseKind {
    /// All kinds in evaluation order.
    pub const ALL: [OffenseKind; 3] = [
        OffenseKind::LicenseHoarding,
        OffenseKind::SpectrumWaste,
        OffenseKind::ZombiePort,
    ];

    /// Compact code persisted in the probation summary.
    pub fn code(self) -> &'static str {
        match self {
            Self::LicenseHoarding => "LICENSE",
            Self::SpectrumWaste => "BW",
            Self::ZombiePort => "ZOMBIE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }

    /// Ledger action label, e.g. `RICO_LICENSE`.
    pub fn ledger_action(self) -> String {
        format!("{LEDGER_ACTION_PREFIX}{}", self.code())
    }
}

impl fmt::Display for OffenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One detected policy violation. Lives only inside a [`crate::Verdict`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offense {
    pub kind: OffenseKind,
    /// Unit depends on kind: Mbps, MHz, or ports.
    pub wasted_quantity: f64,
    pub estimated_savings: f64,
    pub description: String,
}
