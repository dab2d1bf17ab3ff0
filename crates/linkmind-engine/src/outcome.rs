//! Structured result of one audit and its operator-facing report.

use std::fmt;

use serde::Serialize;

use linkmind_core::models::Verdict;

use crate::remediation::BatchResult;

/// What the escalation step did with one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AuditOutcome {
    /// Innocent with no record on file.
    Clean { link_id: String },
    /// Innocent after probation; the record was deleted.
    Cleared { link_id: String },
    /// First guilty verdict; probation starts.
    Indicted {
        link_id: String,
        day: u32,
        summary: String,
        verdict: Verdict,
    },
    /// Still guilty inside the probation window.
    Surveillance {
        link_id: String,
        day: u32,
        strike_count: u32,
        summary: String,
        verdict: Verdict,
    },
    /// Probation expired; the batch ran and the case closed.
    RemediationExecuted(BatchResult),
}

impl AuditOutcome {
    pub fn link_id(&self) -> &str {
        match self {
            Self::Clean { link_id }
            | Self::Cleared { link_id }
            | Self::Indicted { link_id, .. }
            | Self::Surveillance { link_id, .. } => link_id,
            Self::RemediationExecuted(batch) => &batch.link_id,
        }
    }

    /// Short machine label, matches the serde tag.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clean { .. } => "clean",
            Self::Cleared { .. } => "cleared",
            Self::Indicted { .. } => "indicted",
            Self::Surveillance { .. } => "surveillance",
            Self::RemediationExecuted(_) => "remediation_executed",
        }
    }

    pub fn batch(&self) -> Option<&BatchResult> {
        match self {
            Self::RemediationExecuted(batch) => Some(batch),
            _ => None,
        }
    }
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean { link_id } => write!(f, "{link_id}: Clean."),
            Self::Cleared { link_id } => write!(f, "{link_id}: Cleared of all charges."),
            Self::Indicted {
                link_id,
                day,
                summary,
                ..
            } => write!(f, "{link_id}: Indicted for [{summary}]. Probation Day {day}."),
            Self::Surveillance {
                link_id,
                day,
                strike_count,
                summary,
                ..
            } => write!(
                f,
                "SURVEILLANCE: {link_id} | Day {day} | Strikes: {strike_count} | Offenses: {summary}"
            ),
            Self::RemediationExecuted(batch) => {
                writeln!(f, "REMEDIATION EXECUTED on {}", batch.link_id)?;
                writeln!(f, "   Total Savings: ${}", format_currency(batch.total_savings))?;
                writeln!(f, "   Offenses Remediated: {}", batch.offense_count())?;
                writeln!(f, "BATCH SCRIPT:")?;
                write!(f, "{}", batch.script())
            }
        }
    }
}

/// Two decimals with comma thousands separators: `4610.0` → `4,610.00`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}
