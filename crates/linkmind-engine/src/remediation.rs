//! Remediation orchestrator: one batch per expired probation.
//!
//! The batch is assembled in memory first. Adapter calls are pure, so the
//! only side effect is the final `close_case`, which books every ledger
//! entry and releases the link together.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use linkmind_core::constants::SPECTRUM_RECLAIM_MHZ;
use linkmind_core::errors::LinkMindResult;
use linkmind_core::models::{LedgerEntry, LinkSnapshot, OffenseKind, Verdict};
use linkmind_core::traits::{ICaseStore, IVendorAdapter};
use linkmind_observability::events;

/// One corrective action inside a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemediationStep {
    pub kind: OffenseKind,
    pub target_value: u32,
    /// `None` when the adapter had no command for this offense.
    pub command: Option<String>,
    pub savings: f64,
}

impl RemediationStep {
    fn comment(&self) -> String {
        let label = match self.kind {
            OffenseKind::LicenseHoarding => "Fix License",
            OffenseKind::SpectrumWaste => "Optimize BW",
            OffenseKind::ZombiePort => "Kill Zombie",
        };
        format!("// {label} (Save ${:.2})", self.savings)
    }

    fn command_line(&self) -> String {
        match &self.command {
            Some(cmd) => cmd.clone(),
            None => format!("// NO-OP: no {} command for this vendor", self.kind.code()),
        }
    }
}

/// Everything one remediation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub link_id: String,
    pub days_on_probation: u32,
    pub steps: Vec<RemediationStep>,
    pub ledger_entries: Vec<LedgerEntry>,
    pub total_savings: f64,
}

impl BatchResult {
    pub fn offense_count(&self) -> usize {
        self.steps.len()
    }

    /// Steps that produced a real vendor command.
    pub fn command_count(&self) -> usize {
        self.steps.iter().filter(|s| s.command.is_some()).count()
    }

    /// The batch script: a header, then a comment and a command per step.
    pub fn script(&self) -> String {
        let mut lines = Vec::with_capacity(1 + self.steps.len() * 2);
        lines.push(format!(
            "// BATCH EXECUTION: {} (after {} days on probation)",
            self.link_id, self.days_on_probation
        ));
        for step in &self.steps {
            lines.push(step.comment());
            lines.push(step.command_line());
        }
        lines.join("\n")
    }
}

/// Value each offense kind is driven to.
pub fn target_value(kind: OffenseKind, snapshot: &LinkSnapshot) -> u32 {
    match kind {
        OffenseKind::LicenseHoarding => snapshot.license_required_mbps,
        OffenseKind::SpectrumWaste => SPECTRUM_RECLAIM_MHZ,
        OffenseKind::ZombiePort => 0,
    }
}

/// Builds remediation batches and closes cases against the store.
#[derive(Clone)]
pub struct RemediationOrchestrator {
    store: Arc<dyn ICaseStore>,
}

impl RemediationOrchestrator {
    pub fn new(store: Arc<dyn ICaseStore>) -> Self {
        Self { store }
    }

    /// Assemble the batch without touching storage.
    pub fn build_batch(
        snapshot: &LinkSnapshot,
        verdict: &Verdict,
        adapter: &dyn IVendorAdapter,
        days: u32,
        today: NaiveDate,
    ) -> BatchResult {
        let mut steps = Vec::with_capacity(verdict.offenses().len());
        let mut ledger_entries = Vec::with_capacity(verdict.offenses().len());

        for offense in verdict.offenses() {
            let target = target_value(offense.kind, snapshot);
            let raw = adapter.generate_fix(&snapshot.id, target, offense.kind);
            let command = if raw.trim().is_empty() {
                events::format_gap(&snapshot.id, adapter.vendor().as_str(), offense.kind.code());
                None
            } else {
                Some(raw)
            };

            steps.push(RemediationStep {
                kind: offense.kind,
                target_value: target,
                command,
                savings: offense.estimated_savings,
            });
            ledger_entries.push(LedgerEntry {
                date: today,
                link_id: snapshot.id.clone(),
                action_taken: offense.kind.ledger_action(),
                recovered_value: offense.estimated_savings,
            });
        }

        BatchResult {
            link_id: snapshot.id.clone(),
            days_on_probation: days,
            steps,
            ledger_entries,
            total_savings: verdict.total_savings(),
        }
    }

    /// Build the batch and close the case. On a storage error nothing is
    /// committed and the probation record stays for the next audit.
    pub fn remediate(
        &self,
        snapshot: &LinkSnapshot,
        verdict: &Verdict,
        adapter: &dyn IVendorAdapter,
        days: u32,
        today: NaiveDate,
    ) -> LinkMindResult<BatchResult> {
        let batch = Self::build_batch(snapshot, verdict, adapter, days, today);
        self.store.close_case(&batch.link_id, &batch.ledger_entries)?;

        events::remediation_executed(
            &batch.link_id,
            days,
            batch.offense_count(),
            batch.total_savings,
        );
        Ok(batch)
    }
}
