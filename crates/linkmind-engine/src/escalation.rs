//! Probation escalation: record state × verdict → transition.
//!
//! | record | verdict  | transition                         |
//! |--------|----------|------------------------------------|
//! | none   | innocent | nothing                            |
//! | some   | innocent | release (delete)                   |
//! | none   | guilty   | indict (insert, strike 1)          |
//! | some   | guilty   | surveil while age < probation days |
//! | some   | guilty   | remediate once age ≥ probation days|
//!
//! The whole read → decide → write sequence for one link runs under that
//! link's lock.

use std::sync::Arc;

use chrono::NaiveDate;

use linkmind_core::config::PolicyConfig;
use linkmind_core::errors::LinkMindResult;
use linkmind_core::models::{LinkSnapshot, ProbationRecord, Verdict};
use linkmind_core::traits::{ICaseStore, IVendorAdapter};
use linkmind_observability::events;

use crate::locks::LinkLocks;
use crate::outcome::AuditOutcome;
use crate::remediation::RemediationOrchestrator;

/// What the state machine will do, before any storage write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Clean,
    Release,
    Indict,
    Surveil { age: u32 },
    Remediate { age: u32 },
}

/// Pure transition table.
pub fn decide(
    record: Option<&ProbationRecord>,
    guilty: bool,
    today: NaiveDate,
    probation_days: u32,
) -> Transition {
    match (record, guilty) {
        (None, false) => Transition::Clean,
        (Some(_), false) => Transition::Release,
        (None, true) => Transition::Indict,
        (Some(record), true) => {
            let age = record.age_days(today);
            if age >= probation_days {
                Transition::Remediate { age }
            } else {
                Transition::Surveil { age }
            }
        }
    }
}

/// Drives probation records through the transition table.
pub struct EscalationStateMachine {
    store: Arc<dyn ICaseStore>,
    probation_days: u32,
    locks: LinkLocks,
    orchestrator: RemediationOrchestrator,
}

impl EscalationStateMachine {
    pub fn new(store: Arc<dyn ICaseStore>, policy: &PolicyConfig) -> Self {
        Self {
            orchestrator: RemediationOrchestrator::new(Arc::clone(&store)),
            store,
            probation_days: policy.probation_days,
            locks: LinkLocks::new(),
        }
    }

    pub fn probation_days(&self) -> u32 {
        self.probation_days
    }

    /// Apply `verdict` to the link's probation state as of `today`.
    pub fn escalate(
        &self,
        snapshot: &LinkSnapshot,
        verdict: Verdict,
        adapter: &dyn IVendorAdapter,
        today: NaiveDate,
    ) -> LinkMindResult<AuditOutcome> {
        self.locks.with_lock(&snapshot.id, || {
            let record = self.store.get(&snapshot.id)?;
            self.apply(record, snapshot, verdict, adapter, today)
        })
    }

    fn apply(
        &self,
        record: Option<ProbationRecord>,
        snapshot: &LinkSnapshot,
        verdict: Verdict,
        adapter: &dyn IVendorAdapter,
        today: NaiveDate,
    ) -> LinkMindResult<AuditOutcome> {
        let link_id = snapshot.id.clone();

        match decide(record.as_ref(), verdict.is_guilty(), today, self.probation_days) {
            Transition::Clean => Ok(AuditOutcome::Clean { link_id }),
            Transition::Release => {
                self.store.delete(&link_id)?;
                events::link_cleared(&link_id);
                Ok(AuditOutcome::Cleared { link_id })
            }
            Transition::Indict => self.indict(snapshot, verdict, adapter, today),
            Transition::Surveil { age } => {
                if !self.store.update(&link_id, today, 1)? {
                    // Row vanished between read and write.
                    return self.indict(snapshot, verdict, adapter, today);
                }
                let strike_count = record
                    .as_ref()
                    .map_or(1, |r| r.strike_count.saturating_add(1));
                let summary = verdict.summary();
                events::link_under_surveillance(&link_id, age, strike_count, &summary);
                Ok(AuditOutcome::Surveillance {
                    link_id,
                    day: age,
                    strike_count,
                    summary,
                    verdict,
                })
            }
            Transition::Remediate { age } => {
                let batch = self
                    .orchestrator
                    .remediate(snapshot, &verdict, adapter, age, today)?;
                Ok(AuditOutcome::RemediationExecuted(batch))
            }
        }
    }

    fn indict(
        &self,
        snapshot: &LinkSnapshot,
        verdict: Verdict,
        adapter: &dyn IVendorAdapter,
        today: NaiveDate,
    ) -> LinkMindResult<AuditOutcome> {
        let summary = verdict.summary();
        let fresh = ProbationRecord::indict(&snapshot.id, &summary, today);

        if !self.store.insert_if_absent(&fresh)? {
            // Something holds the key. A readable row means another writer got
            // there first; an unreadable one is overwritten.
            match self.store.get(&snapshot.id)? {
                Some(existing) => {
                    return self.apply(Some(existing), snapshot, verdict, adapter, today);
                }
                None => {
                    self.store.replace(&fresh)?;
                    events::corrupt_record_replaced(&snapshot.id);
                }
            }
        }

        events::link_indicted(&snapshot.id, &summary);
        Ok(AuditOutcome::Indicted {
            link_id: snapshot.id.clone(),
            day: 1,
            summary,
            verdict,
        })
    }
}
