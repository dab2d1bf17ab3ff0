//! LinkAuditor: the single entry point for auditing one telemetry dump.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use linkmind_adapters::VendorRegistry;
use linkmind_core::config::PolicyConfig;
use linkmind_core::errors::{LinkMindError, LinkMindResult};
use linkmind_core::models::{LinkSnapshot, Verdict};
use linkmind_core::traits::ICaseStore;
use linkmind_observability::events;

use crate::escalation::EscalationStateMachine;
use crate::evaluator::OffenseEvaluator;
use crate::outcome::AuditOutcome;

/// Detect → parse → evaluate → escalate.
pub struct LinkAuditor {
    registry: VendorRegistry,
    evaluator: OffenseEvaluator,
    escalation: EscalationStateMachine,
}

impl LinkAuditor {
    pub fn new(registry: VendorRegistry, store: Arc<dyn ICaseStore>, policy: PolicyConfig) -> Self {
        Self {
            escalation: EscalationStateMachine::new(store, &policy),
            evaluator: OffenseEvaluator::new(policy),
            registry,
        }
    }

    /// Auditor with every built-in vendor adapter registered.
    pub fn with_default_vendors(store: Arc<dyn ICaseStore>, policy: PolicyConfig) -> Self {
        Self::new(VendorRegistry::with_defaults(), store, policy)
    }

    pub fn policy(&self) -> &PolicyConfig {
        self.evaluator.policy()
    }

    pub fn registry(&self) -> &VendorRegistry {
        &self.registry
    }

    /// Audit `raw_text` as of today's UTC date.
    pub fn audit_link(&self, raw_text: &str) -> LinkMindResult<AuditOutcome> {
        self.audit_link_on(raw_text, Utc::now().date_naive())
    }

    /// Audit `raw_text` as of `today`.
    pub fn audit_link_on(&self, raw_text: &str, today: NaiveDate) -> LinkMindResult<AuditOutcome> {
        let span = tracing::info_span!("audit_link", link_id = tracing::field::Empty);
        let _entered = span.enter();

        let adapter = self.registry.detect(raw_text).inspect_err(report_unknown)?;
        let snapshot = LinkSnapshot::from_raw(
            adapter.vendor(),
            adapter.parse(raw_text),
            self.policy().safety_margin,
        );
        span.record("link_id", snapshot.id.as_str());

        let verdict = self.evaluator.evaluate(&snapshot);
        tracing::debug!(
            offenses = verdict.offenses().len(),
            total_savings = verdict.total_savings(),
            "verdict reached"
        );

        self.escalation
            .escalate(&snapshot, verdict, adapter.as_ref(), today)
    }

    /// Parse and judge without touching probation state.
    pub fn inspect(&self, raw_text: &str) -> LinkMindResult<(LinkSnapshot, Verdict)> {
        let adapter = self.registry.detect(raw_text).inspect_err(report_unknown)?;
        let snapshot = LinkSnapshot::from_raw(
            adapter.vendor(),
            adapter.parse(raw_text),
            self.policy().safety_margin,
        );
        let verdict = self.evaluator.evaluate(&snapshot);
        Ok((snapshot, verdict))
    }
}

fn report_unknown(err: &LinkMindError) {
    if let LinkMindError::UnknownVendor { signature_hint } = err {
        events::unknown_vendor(signature_hint);
    }
}
