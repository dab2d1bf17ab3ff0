//! Offense evaluator: a pure mapping from snapshot to verdict.
//!
//! Every rule runs on every snapshot. A link can be guilty of any
//! combination of offenses, and the verdict lists them in rule order.

pub mod rules;

use linkmind_core::config::PolicyConfig;
use linkmind_core::models::{LinkSnapshot, Verdict};

/// Evaluate `snapshot` against `policy`.
pub fn evaluate(snapshot: &LinkSnapshot, policy: &PolicyConfig) -> Verdict {
    let offenses = [
        rules::license_hoarding(snapshot, &policy.costs),
        rules::spectrum_waste(snapshot, &policy.costs),
        rules::zombie_port(snapshot, &policy.costs),
    ]
    .into_iter()
    .flatten()
    .collect();
    Verdict::from_offenses(offenses)
}

/// Evaluator bound to one policy.
#[derive(Debug, Clone, Default)]
pub struct OffenseEvaluator {
    policy: PolicyConfig,
}

impl OffenseEvaluator {
    pub fn new(policy: PolicyConfig) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    pub fn evaluate(&self, snapshot: &LinkSnapshot) -> Verdict {
        evaluate(snapshot, &self.policy)
    }
}
