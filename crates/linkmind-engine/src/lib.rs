//! # linkmind-engine
//!
//! The judgment-and-escalation engine.
//!
//! raw text → [`VendorRegistry`] → snapshot → [`OffenseEvaluator`] → verdict
//! → [`EscalationStateMachine`] → (maybe) [`RemediationOrchestrator`].
//! [`LinkAuditor`] wires the stages into one audit call.
//!
//! [`VendorRegistry`]: linkmind_adapters::VendorRegistry

pub mod auditor;
pub mod escalation;
pub mod evaluator;
pub mod locks;
pub mod outcome;
pub mod remediation;

pub use auditor::LinkAuditor;
pub use escalation::{EscalationStateMachine, Transition};
pub use evaluator::OffenseEvaluator;
pub use locks::LinkLocks;
pub use outcome::AuditOutcome;
pub use remediation::{BatchResult, RemediationOrchestrator, RemediationStep};
