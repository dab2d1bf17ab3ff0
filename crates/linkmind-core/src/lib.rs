//! # linkmind-core
//!
//! Foundation crate for the LinkMind link auditor.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{LinkMindConfig, PolicyConfig};
pub use errors::{LinkMindError, LinkMindResult};
pub use models::{
    AdminStatus, LedgerEntry, LinkSnapshot, Offense, OffenseKind, ProbationRecord, RawFields,
    Vendor, Verdict, VerdictStatus,
};
