//! Domain models shared by the adapters, engine, and storage layers.

mod ledger;
mod offense;
mod probation;
mod snapshot;
mod verdict;

pub use ledger::LedgerEntry;
pub use offense::{Offense, OffenseKind};
pub use probation::ProbationRecord;
pub use snapshot::{AdminStatus, LinkSnapshot, RawFields, Vendor};
pub use verdict::{Verdict, VerdictStatus};
