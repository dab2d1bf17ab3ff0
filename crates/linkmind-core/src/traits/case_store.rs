use crate::errors::LinkMindResult;
use crate::models::{LedgerEntry, ProbationRecord};

use super::{IFinancialLedger, IProbationStore};

/// Combined store the audit engine runs against.
pub trait ICaseStore: IProbationStore + IFinancialLedger {
    /// Book every ledger entry and release the link from probation as one
    /// unit. Either all entries are booked and the record is gone, or
    /// nothing changed and the case stays open for the next invocation.
    fn close_case(&self, link_id: &str, entries: &[LedgerEntry]) -> LinkMindResult<()>;

    /// Overwrite whatever row holds `record.link_id`.
    ///
    /// The provided body is two calls. A failure between them leaves no
    /// record, which the next audit treats as a first offense.
    fn replace(&self, record: &ProbationRecord) -> LinkMindResult<()> {
        self.delete(&record.link_id)?;
        self.insert_if_absent(record)?;
        Ok(())
    }
}
