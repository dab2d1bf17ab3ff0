use crate::errors::LinkMindResult;
use crate::models::LedgerEntry;

/// Append-only log of recovered value.
pub trait IFinancialLedger: Send + Sync {
    fn append(&self, entry: &LedgerEntry) -> LinkMindResult<()>;
}
