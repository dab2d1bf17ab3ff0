//! Seams between the audit engine and its collaborators.

mod case_store;
mod financial_ledger;
mod probation_store;
mod vendor_adapter;

pub use case_store::ICaseStore;
pub use financial_ledger::IFinancialLedger;
pub use probation_store::IProbationStore;
pub use vendor_adapter::IVendorAdapter;
