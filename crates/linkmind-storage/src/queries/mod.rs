//! Raw SQL operations, one module per table.

pub mod ledger_ops;
pub mod probation_ops;
