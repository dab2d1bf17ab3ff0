//! Error taxonomy. One enum per subsystem, aggregated into [`LinkMindError`].

mod config_error;
mod extract_error;
mod linkmind_error;
mod storage_error;

pub use config_error::ConfigError;
pub use extract_error::ExtractError;
pub use linkmind_error::{LinkMindError, LinkMindResult};
pub use storage_error::StorageError;
