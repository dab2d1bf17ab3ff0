//! Configuration for every LinkMind subsystem.

pub mod defaults;
mod linkmind_config;
mod observability_config;
mod policy_config;
mod storage_config;

pub use linkmind_config::LinkMindConfig;
pub use observability_config::ObservabilityConfig;
pub use policy_config::{CostConfig, PolicyConfig};
pub use storage_config::StorageConfig;
