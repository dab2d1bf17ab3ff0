use serde::{Deserialize, Serialize};

use super::defaults;

/// Audit policy handed to the evaluator and orchestrator at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Whole days a link stays on probation before remediation fires.
    pub probation_days: u32,
    /// Multiplier applied to measured throughput to size the required license.
    pub safety_margin: f64,
    /// Unit costs used to price each offense.
    pub costs: CostConfig,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            probation_days: defaults::DEFAULT_PROBATION_DAYS,
            safety_margin: defaults::DEFAULT_SAFETY_MARGIN,
            costs: CostConfig::default(),
        }
    }
}

/// Currency value of each reclaimable resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    /// Per Mbps of licensed capacity.
    pub license_mbps: f64,
    /// Per MHz of channel bandwidth.
    pub bw_mhz: f64,
    /// Flat estimate for shutting down one zombie port.
    pub zombie_power_savings: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            license_mbps: defaults::DEFAULT_COST_LICENSE_MBPS,
            bw_mhz: defaults::DEFAULT_COST_BW_MHZ,
            zombie_power_savings: defaults::DEFAULT_ZOMBIE_POWER_SAVINGS,
        }
    }
}
