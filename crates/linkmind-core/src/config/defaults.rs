// Single source of truth for all default values.

// --- Policy ---
pub const DEFAULT_PROBATION_DAYS: u32 = 15;
pub const DEFAULT_SAFETY_MARGIN: f64 = 1.2; // 20% capacity headroom

// --- Costs ---
pub const DEFAULT_COST_LICENSE_MBPS: f64 = 10.0;
pub const DEFAULT_COST_BW_MHZ: f64 = 20.0;
pub const DEFAULT_ZOMBIE_POWER_SAVINGS: f64 = 50.0;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "LinkMind_Network.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
