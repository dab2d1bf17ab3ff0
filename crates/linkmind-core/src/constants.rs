/// LinkMind system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- License hoarding ---

/// Reserved capacity must exceed required capacity by this factor.
pub const LICENSE_HOARDING_RATIO: f64 = 1.5;

/// Reserved capacity at or below this floor is never hoarding (Mbps).
pub const LICENSE_HOARDING_FLOOR_MBPS: u32 = 50;

// --- Spectrum waste ---

/// The only bandwidth tier the spectrum rule inspects (MHz).
pub const SPECTRUM_WASTE_TIER_MHZ: u32 = 56;

/// Reclaimable spectrum on the 56 MHz tier, and the remediation target (MHz).
pub const SPECTRUM_RECLAIM_MHZ: u32 = 28;

/// Links carrying at least this much traffic keep their 56 MHz channel (Mbps).
pub const SPECTRUM_WASTE_THROUGHPUT_CEILING_MBPS: f64 = 50.0;

// --- Zombie port ---

/// An UP port below this throughput is a zombie (Mbps).
pub const ZOMBIE_THROUGHPUT_CEILING_MBPS: f64 = 1.0;

/// Sentinel wasted quantity for a zombie port (one port).
pub const ZOMBIE_WASTED_PORTS: f64 = 1.0;

// --- Remediation ---

/// Prefix of the ledger action label, followed by the offense code.
pub const LEDGER_ACTION_PREFIX: &str = "RICO_";

/// Identifier used when a snapshot carries no link id.
pub const UNKNOWN_LINK_ID: &str = "UNKNOWN";
