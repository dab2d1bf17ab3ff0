//! Individual policy rules. Each returns at most one offense.
//!
//! All thresholds are strict inequalities.

use linkmind_core::config::CostConfig;
use linkmind_core::constants::{
    LICENSE_HOARDING_FLOOR_MBPS, LICENSE_HOARDING_RATIO, SPECTRUM_RECLAIM_MHZ,
    SPECTRUM_WASTE_THROUGHPUT_CEILING_MBPS, SPECTRUM_WASTE_TIER_MHZ,
    ZOMBIE_THROUGHPUT_CEILING_MBPS, ZOMBIE_WASTED_PORTS,
};
use linkmind_core::models::{AdminStatus, LinkSnapshot, Offense, OffenseKind};

/// Reserved license well beyond what the measured traffic needs.
pub fn license_hoarding(snapshot: &LinkSnapshot, costs: &CostConfig) -> Option<Offense> {
    let reserved = f64::from(snapshot.license_reserved_mbps);
    let required = f64::from(snapshot.license_required_mbps);

    if !(reserved > required * LICENSE_HOARDING_RATIO
        && snapshot.license_reserved_mbps > LICENSE_HOARDING_FLOOR_MBPS)
    {
        return None;
    }

    let wasted = reserved - required;
    Some(Offense {
        kind: OffenseKind::LicenseHoarding,
        wasted_quantity: wasted,
        estimated_savings: wasted * costs.license_mbps,
        description: format!(
            "Hoarding {wasted} Mbps (reserved {}, required {})",
            snapshot.license_reserved_mbps, snapshot.license_required_mbps
        ),
    })
}

/// A 56 MHz channel carrying traffic a 28 MHz channel would handle.
///
/// Only the 56 MHz tier is inspected.
pub fn spectrum_waste(snapshot: &LinkSnapshot, costs: &CostConfig) -> Option<Offense> {
    if !(snapshot.bandwidth_mhz == SPECTRUM_WASTE_TIER_MHZ
        && snapshot.throughput_mbps < SPECTRUM_WASTE_THROUGHPUT_CEILING_MBPS)
    {
        return None;
    }

    let wasted = f64::from(SPECTRUM_RECLAIM_MHZ);
    Some(Offense {
        kind: OffenseKind::SpectrumWaste,
        wasted_quantity: wasted,
        estimated_savings: wasted * costs.bw_mhz,
        description: format!(
            "Wasting {SPECTRUM_RECLAIM_MHZ} MHz of spectrum at {} Mbps",
            snapshot.throughput_mbps
        ),
    })
}

/// An administratively UP port carrying next to nothing.
pub fn zombie_port(snapshot: &LinkSnapshot, costs: &CostConfig) -> Option<Offense> {
    if !(snapshot.admin_status == AdminStatus::Up
        && snapshot.throughput_mbps < ZOMBIE_THROUGHPUT_CEILING_MBPS)
    {
        return None;
    }

    Some(Offense {
        kind: OffenseKind::ZombiePort,
        wasted_quantity: ZOMBIE_WASTED_PORTS,
        estimated_savings: costs.zombie_power_savings,
        description: format!("Zombie port active at {} Mbps", snapshot.throughput_mbps),
    })
}
