use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_LINK_ID;

/// Vendor tag detected from the telemetry signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Vendor {
    Huawei,
}

impl Vendor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Huawei => "Huawei",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrative state of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminStatus {
    Up,
    Down,
    #[default]
    Unknown,
}

impl AdminStatus {
    /// Parse a vendor status word. Anything other than UP/DOWN is `Unknown`.
    pub fn from_word(word: &str) -> Self {
        match word.trim().to_ascii_uppercase().as_str() {
            "UP" => Self::Up,
            "DOWN" => Self::Down,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields a vendor adapter extracts from raw telemetry.
///
/// Every field has a usable default; an adapter never fails to produce one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFields {
    pub id: String,
    pub license_reserved_mbps: u32,
    pub throughput_mbps: f64,
    pub bandwidth_mhz: u32,
    pub admin_status: AdminStatus,
}

impl Default for RawFields {
    fn default() -> Self {
        Self {
            id: UNKNOWN_LINK_ID.to_string(),
            license_reserved_mbps: 0,
            throughput_mbps: 0.0,
            bandwidth_mhz: 0,
            admin_status: AdminStatus::Unknown,
        }
    }
}

/// A point-in-time observation of one network link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSnapshot {
    pub id: String,
    pub vendor: Vendor,
    pub bandwidth_mhz: u32,
    pub throughput_mbps: f64,
    pub license_reserved_mbps: u32,
    /// `floor(throughput_mbps * safety_margin)`.
    pub license_required_mbps: u32,
    pub admin_status: AdminStatus,
}

impl LinkSnapshot {
    /// Build a snapshot from extracted fields, deriving the required license
    /// capacity from measured throughput and the policy safety margin.
    pub fn from_raw(vendor: Vendor, raw: RawFields, safety_margin: f64) -> Self {
        let throughput = if raw.throughput_mbps.is_finite() && raw.throughput_mbps > 0.0 {
            raw.throughput_mbps
        } else {
            0.0
        };
        Self {
            id: raw.id,
            vendor,
            bandwidth_mhz: raw.bandwidth_mhz,
            throughput_mbps: throughput,
            license_reserved_mbps: raw.license_reserved_mbps,
            license_required_mbps: required_license_mbps(throughput, safety_margin),
            admin_status: raw.admin_status,
        }
    }
}

/// Required capacity rounded down. Saturates instead of wrapping on absurd input.
fn required_license_mbps(throughput_mbps: f64, safety_margin: f64) -> u32 {
    let required = (throughput_mbps * safety_margin).floor();
    if !required.is_finite() || required <= 0.0 {
        0
    } else if required >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        required as u32
    }
}
