//! Huawei RTN microwave adapter.
//!
//! Parses `DSP` style display output and formats `MOD` MML commands.

mod commands;
mod patterns;

use linkmind_core::constants::UNKNOWN_LINK_ID;
use linkmind_core::models::{AdminStatus, OffenseKind, RawFields, Vendor};
use linkmind_core::traits::IVendorAdapter;

use crate::extract::{extract, extract_or};

/// Text that only Huawei RTN license displays contain.
pub const HUAWEI_SIGNATURE: &str = "Current License Capacity";

#[derive(Debug, Default, Clone, Copy)]
pub struct HuaweiRtnAdapter;

impl HuaweiRtnAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl IVendorAdapter for HuaweiRtnAdapter {
    fn vendor(&self) -> Vendor {
        Vendor::Huawei
    }

    fn matches(&self, raw_text: &str) -> bool {
        raw_text.contains(HUAWEI_SIGNATURE)
    }

    fn parse(&self, raw_text: &str) -> RawFields {
        let admin_status = extract::<String>("admin_status", &patterns::RE_ADMIN_STATUS, raw_text)
            .map(|word| AdminStatus::from_word(&word))
            .unwrap_or_default();
        // Digit runs long enough to overflow f64 parse as infinity.
        let throughput_mbps: f64 =
            extract_or("throughput_mbps", &patterns::RE_THROUGHPUT, raw_text, 0.0);
        let throughput_mbps = if throughput_mbps.is_finite() {
            throughput_mbps
        } else {
            0.0
        };

        RawFields {
            id: extract_or(
                "id",
                &patterns::RE_LINK_ID,
                raw_text,
                UNKNOWN_LINK_ID.to_string(),
            ),
            license_reserved_mbps: extract_or(
                "license_reserved_mbps",
                &patterns::RE_LICENSE_CAPACITY,
                raw_text,
                0,
            ),
            throughput_mbps,
            bandwidth_mhz: extract_or("bandwidth_mhz", &patterns::RE_BANDWIDTH, raw_text, 0),
            admin_status,
        }
    }

    fn generate_fix(&self, link_id: &str, target_value: u32, kind: OffenseKind) -> String {
        commands::format_fix(link_id, target_value, kind)
    }
}
