use crate::models::{OffenseKind, RawFields, Vendor};

/// Vendor-specific telemetry parsing and command formatting.
pub trait IVendorAdapter: Send + Sync {
    fn vendor(&self) -> Vendor;

    /// Whether `raw_text` carries this vendor's signature.
    fn matches(&self, raw_text: &str) -> bool;

    /// Extract link fields. Never fails: missing or malformed fields take
    /// their defaults.
    fn parse(&self, raw_text: &str) -> RawFields;

    /// Corrective command for one offense. An empty string means the vendor
    /// has no command for this combination.
    fn generate_fix(&self, link_id: &str, target_value: u32, kind: OffenseKind) -> String;
}
