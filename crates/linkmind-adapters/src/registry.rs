//! Vendor registry: maps a telemetry signature to the adapter that reads it.

use std::sync::Arc;

use linkmind_core::errors::{LinkMindError, LinkMindResult};
use linkmind_core::models::Vendor;
use linkmind_core::traits::IVendorAdapter;

use crate::huawei::HuaweiRtnAdapter;

/// Longest prefix of the raw text quoted in an unknown-vendor error.
const SIGNATURE_HINT_CHARS: usize = 48;

/// Ordered set of vendor adapters. Detection returns the first match.
#[derive(Clone, Default)]
pub struct VendorRegistry {
    adapters: Vec<Arc<dyn IVendorAdapter>>,
}

impl VendorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in adapter.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HuaweiRtnAdapter::new()));
        registry
    }

    /// Add an adapter. A later adapter for an already registered vendor
    /// replaces the earlier one in place.
    pub fn register(&mut self, adapter: Arc<dyn IVendorAdapter>) {
        let vendor = adapter.vendor();
        match self.adapters.iter().position(|a| a.vendor() == vendor) {
            Some(idx) => self.adapters[idx] = adapter,
            None => self.adapters.push(adapter),
        }
    }

    pub fn get(&self, vendor: Vendor) -> Option<Arc<dyn IVendorAdapter>> {
        self.adapters.iter().find(|a| a.vendor() == vendor).cloned()
    }

    pub fn vendors(&self) -> Vec<Vendor> {
        self.adapters.iter().map(|a| a.vendor()).collect()
    }

    /// Pick the adapter whose signature appears in `raw_text`.
    pub fn detect(&self, raw_text: &str) -> LinkMindResult<Arc<dyn IVendorAdapter>> {
        self.adapters
            .iter()
            .find(|a| a.matches(raw_text))
            .cloned()
            .ok_or_else(|| LinkMindError::UnknownVendor {
                signature_hint: signature_hint(raw_text),
            })
    }
}

fn signature_hint(raw_text: &str) -> String {
    let first_line = raw_text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("<empty>");
    first_line.chars().take(SIGNATURE_HINT_CHARS).collect()
}
