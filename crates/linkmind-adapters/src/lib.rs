//! # linkmind-adapters
//!
//! Vendor adapters turn raw telemetry text into [`RawFields`] and format
//! corrective commands. The [`VendorRegistry`] picks an adapter by signature.
//!
//! [`RawFields`]: linkmind_core::RawFields

#[macro_use]
pub mod extract;
pub mod huawei;
pub mod registry;

pub use huawei::HuaweiRtnAdapter;
pub use registry::VendorRegistry;
