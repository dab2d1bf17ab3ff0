//! Structured log events for each escalation transition.
//!
//! Each function emits a `tracing` event with structured fields.

/// A link with no record was found guilty.
pub fn link_indicted(link_id: &str, summary: &str) {
    tracing::info!(
        event = "link_indicted",
        link_id = %link_id,
        offenses = %summary,
        "link indicted, probation day 1"
    );
}

/// A link on probation is still guilty.
pub fn link_under_surveillance(link_id: &str, day: u32, strikes: u32, summary: &str) {
    tracing::info!(
        event = "link_under_surveillance",
        link_id = %link_id,
        day = day,
        strikes = strikes,
        offenses = %summary,
        "link still offending"
    );
}

/// A link on probation came back clean.
pub fn link_cleared(link_id: &str) {
    tracing::info!(event = "link_cleared", link_id = %link_id, "link cleared of all charges");
}

/// A remediation batch was produced and the case closed.
pub fn remediation_executed(link_id: &str, days: u32, offense_count: usize, total_savings: f64) {
    tracing::warn!(
        event = "remediation_executed",
        link_id = %link_id,
        days = days,
        offense_count = offense_count,
        total_savings = total_savings,
        "remediation batch executed"
    );
}

/// The vendor adapter produced no command for an offense.
pub fn format_gap(link_id: &str, vendor: &str, offense: &str) {
    tracing::warn!(
        event = "format_gap",
        link_id = %link_id,
        vendor = %vendor,
        offense = %offense,
        "adapter produced no command"
    );
}

/// An unreadable probation row was overwritten by a fresh indictment.
pub fn corrupt_record_replaced(link_id: &str) {
    tracing::warn!(
        event = "corrupt_record_replaced",
        link_id = %link_id,
        "unreadable probation record replaced"
    );
}

/// The raw input matched no registered vendor.
pub fn unknown_vendor(signature_hint: &str) {
    tracing::warn!(
        event = "unknown_vendor",
        signature_hint = %signature_hint,
        "unrecognized telemetry signature"
    );
}
