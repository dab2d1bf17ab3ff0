/// Field extraction failures inside a vendor adapter.
///
/// These never reach the audit pipeline: adapters fold them into the
/// field's default value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("field {field} not present in telemetry")]
    Missing { field: &'static str },

    #[error("field {field} has unparseable value {raw:?}")]
    Unparseable { field: &'static str, raw: String },

    #[error("pattern for field {field} failed to compile")]
    BadPattern { field: &'static str },
}
