use super::{ConfigError, StorageError};

/// Top-level error surfaced by the audit pipeline.
///
/// Only two conditions are user-visible: an unrecognised vendor signature and
/// a storage failure. Everything else resolves into an audit outcome.
#[derive(Debug, thiserror::Error)]
pub enum LinkMindError {
    #[error("unknown vendor signature: {signature_hint}")]
    UnknownVendor { signature_hint: String },

    #[error("storage unavailable: {0}")]
    Storage(#[from] StorageError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl LinkMindError {
    /// Storage failures leave probation untouched and can be retried on the
    /// next invocation. Nothing else is worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

pub type LinkMindResult<T> = Result<T, LinkMindError>;
