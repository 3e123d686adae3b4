use thiserror::Error;

/// Errors raised while building an engine. Runtime operations never fail;
/// a missing surface turns them into no-ops instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    #[error("invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, FxError>;

impl FxError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        FxError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
