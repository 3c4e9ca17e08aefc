use thiserror::Error;

/// Errors raised at the construction boundary.
///
/// Nothing inside a tick returns these: detection and resolution degrade
/// to "no collision" or "stay in place" instead of failing.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid world configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("invalid shape: {reason}")]
    InvalidShape { reason: String },

    #[error("invalid body: {reason}")]
    InvalidBody { reason: String },

    #[error("unknown body id {id}")]
    UnknownBody { id: u32 },

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl EngineError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }

    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape { reason: reason.into() }
    }

    pub(crate) fn body(reason: impl Into<String>) -> Self {
        Self::InvalidBody { reason: reason.into() }
    }
}
