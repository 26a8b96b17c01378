mod config_error;
mod ledger_error;

pub use config_error::ConfigError;
pub use ledger_error::LedgerError;

/// Top-level error type for every fallible StoryTrust operation.
///
/// The confidence engine itself never fails; these errors come from
/// ledger aggregation, input validation, and config loading.
#[derive(Debug, thiserror::Error)]
pub enum StoryTrustError {
    #[error("invalid confidence input: {reason}")]
    InvalidInput { reason: String },

    #[error("ledger error: {0}")]
    LedgerError(#[from] LedgerError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the workspace.
pub type StoryTrustResult<T> = Result<T, StoryTrustError>;
