//! Error handling for Sage.
//! One error enum per subsystem, `thiserror` only, aggregated into [`SageError`].

pub mod config_error;
pub mod stage_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use stage_error::StageError;
pub use store_error::StoreError;

/// Top-level error type for every fallible Sage operation.
#[derive(Debug, thiserror::Error)]
pub enum SageError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("stage error: {0}")]
    Stage(#[from] StageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SageResult<T> = Result<T, SageError>;
