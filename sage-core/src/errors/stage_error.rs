/// Errors raised inside a research or analysis stage.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("{stage} stage failed: {reason}")]
    Failed { stage: String, reason: String },

    #[error("{stage} stage panicked: {message}")]
    Panicked { stage: String, message: String },
}
