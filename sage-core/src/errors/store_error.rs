/// Knowledge store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the store lock.
    #[error("lock poisoned on {resource}")]
    LockPoisoned { resource: String },
}
