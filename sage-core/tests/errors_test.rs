use sage_core::errors::*;

#[test]
fn stage_failed_carries_stage_and_reason() {
    let err = StageError::Failed {
        stage: "research".into(),
        reason: "corpus unavailable".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("research"));
    assert!(msg.contains("corpus unavailable"));
}

#[test]
fn stage_panicked_carries_message() {
    let err = StageError::Panicked {
        stage: "analysis".into(),
        message: "index out of bounds".into(),
    };
    assert!(err.to_string().contains("index out of bounds"));
}

#[test]
fn config_validation_carries_field() {
    let err = ConfigError::ValidationFailed {
        field: "pipeline.excerpt_chars".into(),
        message: "must be greater than 0".into(),
    };
    assert!(err.to_string().contains("pipeline.excerpt_chars"));
}

// --- From impls ---

#[test]
fn store_error_converts_to_sage_error() {
    let store_err = StoreError::LockPoisoned {
        resource: "knowledge store".into(),
    };
    let sage_err: SageError = store_err.into();
    assert!(matches!(sage_err, SageError::Store(_)));
    assert!(sage_err.to_string().contains("knowledge store"));
}

#[test]
fn stage_error_converts_to_sage_error() {
    let sage_err: SageError = StageError::Failed {
        stage: "analysis".into(),
        reason: "boom".into(),
    }
    .into();
    assert!(matches!(sage_err, SageError::Stage(_)));
}

#[test]
fn serde_error_converts_to_sage_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let sage_err: SageError = serde_err.into();
    assert!(matches!(sage_err, SageError::Serialization(_)));
}
