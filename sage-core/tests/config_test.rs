use std::collections::HashMap;

use sage_core::config::*;
use sage_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = SageConfig::from_toml("").unwrap();

    // Research defaults
    assert_eq!(config.research.memory_suggestions, 3);
    assert_eq!(config.research.confidence, 0.9);

    // Analysis defaults
    assert_eq!(config.analysis.keywords.len(), 8);
    assert!(config.analysis.keywords.iter().any(|k| k == "trade-off"));
    assert_eq!(config.analysis.confidence, 0.85);

    // Pipeline defaults
    assert_eq!(config.pipeline.simple_top_n, 3);
    assert_eq!(config.pipeline.complex_top_n, 6);
    assert_eq!(config.pipeline.excerpt_chars, 240);
    assert_eq!(config.pipeline.moderate_token_threshold, 8);
    assert_eq!(config.pipeline.fallback_keyword_limit, 4);
    assert_eq!(config.pipeline.error_confidence, 0.2);
    assert!(config
        .pipeline
        .trigger_phrases
        .iter()
        .any(|p| p == "which is better"));

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
    assert_eq!(
        config.observability.trace_log_path,
        "outputs/agent_traces.jsonl"
    );
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[pipeline]
excerpt_chars = 80
complex_top_n = 10

[analysis]
keywords = ["latency"]
"#;
    let config = SageConfig::from_toml(toml).unwrap();
    assert_eq!(config.pipeline.excerpt_chars, 80);
    assert_eq!(config.pipeline.complex_top_n, 10);
    // Non-overridden fields keep defaults
    assert_eq!(config.pipeline.simple_top_n, 3);
    assert_eq!(config.analysis.keywords, vec!["latency".to_string()]);
    assert_eq!(config.analysis.confidence, 0.85);
}

#[test]
fn config_rejects_invalid_toml() {
    let err = SageConfig::from_toml("[pipeline\nexcerpt_chars = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = SageConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = SageConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.pipeline.trigger_phrases,
        config.pipeline.trigger_phrases
    );
    assert_eq!(roundtripped.analysis.keywords, config.analysis.keywords);
}

#[test]
fn validate_rejects_out_of_range_confidence() {
    let mut config = SageConfig::default();
    config.analysis.confidence = 1.5;
    let err = config.validate().unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "analysis.confidence"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validate_rejects_zero_top_n() {
    let mut config = SageConfig::default();
    config.pipeline.simple_top_n = 0;
    assert!(config.validate().is_err());
}

#[test]
fn env_overrides_replace_observability_fields() {
    let env: HashMap<&str, &str> = [
        ("SAGE_LOG_LEVEL", "debug"),
        ("SAGE_TRACE_LOG", "/tmp/traces.jsonl"),
        ("SAGE_JSON_LOGS", "true"),
    ]
    .into_iter()
    .collect();

    let mut config = SageConfig::default();
    config.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.observability.log_level, "debug");
    assert_eq!(config.observability.trace_log_path, "/tmp/traces.jsonl");
    assert!(config.observability.json_logs);
}

#[test]
fn load_missing_file_is_file_not_found() {
    let err = SageConfig::load(Some(std::path::Path::new("/nonexistent/sage.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
