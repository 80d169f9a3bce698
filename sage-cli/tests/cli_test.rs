//! End-to-end runs of the `sage` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn sage(args: &[&str], trace_log: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sage"))
        .args(args)
        .env("SAGE_TRACE_LOG", trace_log)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sage binary")
}

#[test]
fn ask_prints_answer_and_trace_summary() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("agent_traces.jsonl");

    let output = sage(&["ask", "Summarize", "efficiency", "trade-offs"], &log);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Assistant: Synthesis for: Summarize efficiency trade-offs"));
    assert!(stdout.contains("[RESEARCH] by ResearchStage (confidence=0.9)"));
    assert!(stdout.contains("[ANALYSIS] by AnalysisStage (confidence=0.85)"));

    let logged = std::fs::read_to_string(&log).unwrap();
    let line: serde_json::Value = serde_json::from_str(logged.trim_end()).unwrap();
    assert_eq!(line["final"]["confidence"], 0.85);
}

#[test]
fn config_file_is_honoured() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("traces.jsonl");
    let config = dir.path().join("sage.toml");
    std::fs::write(&config, "[research]\nconfidence = 0.5\n").unwrap();

    let output = sage(
        &["--config", config.to_str().unwrap(), "ask", "healthcare"],
        &log,
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[RESEARCH] by ResearchStage (confidence=0.5)"));
}

#[test]
fn invalid_config_fails_before_running() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("traces.jsonl");
    let config = dir.path().join("sage.toml");
    std::fs::write(&config, "[analysis]\nconfidence = 3.0\n").unwrap();

    let output = sage(&["--config", config.to_str().unwrap(), "ask", "anything"], &log);

    assert!(!output.status.success());
    assert!(!log.exists());
}

#[test]
fn custom_corpus_is_searched() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("traces.jsonl");
    let corpus = dir.path().join("corpus.json");
    std::fs::write(
        &corpus,
        r#"[{"title": "Quantum Annealing", "text": "Optimisation on quantum hardware."}]"#,
    )
    .unwrap();

    let output = sage(
        &["--corpus", corpus.to_str().unwrap(), "ask", "quantum"],
        &log,
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("- Quantum Annealing: Optimisation on quantum hardware."));
}

#[test]
fn scenarios_write_to_output_dir() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("unused.jsonl");
    let out = dir.path().join("out");

    let output = sage(&["scenarios", "--output-dir", out.to_str().unwrap()], &log);

    assert!(output.status.success());
    assert!(out.join("collaborative.txt").exists());
    let traces = std::fs::read_to_string(out.join("scenario_traces.jsonl")).unwrap();
    assert_eq!(traces.lines().count(), 5);
}
