use std::io::{self, BufRead, Write};

use anyhow::Context;
use sage_observability::JsonlTraceWriter;
use sage_pipeline::SageRuntime;

use crate::report;

pub fn run(runtime: &SageRuntime) -> anyhow::Result<()> {
    let log = super::trace_log(runtime);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    session(runtime, &log, stdin, stdout)
}

/// Read queries line by line until EOF, `exit` or `quit`.
pub fn session<R: BufRead, W: Write>(
    runtime: &SageRuntime,
    log: &JsonlTraceWriter,
    input: R,
    mut out: W,
) -> anyhow::Result<()> {
    writeln!(out, "Interactive Research Assistant")?;
    writeln!(out, "Type your query (or 'exit' to quit).")?;

    let mut lines = input.lines();
    loop {
        write!(out, "\nYou: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let query = line?;
        let query = query.trim();
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            writeln!(out, "Exiting. Goodbye!")?;
            break;
        }
        if query.is_empty() {
            continue;
        }

        let response = runtime.handle(query);
        report::write_response(&mut out, &response)?;
        log.append(&response)
            .with_context(|| format!("appending trace to {}", log.path().display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sage_core::SageConfig;
    use sage_core::traits::IKnowledgeStore;

    use crate::corpus::default_corpus;

    #[test]
    fn each_query_is_answered_and_logged_until_quit() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlTraceWriter::new(dir.path().join("traces.jsonl"));
        let runtime = SageRuntime::new(SageConfig::default(), default_corpus());
        let input = "What is deep learning?\n\nCompare options\nquit\nnever asked\n";

        let mut out = Vec::new();
        session(&runtime, &log, input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Assistant: ").count(), 2);
        assert!(text.contains("Exiting. Goodbye!"));

        let logged = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(logged.lines().count(), 2);
        let turns = runtime.store().conversation().unwrap();
        assert_eq!(turns.len(), 4);
    }

    #[test]
    fn exit_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlTraceWriter::new(dir.path().join("traces.jsonl"));
        let runtime = SageRuntime::new(SageConfig::default(), default_corpus());

        let mut out = Vec::new();
        session(&runtime, &log, "EXIT\n".as_bytes(), &mut out).unwrap();
        assert!(!log.path().exists());
    }

    #[test]
    fn eof_ends_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let log = JsonlTraceWriter::new(dir.path().join("traces.jsonl"));
        let runtime = SageRuntime::new(SageConfig::default(), default_corpus());

        let mut out = Vec::new();
        session(&runtime, &log, "What is deep learning?".as_bytes(), &mut out).unwrap();
        assert_eq!(std::fs::read_to_string(log.path()).unwrap().lines().count(), 1);
    }
}
