use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use sage_observability::JsonlTraceWriter;
use sage_pipeline::SageRuntime;
use tracing::info;

use crate::report;

/// Assessment scenarios as `(name, query)`, run in this order.
pub const SCENARIOS: [(&str, &str); 5] = [
    ("simple_query", "What are the main types of neural networks?"),
    (
        "complex_query",
        "Research transformer architectures, analyze their computational efficiency, and summarize key trade-offs.",
    ),
    ("memory_test", "What did we discuss about neural networks earlier?"),
    (
        "multi_step",
        "Find recent papers on reinforcement learning, analyze their methodologies, and identify common challenges.",
    ),
    (
        "collaborative",
        "Compare two machine-learning approaches and recommend which is better for our use case.",
    ),
];

pub fn run(runtime: &SageRuntime, output_dir: &Path) -> anyhow::Result<()> {
    let stdout = io::stdout().lock();
    run_into(runtime, output_dir, stdout)
}

/// Run every scenario, writing `<name>.txt` answers and `scenario_traces.jsonl`.
pub fn run_into<W: Write>(
    runtime: &SageRuntime,
    output_dir: &Path,
    mut out: W,
) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let log = JsonlTraceWriter::new(output_dir.join("scenario_traces.jsonl"));

    for (name, query) in SCENARIOS {
        writeln!(out, "\n=== Running scenario: {name} ===")?;
        let response = runtime.handle(query);
        report::write_response(&mut out, &response)?;

        let answer_path = output_dir.join(format!("{name}.txt"));
        fs::write(&answer_path, &response.final_answer.answer)
            .with_context(|| format!("writing {}", answer_path.display()))?;
        log.append(&response)
            .with_context(|| format!("appending trace to {}", log.path().display()))?;
        info!(scenario = name, task_id = %response.task_id, "scenario complete");
    }
    Ok(())
}
