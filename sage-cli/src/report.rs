//! Console rendering of a pipeline response.

use std::io::{self, Write};

use sage_core::models::PipelineResponse;

/// `[STAGE] by AGENT (confidence=X)`, one per step.
pub fn trace_lines(response: &PipelineResponse) -> Vec<String> {
    response
        .steps
        .iter()
        .map(|step| {
            format!(
                "[{}] by {} (confidence={})",
                step.stage.as_str().to_uppercase(),
                step.trace.agent(),
                step.trace.confidence()
            )
        })
        .collect()
}

pub fn write_response<W: Write>(out: &mut W, response: &PipelineResponse) -> io::Result<()> {
    writeln!(out, "\nAssistant: {}", response.final_answer.answer)?;
    writeln!(out, "\n--- Agent Trace ---")?;
    for line in trace_lines(response) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
