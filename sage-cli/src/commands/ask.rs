use std::io;

use anyhow::Context;
use sage_pipeline::SageRuntime;

use crate::report;

pub fn run(runtime: &SageRuntime, query: &str) -> anyhow::Result<()> {
    let response = runtime.handle(query.trim());

    let mut out = io::stdout().lock();
    report::write_response(&mut out, &response)?;

    let log = super::trace_log(runtime);
    log.append(&response)
        .with_context(|| format!("appending trace to {}", log.path().display()))?;
    Ok(())
}
