//! Experiment command handler

use anyhow::Result;
use std::io::{self, Write};

use arnold_logs::experiment::{render_experiment, BenchmarkSpec};
use arnold_logs::Config;

#[cfg(not(tarpaulin_include))]
pub fn handle(spec: &str, config: &Config) -> Result<()> {
    run(spec, config, &mut io::stdout().lock())
}

/// Print the experiment file for the benchmark named `spec`.
pub fn run<W: Write>(spec: &str, config: &Config, out: &mut W) -> Result<()> {
    let spec = BenchmarkSpec::parse(spec)?;
    let text = render_experiment(&spec, &config.experiment, config.labels.peers_per_processor)?;
    out.write_all(text.as_bytes())?;
    Ok(())
}
