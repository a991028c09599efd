//! Runtime command handler

use anyhow::Result;
use std::io::{self, Write};

use arnold_logs::experiment::runtime_for_role;
use arnold_logs::Config;

#[cfg(not(tarpaulin_include))]
pub fn handle(role: &str, spec: &str, config: &Config) -> Result<()> {
    run(role, spec, config, &mut io::stdout().lock())
}

/// Print `RUNTIME=<seconds>` for `role`. The benchmark name is accepted
/// for symmetry with the experiment command; every benchmark currently
/// gets the same budget.
pub fn run<W: Write>(role: &str, _spec: &str, config: &Config, out: &mut W) -> Result<()> {
    writeln!(out, "RUNTIME={}", runtime_for_role(role, &config.experiment)?)?;
    Ok(())
}
