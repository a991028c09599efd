//! Config subcommands handler

use anyhow::{Context, Result};
use std::io::{self, Write};

use arnold_logs::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    show(config, &mut io::stdout().lock())
}

/// Print where the configuration file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

pub fn show<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    write!(out, "{}", toml_str)?;
    Ok(())
}
