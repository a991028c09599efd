//! Experiment file rendering.

use std::fmt::Write;

use super::benchmark::BenchmarkSpec;
use super::error::ExperimentError;
use crate::config::ExperimentConfig;

struct Block<'a> {
    role: &'a str,
    processes: u32,
    resources: u32,
    arguments: String,
}

/// Render the experiment file for `spec`.
///
/// The leecher block is always present. Helper and coordinator blocks are
/// added when the benchmark uses helpers, each preceded by a blank line.
pub fn render_experiment(
    spec: &BenchmarkSpec,
    config: &ExperimentConfig,
    peers_per_processor: u32,
) -> Result<String, ExperimentError> {
    let leecher_processes = spec
        .leechers
        .checked_mul(peers_per_processor)
        .ok_or_else(|| ExperimentError::MalformedSpec {
            spec: spec.name.clone(),
            reason: format!(
                "{} leechers times {} peers per processor overflows the process count",
                spec.leechers, peers_per_processor
            ),
        })?;
    let arguments = spec.benchmark.arguments(&config.jorrent_file).join(",");

    let mut out = String::from("# Generated experiment file\n");
    write_block(
        &mut out,
        spec,
        config,
        &Block {
            role: "leecher",
            processes: leecher_processes,
            resources: spec.leechers,
            arguments: arguments.clone(),
        },
    );

    if spec.helpers > 0 {
        out.push('\n');
        write_block(
            &mut out,
            spec,
            config,
            &Block {
                role: "helper",
                processes: spec.helpers,
                resources: spec.helpers,
                arguments: format!(
                    "--proxymode,--helper,--helpersStay,{},{}",
                    arguments, config.shared_file
                ),
            },
        );

        out.push('\n');
        write_block(
            &mut out,
            spec,
            config,
            &Block {
                role: "coordinator",
                processes: 1,
                resources: 1,
                arguments: format!(
                    "--proxymode,{},{},{}",
                    spec.coordinator, arguments, config.shared_file
                ),
            },
        );
    }

    Ok(out)
}

fn write_block(out: &mut String, spec: &BenchmarkSpec, config: &ExperimentConfig, block: &Block) {
    let prefix = format!("run-{}-{}", block.role, spec.name);
    let properties = [
        ("application.name", config.application.clone()),
        ("process.count", block.processes.to_string()),
        ("resource.count", block.resources.to_string()),
        ("cluster.name", config.cluster.clone()),
        ("pool.name", format!("{}-pool", spec.name)),
        (
            "application.input.files",
            format!("{},settag-{}-{}.sh", config.jorrent_file, spec.name, block.role),
        ),
        (
            "application.output.files",
            format!("{}-{}.tar.gz", spec.name, block.role),
        ),
        ("application.arguments", block.arguments.clone()),
    ];
    for (property, value) in properties {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{}.{} = {}", prefix, property, value);
    }
}

/// Runtime budget for a role: leechers get the base runtime, every other
/// role gets it scaled by the configured multiplier.
pub fn runtime_for_role(role: &str, config: &ExperimentConfig) -> Result<u32, ExperimentError> {
    if role == "leecher" {
        return Ok(config.leecher_runtime);
    }
    config
        .leecher_runtime
        .checked_mul(config.runtime_multiplier)
        .ok_or(ExperimentError::RuntimeOverflow {
            runtime: config.leecher_runtime,
            multiplier: config.runtime_multiplier,
        })
}
