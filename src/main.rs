//! arnold-logs - CLI entry point

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use arnold_logs::cli::{Cli, Commands, ConfigCommands};
use arnold_logs::logging::init_logging;
use arnold_logs::Config;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit with 1; --help and --version are not errors
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    init_logging(&config.logging.level);

    match cli.command {
        Commands::Average { archives } => commands::average::handle(&archives, &config),
        Commands::Performance { logs, plain } => commands::performance::handle(&logs, plain),
        Commands::Credits { mode, archives } => commands::credits::handle(&mode, &archives, &config),
        Commands::Times { mode, archives } => commands::times::handle(&mode, &archives, &config),
        Commands::Events { archives } => commands::events::handle(&archives),
        Commands::Grep { archives } => commands::grep::handle(&archives),
        Commands::Errors { archives } => commands::errors::handle(&archives),
        Commands::Staircase { metric, logs } => commands::staircase::handle(metric, &logs),
        Commands::Experiment { spec } => commands::experiment::handle(&spec, &config),
        Commands::Runtime { role, spec } => commands::runtime::handle(&role, &spec, &config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
