//! CLI definitions for arnold-logs
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;

/// Build clap styles for help output.
///
/// - Green: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "arnold-logs")]
#[command(about = "Analyze Arnold simulation logs and generate experiment files")]
#[command(
    long_about = "arnold-logs - offline analysis of Arnold download simulation runs.

Each run leaves one tar archive per role (e.g. plain-12-s0-fs0-leecher.tar)
holding one text log per peer. arnold-logs extracts download times, credits,
download events and internal errors from those logs and turns them into
statistics, LaTeX tables and staircase plots.

QUICK START:
    arnold-logs average plain-*-leecher.tar      Download time statistics
    arnold-logs times plain plain-*-leecher.tar  Per-peer download times
    arnold-logs errors *.tar                     Logs with internal errors
    arnold-logs experiment credit-12-s2          Generate an experiment file

Archives ending in .gz or .tgz are decompressed on the fly."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Value reported by the staircase dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StaircaseMetric {
    /// Download completion time
    Completion,
    /// Download start time
    Start,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download time statistics per benchmark and peer count
    #[command(long_about = "Summarize download completion times per archive label.

The label is derived from the archive name: the benchmark type and the
process count scaled by peers_per_processor (plain-12-... -> plain 24).
Every peer log that is not a seeder's must contain a DOWNLOAD line;
logs that do not are reported and skipped.

EXAMPLE:
    arnold-logs average plain-12-s0-fs0-leecher.tar credit-12-s0-fs0-leecher.tar

OUTPUT:
    credit 24: min=101.250000 av=140.831000 max=190.002000 samples=24
    plain 24: min=98.104000 av=133.410000 max=171.880000 samples=24")]
    Average {
        /// Log archives
        #[arg(required = true, help = "Log archives (.tar, .tar.gz)")]
        archives: Vec<String>,
    },

    /// LaTeX table of download times per ranking policy and personality
    #[command(long_about = "Build the policy x personality performance table.

Reads extracted (plain text) logs, keys every DOWNLOAD line by its role and
size fields, and prints a LaTeX tabular with min, average and max download
time per ranking policy (TFT, CRED, FCFS) and leecher personality
(H&R, ALT, IMP). Missing combinations are shown as '-'.

EXAMPLES:
    arnold-logs performance tft.log credit.log onetrack.log
    arnold-logs performance --plain *.log")]
    Performance {
        /// Plain text logs
        #[arg(required = true, help = "Extracted log files")]
        logs: Vec<String>,
        /// Print the per-key statistics instead of the LaTeX table
        #[arg(long, help = "Print plain statistics instead of LaTeX")]
        plain: bool,
    },

    /// Final credit of every peer
    #[command(long_about = "Print the final credit of every peer log.

MODE selects how the label is derived from the archive name:
    plain, credit, onetrack   process count x peers_per_processor
    proxy                     helper count (third field, without its role letter)

EXAMPLE:
    arnold-logs credits credit credit-12-s0-fs0-leecher.tar")]
    Credits {
        /// Label mode: plain, credit, onetrack or proxy
        #[arg(help = "Label mode (plain, credit, onetrack, proxy)")]
        mode: String,
        /// Log archives
        #[arg(required = true, help = "Log archives (.tar, .tar.gz)")]
        archives: Vec<String>,
    },

    /// Completion time, start time and credit of every peer
    #[command(long_about = "Print '<label> <completion> <start> <credit>' for every peer log.

Times are in seconds. When a log holds several DOWNLOAD or FINALCREDIT
lines, the last of each is reported; a duration-only DOWNLOADTIME summary
does not replace a full record. A missing start time or credit is printed
as '-'. Logs without a DOWNLOAD line that are not a seeder's are reported.

EXAMPLE:
    arnold-logs times proxy plain-4-s2-fs0-leecher.tar")]
    Times {
        /// Label mode: plain, credit, onetrack or proxy
        #[arg(help = "Label mode (plain, credit, onetrack, proxy)")]
        mode: String,
        /// Log archives
        #[arg(required = true, help = "Log archives (.tar, .tar.gz)")]
        archives: Vec<String>,
    },

    /// Print download event lines
    #[command(long_about = "Print every STARTDOWNLOAD, CANCELEDDOWNLOAD, COMPLETEDDOWNLOAD
and FAILEDDOWNLOAD line of every peer log, in archive order.")]
    Events {
        /// Log archives
        #[arg(required = true, help = "Log archives (.tar, .tar.gz)")]
        archives: Vec<String>,
    },

    /// Print DOWNLOAD and FINALCREDIT lines verbatim
    Grep {
        /// Log archives
        #[arg(required = true, help = "Log archives (.tar, .tar.gz)")]
        archives: Vec<String>,
    },

    /// Find peer logs with internal errors
    #[command(long_about = "Print the first internal error of every peer log that has one,
followed by a per-archive count.

OUTPUT:
    Internal error: piece 12 requested twice
    File 'plain-12-s0-fs0-leecher.tar' has 1 log with internal errors")]
    Errors {
        /// Log archives
        #[arg(required = true, help = "Log archives (.tar, .tar.gz)")]
        archives: Vec<String>,
    },

    /// Sorted staircase plot data of completion or start times
    #[command(long_about = "Print '<seconds> <rank>' rows, sorted by time, for every DOWNLOAD
line in the given logs. Plotting the rows gives the empirical distribution
of completion (or start) times.

EXAMPLES:
    arnold-logs staircase completion all.log > completion.dat
    arnold-logs staircase start all.log > start.dat")]
    Staircase {
        /// Which time to plot
        #[arg(value_enum, help = "Time to plot")]
        metric: StaircaseMetric,
        /// Plain text logs
        #[arg(required = true, help = "Extracted log files")]
        logs: Vec<String>,
    },

    /// Generate an experiment file from a benchmark name
    #[command(long_about = "Generate the experiment description for a benchmark.

The benchmark name has the form <type>-<leechers>-<s|l><helpers>[-...]:
    type       benchmark type (plain, credit, onetrack, ...)
    leechers   number of leecher processes
    s|l        the proxy coordinator runs as seeder (s) or leecher (l)
    helpers    number of helper processes

EXAMPLES:
    arnold-logs experiment plain-12-s0 > plain-12-s0.ini
    arnold-logs experiment credit-8-l2")]
    Experiment {
        /// Benchmark name
        #[arg(help = "Benchmark name, e.g. credit-12-s2")]
        spec: String,
    },

    /// Print the runtime budget of a role
    Runtime {
        /// Peer role (leecher, helper, coordinator)
        #[arg(help = "Peer role")]
        role: String,
        /// Benchmark name
        #[arg(help = "Benchmark name")]
        spec: String,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
}
