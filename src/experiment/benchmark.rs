//! Benchmark name decoding.

use std::fmt;

use super::error::ExperimentError;

/// A benchmark type and the application options it runs with. The jorrent
/// file is appended after these options when the command line is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkType {
    pub name: &'static str,
    pub options: &'static [&'static str],
}

const CREDIT: &str = "-Darnold.credit-based";
const ONE_TRACK: &str = "-Darnold.one-track-based";
const POOR_START: &str = "-Darnold.special-start-credit=-1e10";
const RICH_START: &str = "-Darnold.special-start-credit=1e10";

/// Every benchmark type the harness knows how to launch.
pub const BENCHMARK_TYPES: &[BenchmarkType] = &[
    BenchmarkType { name: "plain", options: &["--dummyfile"] },
    BenchmarkType { name: "credit", options: &["--dummyfile", CREDIT] },
    BenchmarkType { name: "onetrack", options: &["--dummyfile", ONE_TRACK] },
    BenchmarkType { name: "plainimp", options: &["--dummyfile", "--impatientLeechers"] },
    BenchmarkType {
        name: "creditimp",
        options: &["--dummyfile", "--impatientLeechers", CREDIT],
    },
    BenchmarkType {
        name: "onetrackimp",
        options: &["--dummyfile", "--impatientLeechers", ONE_TRACK],
    },
    BenchmarkType { name: "poorcredit", options: &["--dummyfile", CREDIT, POOR_START] },
    BenchmarkType { name: "richcredit", options: &["--dummyfile", CREDIT, RICH_START] },
    BenchmarkType { name: "plainstay", options: &["--dummyfile", "--leechersStay"] },
    BenchmarkType {
        name: "onetrackstay",
        options: &["--dummyfile", ONE_TRACK, "--leechersStay"],
    },
    BenchmarkType {
        name: "creditstay",
        options: &["--dummyfile", CREDIT, "--leechersStay"],
    },
    BenchmarkType {
        name: "poorcreditstay",
        options: &["--dummyfile", POOR_START, CREDIT, "--leechersStay"],
    },
    BenchmarkType {
        name: "richcreditstay",
        options: &["--dummyfile", RICH_START, CREDIT, "--leechersStay"],
    },
    BenchmarkType { name: "real", options: &[] },
    BenchmarkType { name: "realstay", options: &["--leechersStay"] },
];

impl BenchmarkType {
    pub fn lookup(name: &str) -> Option<&'static BenchmarkType> {
        BENCHMARK_TYPES.iter().find(|t| t.name == name)
    }

    /// Application arguments: the type's options followed by the jorrent file.
    pub fn arguments(&self, jorrent_file: &str) -> Vec<String> {
        self.options
            .iter()
            .map(|o| o.to_string())
            .chain(std::iter::once(jorrent_file.to_string()))
            .collect()
    }
}

/// Role the proxy coordinator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinatorRole {
    Seeder,
    Leecher,
}

impl CoordinatorRole {
    pub fn flag(self) -> &'static str {
        match self {
            CoordinatorRole::Seeder => "--seeder",
            CoordinatorRole::Leecher => "--leecher",
        }
    }
}

impl fmt::Display for CoordinatorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// A decoded benchmark name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkSpec {
    /// The name as given; it prefixes every generated key.
    pub name: String,
    pub benchmark: &'static BenchmarkType,
    pub leechers: u32,
    pub helpers: u32,
    pub coordinator: CoordinatorRole,
}

impl BenchmarkSpec {
    pub fn parse(name: &str) -> Result<Self, ExperimentError> {
        let elements: Vec<&str> = name.split('-').collect();
        if elements.len() < 3 {
            return Err(ExperimentError::MalformedSpec {
                spec: name.to_string(),
                reason: "expected <type>-<leechers>-<helpers>".to_string(),
            });
        }

        let leechers = elements[1]
            .parse::<u32>()
            .map_err(|_| ExperimentError::MalformedSpec {
                spec: name.to_string(),
                reason: format!("leecher count '{}' is not a number", elements[1]),
            })?;

        let helpers_token = elements[2];
        let coordinator = match helpers_token.chars().next() {
            Some('s') => CoordinatorRole::Seeder,
            Some('l') => CoordinatorRole::Leecher,
            _ => return Err(ExperimentError::MalformedHelpers(helpers_token.to_string())),
        };
        let helpers = helpers_token[1..]
            .parse::<u32>()
            .map_err(|_| ExperimentError::MalformedHelpers(helpers_token.to_string()))?;

        if leechers < 1 && helpers < 1 {
            return Err(ExperimentError::NoPeers(name.to_string()));
        }

        let benchmark =
            BenchmarkType::lookup(elements[0]).ok_or_else(|| ExperimentError::UnknownBenchmarkType {
                name: elements[0].to_string(),
                known: BENCHMARK_TYPES
                    .iter()
                    .map(|t| t.name)
                    .collect::<Vec<_>>()
                    .join(","),
            })?;

        Ok(Self {
            name: name.to_string(),
            benchmark,
            leechers,
            helpers,
            coordinator,
        })
    }
}
