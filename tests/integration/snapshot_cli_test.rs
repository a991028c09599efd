//! CLI output snapshot tests
//!
//! Tests the actual CLI binary output for reproducibility.

use crate::helpers::Workspace;

/// Run arnold-logs in a fresh workspace and capture stdout.
fn run_stdout(args: &[&str]) -> String {
    let ws = Workspace::new();
    let output = ws.cmd().args(args).output().expect("Failed to execute arnold-logs");
    assert!(output.status.success(), "arnold-logs {:?} failed", args);
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn snapshot_experiment_with_helpers() {
    insta::assert_snapshot!(run_stdout(&["experiment", "plain-2-s1"]), @r###"
    # Generated experiment file
    run-leecher-plain-2-s1.application.name = Arnold
    run-leecher-plain-2-s1.process.count = 4
    run-leecher-plain-2-s1.resource.count = 2
    run-leecher-plain-2-s1.cluster.name = VU
    run-leecher-plain-2-s1.pool.name = plain-2-s1-pool
    run-leecher-plain-2-s1.application.input.files = ubuntu-karmic-desktop-i386.jorrent,settag-plain-2-s1-leecher.sh
    run-leecher-plain-2-s1.application.output.files = plain-2-s1-leecher.tar.gz
    run-leecher-plain-2-s1.application.arguments = --dummyfile,ubuntu-karmic-desktop-i386.jorrent

    run-helper-plain-2-s1.application.name = Arnold
    run-helper-plain-2-s1.process.count = 1
    run-helper-plain-2-s1.resource.count = 1
    run-helper-plain-2-s1.cluster.name = VU
    run-helper-plain-2-s1.pool.name = plain-2-s1-pool
    run-helper-plain-2-s1.application.input.files = ubuntu-karmic-desktop-i386.jorrent,settag-plain-2-s1-helper.sh
    run-helper-plain-2-s1.application.output.files = plain-2-s1-helper.tar.gz
    run-helper-plain-2-s1.application.arguments = --proxymode,--helper,--helpersStay,--dummyfile,ubuntu-karmic-desktop-i386.jorrent,ubuntu-karmic-desktop-i386.iso

    run-coordinator-plain-2-s1.application.name = Arnold
    run-coordinator-plain-2-s1.process.count = 1
    run-coordinator-plain-2-s1.resource.count = 1
    run-coordinator-plain-2-s1.cluster.name = VU
    run-coordinator-plain-2-s1.pool.name = plain-2-s1-pool
    run-coordinator-plain-2-s1.application.input.files = ubuntu-karmic-desktop-i386.jorrent,settag-plain-2-s1-coordinator.sh
    run-coordinator-plain-2-s1.application.output.files = plain-2-s1-coordinator.tar.gz
    run-coordinator-plain-2-s1.application.arguments = --proxymode,--seeder,--dummyfile,ubuntu-karmic-desktop-i386.jorrent,ubuntu-karmic-desktop-i386.iso
    "###);
}

#[test]
fn snapshot_default_config() {
    insta::assert_snapshot!(run_stdout(&["config", "show"]), @r###"
    [labels]
    peers_per_processor = 2

    [experiment]
    application = "Arnold"
    cluster = "VU"
    jorrent_file = "ubuntu-karmic-desktop-i386.jorrent"
    shared_file = "ubuntu-karmic-desktop-i386.iso"
    leecher_runtime = 1000
    runtime_multiplier = 4

    [logging]
    level = "warn"
    "###);
}
