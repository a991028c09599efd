//! End-to-end runs of the arnold-logs binary

use predicates::prelude::*;

use crate::helpers::{write_tar, write_tar_gz, Workspace};

#[test]
fn average_reports_label_statistics() {
    let ws = Workspace::new();
    write_tar(
        &ws.path("plain-3-s0-fs0-leecher.tar"),
        &[
            ("p0.log", "DOWNLOAD 1000 0 leecher 6\n"),
            ("p1.log", "DOWNLOAD 3000 0 leecher 6\n"),
            ("seed.log", "seeder=true\n"),
        ],
    );
    write_tar_gz(
        &ws.path("credit-1-s0-fs0-leecher.tar.gz"),
        &[("p0.log", "DOWNLOAD 2500 0 leecher 6\n")],
    );

    ws.cmd()
        .args([
            "average",
            "plain-3-s0-fs0-leecher.tar",
            "credit-1-s0-fs0-leecher.tar.gz",
        ])
        .assert()
        .success()
        .stdout(
            "credit 2: min=2.500000 av=2.500000 max=2.500000 samples=1\n\
             plain 6: min=1.000000 av=2.000000 max=3.000000 samples=2\n",
        );
}

#[test]
fn average_flags_leechers_without_download() {
    let ws = Workspace::new();
    write_tar(
        &ws.path("plain-1-s0-leecher.tar"),
        &[("lost.log", "connected\n"), ("ok.log", "DOWNLOAD 500 0 leecher 6\n")],
    );

    ws.cmd()
        .args(["average", "plain-1-s0-leecher.tar"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "File 'lost.log' contains no download time\n",
        ))
        .stdout(predicate::str::contains("plain 2: min=0.500000"));
}

#[test]
fn peers_per_processor_comes_from_config() {
    let ws = Workspace::new();
    ws.write_config("[labels]\npeers_per_processor = 5\n");
    write_tar(
        &ws.path("plain-3-s0-leecher.tar"),
        &[("p0.log", "DOWNLOAD 1000 0 leecher 6\n")],
    );

    ws.cmd()
        .args(["average", "plain-3-s0-leecher.tar"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("plain 15:"));
}

#[test]
fn invalid_config_fails_before_running() {
    let ws = Workspace::new();
    ws.write_config("[experiment]\nleecher_runtime = 0\n");

    ws.cmd()
        .args(["runtime", "leecher", "plain-1-s0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("leecher_runtime"));
}

#[test]
fn times_prints_missing_credit_as_dash() {
    let ws = Workspace::new();
    write_tar(
        &ws.path("plain-2-h3-leecher.tar"),
        &[
            ("a.log", "DOWNLOAD 1500 250 leecher 6\nFINALCREDIT 2.5\n"),
            ("b.log", "DOWNLOAD 2000 0 leecher 6\n"),
        ],
    );

    ws.cmd()
        .args(["times", "proxy", "plain-2-h3-leecher.tar"])
        .assert()
        .success()
        .stdout("3 1.5 0.25 2.5\n3 2.0 0.0 -\n");
}

#[test]
fn unknown_mode_fails() {
    let ws = Workspace::new();
    write_tar(&ws.path("plain-1-s0.tar"), &[("a.log", "FINALCREDIT 1\n")]);

    ws.cmd()
        .args(["credits", "bogus", "plain-1-s0.tar"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown mode bogus"));
}

#[test]
fn credits_reports_logs_without_credit() {
    let ws = Workspace::new();
    write_tar(
        &ws.path("credit-2-s0-leecher.tar"),
        &[("a.log", "FINALCREDI -1.5\n"), ("b.log", "nothing\n")],
    );

    ws.cmd()
        .args(["credits", "credit", "credit-2-s0-leecher.tar"])
        .assert()
        .success()
        .stdout("4 -1.5\nFile 'b.log' contains no credit\n");
}

#[test]
fn missing_arguments_exit_with_one() {
    let ws = Workspace::new();
    ws.cmd().arg("average").assert().code(1);
    ws.cmd().args(["credits", "plain"]).assert().code(1);
    ws.cmd().assert().code(1);
}

#[test]
fn help_exits_successfully() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("experiment"));
}

#[test]
fn missing_archive_fails_with_path() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["average", "plain-1-s0-leecher.tar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plain-1-s0-leecher.tar"));
}

#[test]
fn errors_counts_affected_logs() {
    let ws = Workspace::new();
    write_tar(
        &ws.path("plain-1-s0-leecher.tar"),
        &[
            ("a.log", "Internal error: piece 12 requested twice\nInternal error: again\n"),
            ("b.log", "all good\n"),
            ("c.log", "x\nInternal error: choke\n"),
        ],
    );
    write_tar(&ws.path("clean.tar"), &[("a.log", "fine\n")]);

    ws.cmd()
        .args(["errors", "plain-1-s0-leecher.tar", "clean.tar"])
        .assert()
        .success()
        .stdout(
            "Internal error: piece 12 requested twice\n\
             Internal error: choke\n\
             File 'plain-1-s0-leecher.tar' has 2 logs with internal errors\n",
        );
}

#[test]
fn staircase_sorts_completion_times() {
    let ws = Workspace::new();
    std::fs::write(
        ws.path("all.log"),
        "DOWNLOAD 3000 100 leecher 6\nnoise\nDOWNLOAD 1000 200 leecher 6\n",
    )
    .unwrap();

    ws.cmd()
        .args(["staircase", "completion", "all.log"])
        .assert()
        .success()
        .stdout("1.000000 0\n3.000000 1\n");
}

#[test]
fn runtime_scales_non_leecher_roles() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["runtime", "leecher", "plain-4-s0"])
        .assert()
        .success()
        .stdout("RUNTIME=1000\n");
    ws.cmd()
        .args(["runtime", "helper", "plain-4-s0"])
        .assert()
        .success()
        .stdout("RUNTIME=4000\n");
}

#[test]
fn experiment_rejects_unknown_benchmark() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["experiment", "turbo-4-s0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown benchmark type 'turbo'"));
}

#[test]
fn config_path_points_into_home() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(".config/arnold-logs/config.toml\n"));
}

#[test]
fn performance_plain_keys_by_role_and_size() {
    let ws = Workspace::new();
    std::fs::write(
        ws.path("run.log"),
        "DOWNLOAD 1000 500 leecher 6 extra\nFINALCREDIT 3.5\n",
    )
    .unwrap();

    ws.cmd()
        .args(["performance", "--plain", "run.log"])
        .assert()
        .success()
        .stdout("leecher 6: min=1.000000 av=1.000000 max=1.000000 samples=1\n");
}

#[test]
fn proxy_helper_archives_are_analyzed() {
    let ws = Workspace::new();
    write_tar(
        &ws.path("plain-4-h2-helper.tar"),
        &[(
            "h.log",
            "DOWNLOADTIME 1500 250 TitForTatRankingPolicy TFT\nDOWNLOADTIME 1500\nFINALCREDIT 3.5\n",
        )],
    );

    ws.cmd()
        .args(["credits", "proxy", "plain-4-h2-helper.tar"])
        .assert()
        .success()
        .stdout("2 3.5\n");
    ws.cmd()
        .args(["average", "plain-4-h2-helper.tar"])
        .assert()
        .success()
        .stdout("plain 8: min=1.500000 av=1.500000 max=1.500000 samples=1\n");
    ws.cmd()
        .args(["times", "proxy", "plain-4-h2-helper.tar"])
        .assert()
        .success()
        .stdout("2 1.5 0.25 3.5\n");
}

#[test]
fn oversized_benchmark_fails_cleanly() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["experiment", "plain-3000000000-s0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("overflows"));
}
