use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

fn sample_report() -> String {
    serde_json::json!([
        {
            "name": "prj:design:report:curve",
            "id": "a1b2c3",
            "x_label": "\"Freq [GHz]\"",
            "y_label": "\"[dB]\"",
            "x_axis": [1.0, 2.0, 3.0],
            "version_ref": "2024.1",
            "y_axis_ref": [10.0, 20.0, 30.0],
            "version_now": "2024.2",
            "y_axis_now": [8.0, 15.0, 33.0],
            "diff": [2.0, 5.0, -3.0],
            "delta": 33.333
        },
        {
            "name": "prj:design:report:baseline",
            "id": "d4e5f6",
            "x_axis": [1.0, 2.0],
            "version_ref": -1,
            "version_now": "2024.2",
            "y_axis_now": [1.0, 2.0],
            "delta": -1
        }
    ])
    .to_string()
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("delta-dash").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("delta-dash"));
}

#[test]
fn demo_renders_chart() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sales.svg");
    let mut cmd = Command::cargo_bin("delta-dash").unwrap();
    cmd.args(["demo", "--out"]).arg(&out);
    cmd.assert().success().stdout(predicate::str::contains("Wrote"));
    assert!(fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn plot_renders_report_curve() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.json");
    fs::write(&report, sample_report()).unwrap();
    let out = dir.path().join("curve.svg");

    let mut cmd = Command::cargo_bin("delta-dash").unwrap();
    cmd.args(["plot", "--show-diff", "--report"])
        .arg(&report)
        .arg("--out")
        .arg(&out);
    cmd.assert().success();
    assert!(fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn plot_rejects_out_of_range_index() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.json");
    fs::write(&report, sample_report()).unwrap();

    let mut cmd = Command::cargo_bin("delta-dash").unwrap();
    cmd.args(["plot", "--index", "7", "--report"])
        .arg(&report)
        .arg("--out")
        .arg(dir.path().join("x.svg"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn delta_prints_per_curve_deltas_and_slider_limit() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.json");
    fs::write(&report, sample_report()).unwrap();

    let mut cmd = Command::cargo_bin("delta-dash").unwrap();
    cmd.args(["delta", "--report"]).arg(&report);
    cmd.assert()
        .success()
        // max |1 - ref/now| over the first curve: |1 - 20/15| = 1/3 -> 33.333%
        .stdout(predicate::str::contains("33.333%"))
        .stdout(predicate::str::contains("no reference data"))
        .stdout(predicate::str::contains("suggested slider limit: 34"));
}
