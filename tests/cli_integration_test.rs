// Black-box CLI tests: run the binary against real temp files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_export(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_bare_invocation_shows_usage_overview() {
    let mut cmd = Command::cargo_bin("flowmetrics").unwrap();

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("FlowMetrics"))
        .stdout(predicate::str::contains("flowmetrics compute"))
        .stdout(predicate::str::contains("Key, Date of change, Status, Status [new]"));
}

#[test]
fn test_compute_over_csv_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "export.csv",
        "Key,Date of change,Status,Status [new]\n\
         PROJ-1,2024-01-01,To Do,In Progress\n\
         PROJ-1,2024-01-05,In Progress,Done\n",
    );

    let mut cmd = Command::cargo_bin("flowmetrics").unwrap();
    cmd.arg("compute").arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("RESULTS"))
        .stdout(predicate::str::contains("PROJ-1"))
        .stdout(predicate::str::contains("Cycle Time"))
        .stdout(predicate::str::contains("Unique status values found"))
        .stdout(predicate::str::contains("IN PROGRESS"));
}

#[test]
fn test_compute_fails_on_missing_column() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "export.csv",
        "Key,Date of change,Status\nPROJ-1,2024-01-01,To Do\n",
    );

    let mut cmd = Command::cargo_bin("flowmetrics").unwrap();
    cmd.arg("compute").arg(&input);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing required columns"))
        .stderr(predicate::str::contains("status [new]"));
}

#[test]
fn test_compute_rejects_unknown_timezone() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "export.csv",
        "Key,Date of change,Status,Status [new]\nPROJ-1,2024-01-01,To Do,Done\n",
    );

    let mut cmd = Command::cargo_bin("flowmetrics").unwrap();
    cmd.arg("compute")
        .arg(&input)
        .arg("--timezone")
        .arg("Mars/Olympus_Mons");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown timezone"));
}

#[test]
fn test_compute_with_custom_aliases() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "export.csv",
        "Key,Date of change,Status,Status [new]\n\
         PROJ-2,2024-01-01,To Do,WIP\n\
         PROJ-2,2024-01-03,WIP,Shipped\n",
    );

    let mut cmd = Command::cargo_bin("flowmetrics").unwrap();
    cmd.arg("compute")
        .arg(&input)
        .arg("--in-progress")
        .arg("WIP")
        .arg("--done")
        .arg("SHIPPED");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PROJ-2"))
        .stdout(predicate::str::contains("Cycle Time"));
}

#[test]
fn test_compute_writes_excel_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "export.csv",
        "Key,Date of change,Status,Status [new]\n\
         PROJ-1,2024-01-01,To Do,In Progress\n\
         PROJ-1,2024-01-05,In Progress,Done\n",
    );
    let output = dir.path().join("results.xlsx");

    let mut cmd = Command::cargo_bin("flowmetrics").unwrap();
    cmd.arg("compute").arg(&input).arg("-o").arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(output.exists());
    assert!(std::fs::metadata(&output).unwrap().len() > 0);
}

#[test]
fn test_statuses_subcommand_lists_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(
        &dir,
        "export.csv",
        "Key,Date of change,Status,Status [new]\n\
         PROJ-1,2024-01-01,backlog,In Progress\n\
         PROJ-1,not a date,Limbo,Weird\n",
    );

    let mut cmd = Command::cargo_bin("flowmetrics").unwrap();
    cmd.arg("statuses").arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("BACKLOG"))
        .stdout(predicate::str::contains("IN PROGRESS"))
        .stdout(predicate::str::contains("LIMBO").not());
}

#[test]
fn test_unsupported_extension_is_a_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(&dir, "export.txt", "Key,Date of change,Status,Status [new]\n");

    let mut cmd = Command::cargo_bin("flowmetrics").unwrap();
    cmd.arg("compute").arg(&input);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}
