use predicates::prelude::*;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::cargo_bin_cmd!("birthdays");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn exact_prints_probability() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("birthdays");
    cmd.args(["exact", "-n", "23"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("among 23 people: 0.507297"));
}

#[test]
fn exact_rejects_empty_calendar() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("birthdays");
    cmd.args(["exact", "-n", "23", "--calendar-days", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("calendar must have at least one day"));
}

#[test]
fn shared_prints_report_with_exact_value() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("birthdays");
    cmd.args(["shared", "-n", "23", "-t", "2000", "-r", "3", "--seed", "1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Experiment: shared"))
        .stdout(predicate::str::contains("Exact: 0.507297"))
        .stdout(predicate::str::contains("Mean:"));
}

#[test]
fn consecutive_is_reproducible_with_seed() {
    let run = || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("birthdays");
        cmd.args([
            "consecutive", "-n", "77", "-m", "3", "-t", "1000", "-r", "2", "--seed", "8",
        ]);
        let output = cmd.output().unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn consecutive_rejects_zero_run_length() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("birthdays");
    cmd.args(["consecutive", "-n", "77", "-m", "0", "-t", "10"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("run length must be between 1 and 365"));
}

#[test]
fn shared_rejects_zero_trials() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("birthdays");
    cmd.args(["shared", "-n", "23", "-t", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("trials must be greater than zero"));
}

#[test]
fn compare_prints_table() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("birthdays");
    cmd.args([
        "compare", "--from", "20", "--to", "25", "--step", "5", "-t", "500", "--seed", "4",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("People | Exact | Simulated | Difference"))
        .stdout(predicate::str::contains("20 | 0.4114"))
        .stdout(predicate::str::contains("25 | 0.5687"));
}
