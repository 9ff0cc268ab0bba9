use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn shared_writes_histogram_png() {
    let temp = assert_fs::TempDir::new().unwrap();
    let histogram = temp.child("estimates.png");
    let histogram_arg = histogram.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("birthdays");
    cmd.args([
        "shared",
        "-n",
        "23",
        "-t",
        "500",
        "-r",
        "8",
        "--seed",
        "3",
        "--histogram",
        &histogram_arg,
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Estimate histogram written to"));

    let metadata = std::fs::metadata(histogram.path()).unwrap();
    assert!(metadata.len() > 0);
}
