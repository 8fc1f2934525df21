use std::process::Command;

fn run(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_bank-ledger"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn run_fixture(fixture: &str) -> (String, String, bool) {
    run(&[&format!("tests/fixtures/{fixture}")])
}

#[test]
fn valid_operations() {
    let (stdout, stderr, success) = run_fixture("valid.csv");

    assert!(success);
    assert!(stderr.is_empty());

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["account,name,balance", "2,Jane Smith,1300"]);
}

#[test]
fn errors_warn_but_do_not_block() {
    let (stdout, stderr, success) = run_fixture("with_errors.csv");

    assert!(success);
    assert!(stderr.contains("unrecognized operation type 'refund'"));
    assert!(stderr.contains("deposit missing amount"));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["account,name,balance", "1,Alice,125.5"]);
}

#[test]
fn missing_file_fails() {
    let (stdout, stderr, success) = run_fixture("nope.csv");

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("failed to open"));
}

#[test]
fn missing_argument_prints_usage() {
    let (_, stderr, success) = run(&[]);

    assert!(!success);
    assert!(stderr.contains("usage: bank-ledger"));
}

#[test]
fn invalid_amounts_are_rejected() {
    let (stdout, stderr, success) = run_fixture("bad_amounts.csv");

    assert!(success);
    assert!(stderr.contains("line 4: invalid amount: amount NaN is not a finite number"));
    assert!(stderr.contains("line 5: invalid amount: amount inf is not a finite number"));
    assert!(stderr.contains("line 6: invalid amount: amount 100000000000000000000 is out of range"));

    // Bob's overflowing deposit is skipped, his balance stays put
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "account,name,balance",
            "1,Alice,150",
            "2,Bob,900000000000000"
        ]
    );
}
