// Integration tests for the lendscore CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the lendscore binary.
fn lendscore() -> Command {
    Command::cargo_bin("lendscore").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    lendscore()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lendscore"));
}

#[test]
fn cli_help_flag() {
    lendscore()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("credit risk scoring"));
}

#[test]
fn assess_requires_applicant_fields() {
    lendscore()
        .arg("assess")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn assess_rejects_unknown_spending_category() {
    lendscore()
        .args([
            "assess",
            "--annual-income",
            "60000",
            "--loan-amount",
            "25000",
            "--spending",
            "lavish",
            "--credit-history-years",
            "3",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn assess_recommended_applicant_exits_zero() {
    lendscore()
        .args([
            "assess",
            "--annual-income",
            "60,000",
            "--loan-amount",
            "25,000",
            "--spending",
            "average",
            "--credit-history-years",
            "3",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Score: 710"))
        .stdout(predicate::str::contains("Recommendation: Approve"));
}

#[test]
fn assess_declined_applicant_exits_one() {
    lendscore()
        .args([
            "assess",
            "--annual-income",
            "20000",
            "--loan-amount",
            "25000",
            "--spending",
            "high-spending",
            "--credit-history-years",
            "1",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Score: 560"))
        .stdout(predicate::str::contains("Recommendation: Decline"));
}

#[test]
fn assess_zero_loan_exits_two() {
    lendscore()
        .args([
            "assess",
            "--annual-income",
            "60000",
            "--loan-amount",
            "0",
            "--spending",
            "average",
            "--credit-history-years",
            "3",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("loan-amount"));
}

#[test]
fn assess_non_numeric_income_exits_two() {
    lendscore()
        .args([
            "assess",
            "--annual-income",
            "plenty",
            "--loan-amount",
            "25000",
            "--spending",
            "average",
            "--credit-history-years",
            "3",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("annual-income"));
}

#[test]
fn bands_prints_tier_thresholds() {
    lendscore()
        .arg("bands")
        .assert()
        .success()
        .stdout(predicate::str::contains("740-850"))
        .stdout(predicate::str::contains("recommendation cutoff: 620"));
}
