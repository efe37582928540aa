//! E2E tests for the CLI surface

use std::process::Command;

fn plansim(args: &[&str]) -> std::process::Output {
    Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

const SCENARIO_A: &[&str] = &[
    "--no-settings",
    "--daily-count",
    "3",
    "--price",
    "12000",
    "--work-days",
    "15",
    "--monthly-target",
    "500000",
    "--living-expenses",
    "200000",
    "--savings-target",
    "3000000",
];

/// Summary output carries the headline figures and the rank
#[test]
fn summary_text_output() {
    let output = plansim(&[&["summary"][..], SCENARIO_A].concat());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("INCOME PLAN SUMMARY"));
    assert!(stdout.contains("¥540,000"));
    assert!(stdout.contains("+¥40,000"));
    assert!(stdout.contains("108.0%"));
    assert!(stdout.contains("Bronze"));
    assert!(stdout.contains("9 month(s)"));
}

/// Summary command with JSON output
#[test]
fn summary_json_output() {
    let output = plansim(&[&["summary", "--json"][..], SCENARIO_A].concat());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("\"monthly_income\": \"540000\""));
    assert!(stdout.contains("\"achievement_rate_pct\": \"108.0\""));
    assert!(stdout.contains("\"tier\": \"Bronze\""));
    assert!(stdout.contains("\"savings_months\": 9"));
}

/// Validate exits non-zero when every field is at its zero default
#[test]
fn validate_flags_zero_inputs() {
    let output = plansim(&["validate", "--no-settings"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(!output.status.success());
    assert!(stdout.contains("5 issue(s) found"));
    assert!(stdout.contains("daily_count"));
}

/// Validate passes clean inputs
#[test]
fn validate_accepts_complete_inputs() {
    let output = plansim(&[&["validate"][..], SCENARIO_A].concat());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("No issues found"));
}

/// Inputs survive an encode/decode round trip through a share link
#[test]
fn link_round_trip() {
    let encoded = plansim(&[&["link", "encode"][..], SCENARIO_A].concat());
    assert!(encoded.status.success(), "Command failed: {:?}", encoded);
    let query = String::from_utf8_lossy(&encoded.stdout).trim().to_string();
    assert!(query.contains("daily=3"));
    assert!(query.contains("price=12000"));

    let decoded = plansim(&["link", "decode", &query]);
    assert!(decoded.status.success(), "Command failed: {:?}", decoded);
    let stdout = String::from_utf8_lossy(&decoded.stdout);
    assert!(stdout.contains("\"daily_count\": 3"));
    assert!(stdout.contains("\"work_days\": 15"));
}

/// A share link feeds straight into summary
#[test]
fn summary_from_link() {
    let output = plansim(&[
        "summary",
        "--no-settings",
        "--link",
        "daily=1&price=10000&days=10&target=500000",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("¥100,000"));
    assert!(stdout.contains("20.0%"));
    assert!(stdout.contains("40 more service(s)"));
}

/// Projection shows twelve months and the five-year outlook
#[test]
fn projection_tables() {
    let output = plansim(&[&["projection"][..], SCENARIO_A].concat());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("MONTHLY PROJECTION"));
    assert!(stdout.contains("Jan"));
    assert!(stdout.contains("Dec"));
    assert!(stdout.contains("CUMULATIVE OUTLOOK (5 years)"));
    assert!(stdout.contains("¥32,400,000"));
}

/// Schema command prints the CSV header
#[test]
fn schema_csv_header() {
    let output = plansim(&["schema", "csv-header"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout
        .trim()
        .starts_with("daily_count,price_per_service,work_days"));
}

/// Export to stdout produces the versioned saved-plan document
#[test]
fn export_json_to_stdout() {
    let output = plansim(&[&["export", "--stdout"][..], SCENARIO_A].concat());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.contains("\"version\": \"1.0\""));
    assert!(stdout.contains("\"inputs\""));
    assert!(stdout.contains("\"results\""));
    assert!(stdout.contains("\"breakdown\""));
}
