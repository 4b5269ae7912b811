use assert_cmd::Command;
use predicates::prelude::*;

const NOW: &str = "2025-10-14T23:28:58Z";
const IMPACT: &str = "2026-01-12T23:28:58Z";

fn deflect() -> Command {
    let mut cmd = Command::cargo_bin("deflect").expect("deflect binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn design<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["--now", NOW, "--impact", IMPACT];
    args.extend_from_slice(extra);
    args
}

#[test]
fn catalog_lists_repository_configs() {
    let configs = concat!(env!("CARGO_MANIFEST_DIR"), "/../../configs");
    deflect()
        .args(["catalog", "--catalog", configs])
        .assert()
        .success()
        .stdout(predicate::str::contains("falcon_heavy"))
        .stdout(predicate::str::contains("Cost: $150M | Max Payload: 26,700 kg"))
        .stdout(predicate::str::contains("Low-Energy Transfer"));
}

#[test]
fn assess_prints_ready_dashboard() {
    deflect()
        .arg("assess")
        .args(design(&["--mass", "1000", "--trajectory", "balanced"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget         : $1.80 B remaining"))
        .stdout(predicate::str::contains("Mass           : 1,500 / 26,700 kg"))
        .stdout(predicate::str::contains("Prep time      : 30 days"))
        .stdout(predicate::str::contains("Time to impact : 90:00:00:00"))
        .stdout(predicate::str::contains("Status         : ready to launch"));
}

#[test]
fn probe_costs_budget_and_a_month() {
    deflect()
        .arg("assess")
        .args(design(&["--probe", "--mass", "1000", "--trajectory", "fast"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("$1.60 B remaining"))
        .stdout(predicate::str::contains("Time to impact : 60:00:00:00"));
}

#[test]
fn assess_json_reports_blocking_reason() {
    deflect()
        .arg("assess")
        .args(design(&[
            "--vehicle",
            "sls_block1",
            "--material",
            "tungsten",
            "--mass",
            "1000",
            "--trajectory",
            "fast",
            "--json",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"blocking_reason\": \"insufficient_budget\""))
        .stdout(predicate::str::contains("\"feasible\": false"))
        .stdout(predicate::str::contains("\"probe_launched\": false"))
        .stdout(predicate::str::contains("\"exhaust_velocity_m_s\""))
        .stdout(predicate::str::contains("\"status\": \"insufficient budget\""));
}

#[test]
fn sweep_writes_csv_rows_up_to_material_limit() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("sweep.csv");
    deflect()
        .arg("sweep")
        .args(design(&["--trajectory", "fast", "--step", "1000"]))
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 7, "header plus masses 0..=5000: {text}");
    assert!(lines[0].starts_with("impactor_mass_kg,"));
    assert!(lines[6].starts_with("5000,5500.0,21200.0,"));
}

#[test]
fn launch_request_contains_service_payload() {
    deflect()
        .arg("launch-request")
        .args(design(&["--mass", "1000", "--trajectory", "balanced"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"launchTimeISO\": \"2025-11-13T23:28:58Z\""))
        .stdout(predicate::str::contains("\"travel_time_days\": 45"))
        .stdout(predicate::str::contains("\"required_deltav\": 5000"));
}

#[test]
fn launch_request_refuses_infeasible_design() {
    deflect()
        .arg("launch-request")
        .args(design(&["--mass", "5000", "--trajectory", "balanced"]))
        .assert()
        .failure()
        .stderr(predicate::str::contains("launch window closed"));
}

#[test]
fn unknown_vehicle_is_an_error() {
    deflect()
        .arg("assess")
        .args(design(&["--vehicle", "saturn_v"]))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "launch vehicle 'saturn_v' not found in catalog",
        ));
}

#[test]
fn out_of_range_days_to_impact_is_rejected() {
    for days in ["1e9", "-5", "NaN"] {
        deflect()
            .arg("assess")
            .arg(format!("--days-to-impact={days}"))
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("--days-to-impact"));
    }
}
