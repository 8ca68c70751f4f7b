use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn planner() -> Command {
    Command::cargo_bin("planner").expect("planner binary")
}

#[test]
fn equal_radii_need_no_manoeuvre() {
    planner()
        .args(["--no-prompt", "--r1", "7000000", "--r2", "7000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no manoeuvre needed"))
        .stdout(predicate::str::contains("Propellant Requirements").not());
}

#[test]
fn geo_quote_with_enough_budget_buys_selected_propellant() {
    planner()
        .args([
            "--no-prompt",
            "--r1",
            "6771000",
            "--r2",
            "42164000",
            "--dry-mass",
            "22800",
            "--budget",
            "300000",
            "--select",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ΔV1 = 2399.43 m/s"))
        .stdout(predicate::str::contains("[0] RP-1/LOX - cost $156712.60"))
        .stdout(predicate::str::contains("Selected        : CH4/LOX"))
        .stdout(predicate::str::contains("Remaining funds : $74177.59"));
}

#[test]
fn short_budget_lists_reachable_orbits_then_cancels() {
    planner()
        .args([
            "--no-prompt",
            "--r1",
            "6771000",
            "--r2",
            "42164000",
            "--dry-mass",
            "22800",
            "--budget",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maximum reachable orbit (R3)"))
        .stdout(predicate::str::contains("R3 ≈ 6771000.00 m"))
        .stdout(predicate::str::contains("Mission cancelled"));
}

#[test]
fn interactive_top_up_loop_reaches_the_target() {
    planner()
        .args(["--r1", "6771000", "--r2", "42164000"])
        .args(["--dry-mass", "22800"])
        .write_stdin("1\nmaybe\ny\n-5\n200000\n3\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer not recognised"))
        .stdout(predicate::str::contains("top-up must be greater than 0"))
        .stdout(predicate::str::contains("New budget: $200001.00"))
        .stdout(predicate::str::contains("Invalid selection"))
        .stdout(predicate::str::contains("Selected        : RP-1/LOX"));
}

#[test]
fn interactive_prompts_reject_out_of_range_radius() {
    planner()
        .args(["--dry-mass", "22800", "--budget", "1000000"])
        .write_stdin("abc\n100\n6771000\n6771000\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference orbit radii"))
        .stdout(predicate::str::contains("enter a number"))
        .stdout(predicate::str::contains("below the Earth radius"))
        .stdout(predicate::str::contains("no manoeuvre needed"));
}

#[test]
fn missing_value_without_prompting_is_an_error() {
    planner()
        .args(["--no-prompt", "--r1", "6771000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--r2 is required"));
}

#[test]
fn csv_output_has_one_row_per_propellant() {
    let output = planner()
        .args([
            "--no-prompt",
            "--format",
            "csv",
            "--r1",
            "6771000",
            "--r2",
            "42164000",
            "--dry-mass",
            "22800",
            "--budget",
            "1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 8, "{stdout}");
    assert!(lines[0].starts_with("index,propellant,isp_s"));
    assert!(lines[1].starts_with("0,RP-1/LOX,330.0"));
    assert!(lines[1].ends_with(",false,6771000.0"));
}

#[test]
fn scenario_file_drives_a_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.toml");
    fs::write(
        &path,
        "initial_radius_m = 6771000.0\n\
         target_radius_m = 42164000.0\n\
         dry_mass_kg = 22800.0\n\
         budget_usd = 100000.0\n\
         top_ups_usd = [60000.0]\n\
         selection = 0\n",
    )
    .unwrap();

    let output = planner()
        .args(["--no-prompt", "--format", "json", "--scenario"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["budget_usd"], 160_000.0);
    assert_eq!(report["assessment"]["status"], "affordable");
    assert_eq!(
        report["purchase"]["requirement"]["propellant"]["name"],
        "RP-1/LOX"
    );
    let requirements = report["quote"]["requirements"].as_array().unwrap();
    assert_eq!(requirements.len(), 7);
}
