use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn krishimitra() -> Command {
    let mut cmd = Command::cargo_bin("krishimitra").expect("binary built");
    cmd.env("KRISHIMITRA_REGION_PROVIDER", "canned")
        .env("KRISHIMITRA_CANNED_LATENCY_MS", "0")
        .env("KRISHIMITRA_LOG_LEVEL", "error");
    cmd
}

// About 45 m x 45 m near Nashik
const PLOT: [&str; 4] = [
    "19.997297,73.789585",
    "19.997297,73.790015",
    "19.997703,73.790015",
    "19.997703,73.789585",
];

fn with_vertices<'a>(cmd: &'a mut Command, vertices: &[&str]) -> &'a mut Command {
    for vertex in vertices {
        cmd.args(["--vertex", vertex]);
    }
    cmd
}

#[test]
fn area_reports_half_acre_plot() {
    let mut cmd = krishimitra();
    cmd.arg("area");
    with_vertices(&mut cmd, &PLOT)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.49").or(predicate::str::starts_with("0.50")));
}

#[test]
fn area_of_two_points_is_zero() {
    let mut cmd = krishimitra();
    cmd.arg("area");
    with_vertices(&mut cmd, &PLOT[..2])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0.0000 acres"));
}

#[test]
fn area_rejects_bad_vertex() {
    krishimitra()
        .args(["area", "--vertex", "95.0,73.0"])
        .assert()
        .failure();
}

#[test]
fn fences_lists_catalogue() {
    krishimitra()
        .arg("fences")
        .assert()
        .success()
        .stdout(predicate::str::contains("North Field (Field A)"))
        .stdout(predicate::str::contains("12.5 Acres - Current crop: Wheat"))
        .stdout(predicate::str::contains("Current crop: N/A"));
}

#[test]
fn simulate_fills_both_panels() {
    let mut cmd = krishimitra();
    cmd.arg("simulate");
    with_vertices(&mut cmd, &PLOT)
        .args(["--name", "Test Plot", "--crop", "Onion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first vertex"))
        .stdout(predicate::str::contains("area selected"))
        .stdout(predicate::str::contains("high clay content"))
        .stdout(predicate::str::contains("built-up area"))
        .stdout(predicate::str::contains("Current crop: Onion"));
}

#[test]
fn simulate_delete_restores_placeholders() {
    let mut cmd = krishimitra();
    cmd.args(["simulate", "--delete"]);
    with_vertices(&mut cmd, &PLOT)
        .assert()
        .success()
        .stdout(predicate::str::contains("clear"))
        .stdout(predicate::str::contains(
            "Draw a polygon on the map to see land use data for the area.",
        ));
}

#[test]
fn simulate_rejects_incomplete_ring() {
    let mut cmd = krishimitra();
    cmd.arg("simulate");
    with_vertices(&mut cmd, &PLOT[..2]).assert().failure();
}

#[test]
fn help_works_with_bad_config() {
    krishimitra()
        .env("KRISHIMITRA_MAP_LAT", "not-a-number")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"));
}

#[test]
fn bad_config_fails_commands() {
    krishimitra()
        .env("KRISHIMITRA_MAP_LAT", "not-a-number")
        .arg("fences")
        .assert()
        .failure();
}
