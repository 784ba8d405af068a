use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/test_data.json")
        .canonicalize()
        .expect("fixture network present")
}

fn supplement_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/supplement.json")
        .canonicalize()
        .expect("supplement network present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("routenet");
    cmd.env("RUST_LOG", "error").env_remove("ROUTENET_DATA");
    cmd
}

fn with_fixture() -> Command {
    let mut cmd = cli();
    cmd.arg("--data").arg(fixture_path());
    cmd
}

#[test]
fn cities_lists_codes_in_order() {
    with_fixture()
        .arg("cities")
        .assert()
        .success()
        .stdout("LIM  Lima\nMEX  Mexico City\nSCL  Santiago\n");
}

#[test]
fn city_shows_details_and_destinations() {
    with_fixture()
        .args(["city", "SCL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Santiago (SCL)"))
        .stdout(predicate::str::contains("Coordinates: 33S 71W"))
        .stdout(predicate::str::contains("- LIM (2453)"))
        .stdout(predicate::str::contains("- MEX (4800)"));
}

#[test]
fn unknown_city_fails() {
    with_fixture()
        .args(["city", "XXX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown city code: XXX"));
}

#[test]
fn stats_reports_extremes_and_averages() {
    with_fixture()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Longest flight: LIM -> MEX (24530), MEX -> LIM (24530)",
        ))
        .stdout(predicate::str::contains("Average distance: 10594.33"))
        .stdout(predicate::str::contains("Biggest city: MEX"))
        .stdout(predicate::str::contains("Smallest city: SCL"))
        .stdout(predicate::str::contains("Average city size: 12816666.67"))
        .stdout(predicate::str::contains("  South America: LIM, SCL"))
        .stdout(predicate::str::contains("Hub cities: LIM, MEX, SCL"));
}

#[test]
fn route_prints_cost_and_time() {
    with_fixture()
        .args(["route", "MEX", "SCL", "LIM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 2415.90"))
        .stdout(predicate::str::contains("Total time: 12.57"));
}

#[test]
fn route_json_output() {
    let output = with_fixture()
        .args(["route", "MEX", "SCL", "LIM", "--format", "json"])
        .output()
        .expect("run routenet");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["cost"], 2415.9);
    assert_eq!(value["time"], 12.57);
    assert_eq!(value["hops"].as_array().map(Vec::len), Some(2));
}

#[test]
fn invalid_route_fails() {
    with_fixture()
        .args(["route", "MEX", "CMI"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid itinerary"));
}

#[test]
fn path_prefers_cheaper_connection() {
    with_fixture()
        .args(["path", "--from", "MEX", "--to", "LIM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("distance 7253"))
        .stdout(predicate::str::contains("Itinerary: MEX -> SCL -> LIM"));
}

#[test]
fn merged_files_are_searchable() {
    with_fixture()
        .arg("--data")
        .arg(supplement_path())
        .args(["path", "--from", "CCU", "--to", "SCL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CCU -> CMI -> MEX -> SCL"));
}

#[test]
fn environment_variable_selects_data() {
    cli()
        .env("ROUTENET_DATA", fixture_path())
        .arg("map-url")
        .assert()
        .success()
        .stdout(
            "http://www.gcmap.com/mapui?P=LIM-MEX, LIM-SCL, MEX-LIM, MEX-SCL, SCL-LIM, SCL-MEX, \n",
        );
}

#[test]
fn missing_data_file_fails() {
    let temp = tempdir().expect("create temp dir");
    cli()
        .arg("--data")
        .arg(temp.path().join("absent.json"))
        .arg("cities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn save_writes_canonical_file() {
    let temp = tempdir().expect("create temp dir");
    let target = temp.path().join("saved.json");

    with_fixture()
        .arg("save")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 3 cities and 6 flights"));

    let saved = fs::read_to_string(&target).expect("saved file");
    let value: serde_json::Value = serde_json::from_str(&saved).expect("valid json");
    assert_eq!(value["metros"][0]["code"], "LIM");
    assert_eq!(value["routes"].as_array().map(Vec::len), Some(6));

    cli()
        .arg("--data")
        .arg(&target)
        .arg("cities")
        .assert()
        .success()
        .stdout("LIM  Lima\nMEX  Mexico City\nSCL  Santiago\n");
}

#[test]
fn data_flag_is_accepted_after_subcommand() {
    cli()
        .arg("cities")
        .arg("--data")
        .arg(fixture_path())
        .assert()
        .success()
        .stdout("LIM  Lima\nMEX  Mexico City\nSCL  Santiago\n");
}

#[test]
fn unconnected_cities_report_no_route() {
    let temp = tempdir().expect("create temp dir");
    let island = temp.path().join("island.json");
    fs::write(
        &island,
        r#"{"metros": [{"code": "HNL", "name": "Honolulu", "country": "US",
            "continent": "North America", "timezone": -10,
            "coordinates": {"N": 21, "W": 158}, "population": 1000000, "region": 1}],
            "routes": []}"#,
    )
    .expect("write island network");

    with_fixture()
        .arg("--data")
        .arg(&island)
        .args(["path", "--from", "MEX", "--to", "HNL"])
        .assert()
        .success()
        .stdout("No route from MEX to HNL\n");
}
