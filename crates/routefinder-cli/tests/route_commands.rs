use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
        .canonicalize()
        .expect("fixture present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("routefinder-cli");
    cmd.env_remove("ROUTEFINDER_GRAPH").env("RUST_LOG", "error");
    cmd
}

fn with_graph(name: &str) -> Command {
    let mut cmd = cli();
    cmd.arg("--graph").arg(fixture(name));
    cmd
}

#[test]
fn ucs_route_is_printed() {
    with_graph("cities.txt")
        .args(["route", "--from", "Jakarta", "--to", "Semarang"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route: Jakarta -> Semarang (2 hops, algorithm: ucs)",
        ))
        .stdout(predicate::str::contains("Total cost: 460.00"));
}

#[test]
fn a_star_algorithm_is_supported() {
    with_graph("cities.txt")
        .args(["route", "--from", "Bogor", "--to", "Cirebon", "--algorithm", "a-star"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: a-star"))
        .stdout(predicate::str::contains("Total cost: 255.00"));
}

#[test]
fn basic_format_outputs_minimal_path() {
    with_graph("square.txt")
        .args(["--format", "basic", "route", "--from", "B", "--to", "D"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("+ B\n"))
        .stdout(predicate::str::ends_with("- D\n"));
}

#[test]
fn json_format_is_machine_readable() {
    let output = with_graph("square.txt")
        .args(["route", "--from", "A", "--to", "C", "--format", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["algorithm"], "ucs");
    assert_eq!(value["cost"], 3.0);
    assert_eq!(value["steps"][1]["name"], "C");
}

#[test]
fn unknown_vertex_error_is_friendly() {
    with_graph("cities.txt")
        .args(["route", "--from", "Jakarta", "--to", "Bandnug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown vertex: Bandnug"))
        .stderr(predicate::str::contains("Did you mean 'Bandung'?"));
}

#[test]
fn unreachable_goal_fails() {
    with_graph("islands.txt")
        .args(["route", "--from", "A", "--to", "C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found between A and C"));
}

#[test]
fn invalid_algorithm_is_rejected() {
    with_graph("square.txt")
        .args(["route", "--from", "A", "--to", "C", "--algorithm", "bfs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bfs"));
}

#[test]
fn duplicate_vertex_file_is_reported() {
    with_graph("duplicate.txt")
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load graph"))
        .stderr(predicate::str::contains("duplicate vertex name"));
}

#[test]
fn show_prints_matrix() {
    with_graph("islands.txt")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3\nA 0 0\nB 1 0\nC 5 5\n0 1 0\n1 0 0\n0 0 0\n"));
}

#[test]
fn graph_path_falls_back_to_environment() {
    cli()
        .env("ROUTEFINDER_GRAPH", fixture("square.txt"))
        .args(["--format", "basic", "show"])
        .assert()
        .success()
        .stdout("A\nB\nC\nD\n");
}

#[test]
fn missing_graph_argument_is_an_error() {
    cli()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no graph file given"));
}

#[test]
fn export_round_trips_through_json() {
    let temp = tempdir().expect("create temp dir");
    let exported = temp.path().join("square.json");

    with_graph("square.txt")
        .args(["export", "--output"])
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 vertices and 10 edges"));

    let contents = fs::read_to_string(&exported).expect("export written");
    assert!(contents.contains("\"vertices\""));

    cli()
        .arg("--graph")
        .arg(&exported)
        .args(["route", "--from", "B", "--to", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: 4.00"));
}
