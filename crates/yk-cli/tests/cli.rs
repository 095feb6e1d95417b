//! Integration tests for the yk CLI binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn yolk() -> Command {
    Command::cargo_bin("yolk").unwrap()
}

fn play(stdin: &str) -> assert_cmd::assert::Assert {
    yolk()
        .args([
            "play",
            "--fast",
            "--no-color",
            "--seed",
            "2024",
            "--scenario",
            "1",
            "--name",
            "Hero",
        ])
        .write_stdin(stdin)
        .assert()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_lands_in_capital_city() {
    play("quit\n")
        .success()
        .stdout(predicate::str::contains("Welcome to the Capital City of Yolkaris!"))
        .stdout(predicate::str::contains("Good luck, Hero."))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_blocks_moves_off_the_edge() {
    play("west\nquit\n")
        .success()
        .stdout(predicate::str::contains(
            "You can't go west. That is the edge of Yolkaris.",
        ));
}

#[test]
fn play_help_lists_commands() {
    play("help\nquit\n")
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("inventory"));
}

#[test]
fn play_suggests_close_commands() {
    play("serch\nquit\n")
        .success()
        .stdout(predicate::str::contains("unknown command: serch"))
        .stdout(predicate::str::contains("Did you mean 'search'?"));
}

#[test]
fn play_map_shows_player() {
    play("map\nquit\n")
        .success()
        .stdout(predicate::str::contains("Map of Yolkaris"))
        .stdout(predicate::str::contains("P = you"));
}

#[test]
fn play_stats_shows_starting_health() {
    play("stats\nquit\n")
        .success()
        .stdout(predicate::str::contains("Hero"))
        .stdout(predicate::str::contains("100"));
}

#[test]
fn end_of_input_exits_cleanly() {
    play("map\n").success();
}

#[test]
fn asks_for_scenario_and_name() {
    yolk()
        .args(["play", "--fast", "--no-color", "--seed", "7"])
        .write_stdin("3\n1\nab\nNova\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("invalid name 'ab'"))
        .stdout(predicate::str::contains("Good luck, Nova."));
}

#[test]
fn preset_invalid_name_fails() {
    yolk()
        .args(["play", "--fast", "--scenario", "1", "--name", "ab"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid name 'ab'"));
}

#[test]
fn unknown_scenario_fails() {
    yolk()
        .args(["play", "--fast", "--scenario", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scenario: 9"));
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

#[test]
fn export_prints_json() {
    let output = yolk().args(["export", "2"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["scenario"]["number"], 2);
    let names: Vec<&str> = json["planets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Yolkaris", "Mystara", "Luminara"]);
}

#[test]
fn export_omits_runtime_state() {
    yolk()
        .args(["export", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Capital City"))
        .stdout(predicate::str::contains("visited").not())
        .stdout(predicate::str::contains("placement").not());
}

#[test]
fn export_writes_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scenario1.json");
    yolk()
        .args(["export", "1", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let content = fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["planets"].as_array().unwrap().len(), 1);
}

#[test]
fn export_unknown_scenario_fails() {
    yolk()
        .args(["export", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scenario"));
}
