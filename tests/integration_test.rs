//! Integration tests for the bank-records CLI.
//!
//! These tests run the actual binary against a copy of `tests/data/bank.json`.

use assert_cmd::Command;
use bank_records::{account, BankStore};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BOB: &str = "6060549811111111";
const ANN: &str = "6060549822222222";

/// Copies the fixture into a fresh temp dir and returns its path
fn fixture() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bank.json");
    fs::copy("tests/data/bank.json", &path).unwrap();
    (dir, path)
}

fn bank(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bank-records").unwrap();
    cmd.env_remove("BANK_DATA_FILE").arg("--data").arg(data);
    cmd
}

fn run_ok(data: &Path, args: &[&str]) -> String {
    let assert = bank(data).args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn balance_in_file(data: &Path, number: &str) -> String {
    let accounts = BankStore::new(data).load().unwrap();
    account::balance(&accounts[number], number).unwrap().to_string()
}

#[test]
fn test_list_sorted_by_balance() {
    let (_dir, data) = fixture();
    let output = run_ok(&data, &["list", "balance"]);

    let cid = output.find("Cid Moreau").unwrap();
    let bob = output.find("Bob Stone").unwrap();
    let ann = output.find("Ann Lee").unwrap();
    assert!(cid < bob && bob < ann);
    assert!(output.contains("Sorted by Balance"));
}

#[test]
fn test_list_defaults_to_full_name() {
    let (_dir, data) = fixture();
    let output = run_ok(&data, &["list"]);

    let ann = output.find("Ann Lee").unwrap();
    let bob = output.find("Bob Stone").unwrap();
    let cid = output.find("Cid Moreau").unwrap();
    assert!(ann < bob && bob < cid);
    assert!(output.contains("Sorted by Full Name"));
}

#[test]
fn test_list_by_creation_date() {
    let (_dir, data) = fixture();
    let output = run_ok(&data, &["list", "account_creation_date"]);

    let ann = output.find("2021-09-30").unwrap();
    let bob = output.find("2023-04-12").unwrap();
    let cid = output.find("2024-01-02").unwrap();
    assert!(ann < bob && bob < cid);
}

#[test]
fn test_search_ignores_case_and_spaces() {
    let (_dir, data) = fixture();
    bank(&data)
        .args(["search", "ANNLEE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full name:       Ann Lee"))
        .stdout(predicate::str::contains(ANN));
}

#[test]
fn test_search_by_city() {
    let (_dir, data) = fixture();
    bank(&data)
        .args(["search", "ly on", "city"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cid Moreau"));
}

#[test]
fn test_search_miss_is_not_an_error() {
    let (_dir, data) = fixture();
    bank(&data)
        .args(["search", "Nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found no one as Nobody"));
}

#[test]
fn test_transfer_updates_file() {
    let (_dir, data) = fixture();
    run_ok(&data, &["transfer", ANN, BOB, "100"]);

    assert_eq!(balance_in_file(&data, ANN), "100.50");
    assert_eq!(balance_in_file(&data, BOB), "150.00");
}

#[test]
fn test_transfer_insufficient_funds() {
    let (_dir, data) = fixture();
    bank(&data)
        .args(["transfer", BOB, ANN, "50.01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient account balance"));

    assert_eq!(balance_in_file(&data, BOB), "50.00");
}

#[test]
fn test_create_then_search() {
    let (_dir, data) = fixture();
    bank(&data)
        .args(["create", "Dee Ray", "Female", "Oslo", "5550104", "52", "Norway", "75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created account 60605498"));

    assert_eq!(BankStore::new(&data).load().unwrap().len(), 4);
    bank(&data)
        .args(["search", "dee ray"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Country:        Norway"));
}

#[test]
fn test_update_and_delete() {
    let (_dir, data) = fixture();
    run_ok(&data, &["update", BOB, "city", "York"]);
    bank(&data)
        .args(["show", BOB])
        .assert()
        .success()
        .stdout(predicate::str::contains("City:           York"));

    run_ok(&data, &["delete", BOB]);
    bank(&data)
        .args(["show", BOB])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Did not find any account"));
}

#[test]
fn test_export_csv() {
    let (_dir, data) = fixture();
    let output = run_ok(&data, &["export"]);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines[0],
        "account_number,full_name,account_creation_date,balance,gender,city,phone_number,age,country"
    );
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with(BOB));
    assert!(lines[2].starts_with(ANN));
}

#[test]
fn test_missing_data_file_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("absent.json");
    bank(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts to display"));
}

#[test]
fn test_data_file_from_environment() {
    let (_dir, data) = fixture();
    let mut cmd = Command::cargo_bin("bank-records").unwrap();
    cmd.env("BANK_DATA_FILE", &data)
        .args(["search", "cid moreau"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lyon"));
}

#[test]
fn test_malformed_data_file() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("bank.json");
    fs::write(&data, "[1, 2").unwrap();
    bank(&data)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Data file error"));
}

#[test]
fn test_missing_command_error() {
    let (_dir, data) = fixture();
    bank(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_field_error() {
    let (_dir, data) = fixture();
    bank(&data)
        .args(["list", "nickname"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown or non-editable field 'nickname'"));
}

#[test]
fn test_negative_transfer_rejected() {
    let (_dir, data) = fixture();
    bank(&data)
        .args(["transfer", ANN, BOB, "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    assert_eq!(balance_in_file(&data, ANN), "200.50");
}

#[test]
fn test_invalid_gender_error() {
    let (_dir, data) = fixture();
    bank(&data)
        .args(["create", "Dee", "F", "Oslo", "555", "40", "Norway", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid gender 'F'"));
}
