//! Integration tests for the vending machine CLI.
//!
//! These tests run the actual binary with scripted stdin and check its output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Run the binary with the given stdin and optional arguments, returning stdout
fn run_session(args: &[&str], input: &str) -> String {
    let mut cmd = Command::cargo_bin("vending-machine").unwrap();
    let assert = cmd.args(args).write_stdin(input).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_catalog_menu() {
    let output = run_session(&[], "f\n");
    assert!(output.contains("Id [1], Item name: Product 1, Item price: 0.55, Available quantity: 10"));
    assert!(output.contains("Id [2], Item name: Product 2, Item price: 0.70, Available quantity: 10"));
    assert!(output.contains("Id [3], Item name: Product 3, Item price: 0.75, Available quantity: 10"));
}

#[test]
fn test_full_purchase_session() {
    let output = run_session(&[], "q\nq\nq\nq\nf\n1\n1\ne\n");
    assert!(output.contains("Current balance: $1.00"));
    assert!(output.contains("Dispensing Product 1 (Quantity: 1)"));
    assert!(output.contains("Returning back $0.45"));
    assert!(output.contains("Exit the vending machine console app..."));
}

#[test]
fn test_cap_rejection_keeps_session_open() {
    let output = run_session(&[], "q\nq\nq\nq\nd\nr\ne\n");
    assert!(output.contains("Adding fund fails! Exceeding max allowed balance: $1.00"));
    assert!(output.contains("Refunding $1.00"));
}

#[test]
fn test_custom_catalog_out_of_stock() {
    let file = catalog_file("id,name,price,stock\n7,Gum,0.10,0\n8,Mints,0.20,3\n");
    let path = file.path().to_str().unwrap();

    let output = run_session(&[path], "q\nf\n7\n1\ne\n");
    assert!(output.contains("Id [7], Item name: Gum, Item price: 0.10, Available quantity: 0"));
    assert!(output.contains("Not enough inventory for Gum"));
    assert!(output.contains("Refunding $0.25"));
}

#[test]
fn test_invalid_catalog_fails() {
    let file = catalog_file("id,name,price,stock\n1,Gum,0.10,1\n1,Mints,0.20,3\n");
    let path = file.path().to_str().unwrap();

    let mut cmd = Command::cargo_bin("vending-machine").unwrap();
    cmd.arg(path)
        .write_stdin("e\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate product ID 1"));
}

#[test]
fn test_missing_catalog_file_error() {
    let mut cmd = Command::cargo_bin("vending-machine").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
