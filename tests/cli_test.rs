use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

mod common;

use common::{fixture_catalog, write_catalog};

fn cli() -> Command {
    Command::cargo_bin("book-catalog").unwrap()
}

#[test]
fn test_summary_json() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_catalog(dir.path(), "books.json", &fixture_catalog())?;

    let assert = cli()
        .args(["--input", input.to_str().unwrap(), "summary", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("averagePages"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["summary"]["averagePages"], 528.125);
    assert_eq!(value["summary"]["withMostPages"]["title"], "The Stand");
    Ok(())
}

#[test]
fn test_audit_json_reports_duplicates() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_catalog(dir.path(), "books.json", &fixture_catalog())?;

    cli()
        .args(["--input", input.to_str().unwrap(), "audit", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("J.K. Rowling"))
        .stdout(predicate::str::contains("To Kill a Mockingbird"));
    Ok(())
}

#[test]
fn test_recent_respects_limit() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_catalog(dir.path(), "books.json", &fixture_catalog())?;

    cli()
        .args([
            "--input",
            input.to_str().unwrap(),
            "recent",
            "--limit",
            "2",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Help"))
        .stdout(predicate::str::contains("Harry Potter and the Deathly Hallows"))
        .stdout(predicate::str::contains("Life of Pi").not());
    Ok(())
}

#[test]
fn test_export_writes_both_files() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let input = write_catalog(dir.path(), "books.json", &fixture_catalog())?;
    let json_path = dir.path().join("out.json");
    let csv_path = dir.path().join("out.csv");

    cli()
        .args([
            "--input",
            input.to_str().unwrap(),
            "export",
            "--json-path",
            json_path.to_str().unwrap(),
            "--csv-path",
            csv_path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    assert!(json_path.exists());
    assert!(csv_path.exists());
    Ok(())
}

#[test]
fn test_missing_input_fails() {
    cli()
        .args(["--input", "does-not-exist.json", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read catalog file"));
}
