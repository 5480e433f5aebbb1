use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_sourcer_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("sourcer")
}

const NOTEBOOK: &str = "https://notebooklm.google.com/notebook/abc123";

// Every test pins --chrome-path to a bogus binary so nothing here can launch
// a real browser; the assertions only exercise the pre-browser failure paths.

#[test]
fn test_missing_links_file_is_reported() {
    let mut cmd = Command::new(get_sourcer_bin());
    cmd.arg("--notebook")
        .arg(NOTEBOOK)
        .arg("--links-file")
        .arg("/nonexistent/links.txt")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read links file"));
}

#[test]
fn test_empty_links_file_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "\n   \n\t").unwrap();

    let mut cmd = Command::new(get_sourcer_bin());
    cmd.arg("--notebook")
        .arg(NOTEBOOK)
        .arg("--links-file")
        .arg(file.path())
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No links found"));
}

#[test]
fn test_invalid_notebook_url_is_reported() {
    let mut cmd = Command::new(get_sourcer_bin());
    cmd.arg("--notebook")
        .arg("ht tp://not a url")
        .arg("--links")
        .arg("https://example.com")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid notebook URL"));
}

#[test]
fn test_add_fails_without_chrome() {
    let mut cmd = Command::new(get_sourcer_bin());
    cmd.arg("--notebook")
        .arg(NOTEBOOK)
        .arg("--links")
        .arg("https://example.com")
        .arg("--chrome-path")
        .arg("/nonexistent/chrome");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Chrome not found"));
}
