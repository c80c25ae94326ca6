//! Integration tests for the lettergreep binary.

use assert_cmd::Command;
use predicates::prelude::*;

const FIXTURE: &str = "\\patterns{hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n}\n\
                       \\hyphenation{ta-ble}";

/// Temporary language directory with the test fixture patterns.
fn language_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("hyph-test.tex"), FIXTURE).expect("fixture written");
    dir
}

fn lettergreep() -> Command {
    Command::cargo_bin("lettergreep").expect("binary built")
}

#[test]
fn test_text_command() {
    let dir = language_dir();
    lettergreep()
        .args(["text", "a hyphenation"])
        .args(["--language", "test", "--hyphen", "dash"])
        .arg("--language-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a hy-phen-ation"));
}

#[test]
fn test_text_command_reads_stdin() {
    let dir = language_dir();
    lettergreep()
        .args(["text", "--language", "test", "--hyphen", "dash"])
        .arg("--language-dir")
        .arg(dir.path())
        .write_stdin("one table")
        .assert()
        .success()
        .stdout(predicate::str::contains("one ta-ble"));
}

#[test]
fn test_text_command_custom_marker() {
    let dir = language_dir();
    lettergreep()
        .args(["text", "hyphenation", "--language", "test", "--hyphen", "·"])
        .arg("--language-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hy·phen·ation"));
}

#[test]
fn test_html_command_with_exclude() {
    let dir = language_dir();
    lettergreep()
        .args(["html", "<p>hyphenation <code>hyphenation</code></p>"])
        .args(["--language", "test", "--hyphen", "dash", "--exclude", "code"])
        .arg("--language-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hy-phen-ation"))
        .stdout(predicate::str::contains("<code>hyphenation</code>"));
}

#[test]
fn test_html_command_writes_output_file() {
    let dir = language_dir();
    let out = dir.path().join("out.html");
    lettergreep()
        .args(["html", "<p>hyphenation</p>"])
        .args(["--language", "test", "--hyphen", "dash"])
        .arg("--language-dir")
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();
    let written = std::fs::read_to_string(&out).expect("output written");
    assert!(written.contains("hy-phen-ation"), "got: {written}");
}

#[test]
fn test_stats_command() {
    let dir = language_dir();
    lettergreep()
        .args(["stats", "a table of hyphenation", "--language", "test"])
        .arg("--language-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Words: 4"))
        .stdout(predicate::str::contains("Syllables: 7"))
        .stdout(predicate::str::contains("Polysyllables: 1"));
}

#[test]
fn test_unknown_language_fails() {
    let dir = language_dir();
    lettergreep()
        .args(["text", "anything", "--language", "nope"])
        .arg("--language-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn test_invalid_language_name_fails() {
    let dir = language_dir();
    lettergreep()
        .args(["text", "anything", "--language", "../escape"])
        .arg("--language-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language name"));
}

#[test]
fn test_cache_dir_is_populated() {
    let dir = language_dir();
    let cache = tempfile::tempdir().expect("tempdir");
    lettergreep()
        .args(["text", "hyphenation", "--language", "test"])
        .arg("--language-dir")
        .arg(dir.path())
        .arg("--cache-dir")
        .arg(cache.path())
        .assert()
        .success();
    assert!(cache.path().join("lettergreep.test.json").is_file());
}
