//! End-to-end checks of the `travelbloom` binary against the bundled dataset
//! and small temporary catalogs.

use assert_cmd::Command;

fn travelbloom() -> Command {
    Command::cargo_bin("travelbloom").unwrap()
}

fn stdout_of(args: &[&str]) -> String {
    let output = travelbloom().args(args).output().unwrap();
    assert!(output.status.success(), "{args:?} failed: {output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn beaches_keyword_lists_beaches() {
    let out = stdout_of(&["search", "Beaches"]);
    assert!(out.contains("Bora Bora"));
    assert!(out.contains("Copacabana"));
    assert!(!out.contains("Tokyo"));
}

#[test]
fn multi_word_terms_are_joined() {
    let out = stdout_of(&["search", "rio", "de"]);
    assert!(out.contains("Rio de Janeiro"));
}

#[test]
fn no_match_prints_advice_on_stderr() {
    let output = travelbloom().args(["search", "xyz"]).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No matches found"));
}

#[test]
fn blank_term_is_rejected() {
    let output = travelbloom().args(["search", "   "]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Please enter a valid search query."));
}

#[test]
fn json_output_names_the_rule() {
    let out = stdout_of(&["--json", "search", "countries"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["rule"], "country_preview");
    assert_eq!(value["cards"].as_array().map(Vec::len), Some(2));
}

#[test]
fn countries_honors_json_flag() {
    let out = stdout_of(&["--json", "countries"]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows[0]["name"], "Australia");
    assert_eq!(rows[0]["cities"], 2);
    assert_eq!(rows.len(), 3);
}

#[test]
fn fold_flag_matches_accented_cities() {
    assert!(!stdout_of(&["search", "sao"]).contains("São Paulo"));
    assert!(stdout_of(&["--fold", "search", "sao"]).contains("São Paulo"));
}

#[test]
fn custom_input_with_missing_collections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.json");
    std::fs::write(&path, r#"{"temples":[{"name":"Angkor Wat"}]}"#).unwrap();
    let input = path.to_str().unwrap();

    let out = stdout_of(&["--input", input, "stats"]);
    assert!(out.contains("Countries: 0"));
    assert!(out.contains("Temples: 1"));
}

#[test]
fn unreadable_input_fails_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let output = travelbloom()
        .args(["--input", path.to_str().unwrap(), "list"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("could not load catalog"));
}
