mod common;

use std::fs;

use common::*;

#[test]
fn test_check_json_emits_ndjson_event_stream() {
    let dir = init_site();
    let output = run(dir.path(), &["check", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let events = ndjson(&output);
    assert!(events.len() > 1, "expected NDJSON (multiple lines)");
    assert!(events.iter().any(|e| e["event"] == "check" && e["status"] == "pass"));

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["command"], "check");
    assert_eq!(last["errors"], 0);
    assert_eq!(last["success"], true);
}

#[test]
fn test_unknown_key_is_a_warning() {
    let dir = init_site();
    let config = fs::read_to_string(dir.path().join("folio.toml")).unwrap();
    fs::write(dir.path().join("folio.toml"), config.replace("[motion]\n", "[motion]\nenabeld = true\n")).unwrap();

    let output = run(dir.path(), &["check", "--json"]);
    assert!(output.status.success(), "warnings alone must not fail check");
    let events = ndjson(&output);
    let warning = events
        .iter()
        .find(|e| e["event"] == "check" && e["status"] == "warning")
        .expect("expected a warning event");
    assert!(warning["message"].as_str().unwrap().contains("enabeld"));

    let output = run(dir.path(), &["check", "--json", "--strict-warnings"]);
    assert!(!output.status.success());
    assert_eq!(last_event(&output)["success"], false);
}

#[test]
fn test_broken_nav_anchor_is_an_error() {
    let dir = init_site();
    let site = fs::read_to_string(dir.path().join("site.toml")).unwrap();
    fs::write(dir.path().join("site.toml"), site.replacen("#about", "#aboot", 1)).unwrap();

    let output = run(dir.path(), &["check"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("aboot"), "{}", stdout(&output));
}

#[test]
fn test_malformed_toml_reports_location() {
    let dir = init_site();
    fs::write(dir.path().join("site.toml"), "roles = [\n").unwrap();

    let output = run(dir.path(), &["check"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("site.toml"), "{}", stderr(&output));
}
