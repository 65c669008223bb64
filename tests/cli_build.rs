mod common;

use std::fs;

use common::*;
use serde_json::Value;

fn events_of<'a>(events: &'a [Value], kind: &str) -> Vec<&'a Value> {
    events.iter().filter(|e| e["event"] == kind).collect()
}

#[test]
fn test_build_writes_page_and_assets() {
    let dir = init_site();
    let output = run(dir.path(), &["build"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let dist = dir.path().join("dist");
    let page = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(r#"<link rel="stylesheet" href="site.css">"#));
    assert!(page.contains(r#"<script src="site.js" defer></script>"#));
    assert!(page.contains(r#"id="folio-state""#));
    assert!(dist.join("site.css").is_file());
    assert!(dist.join("site.js").is_file());

    let manifest: Value = serde_json::from_str(&fs::read_to_string(dist.join(".folio-manifest.json")).unwrap()).unwrap();
    let hash = manifest["files"]["index.html"].as_str().unwrap();
    assert!(hash.starts_with("sha256:"));
}

#[test]
fn test_second_build_skips_unchanged_files() {
    let dir = init_site();
    assert!(run(dir.path(), &["build"]).status.success());

    let output = run(dir.path(), &["build", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let complete = last_event(&output);
    assert_eq!(complete["event"], "complete");
    assert_eq!(complete["written"], serde_json::json!([]));
    assert_eq!(complete["skipped"].as_array().unwrap().len(), 3);

    let output = run(dir.path(), &["build", "--json", "--force"]);
    assert_eq!(last_event(&output)["written"].as_array().unwrap().len(), 3);
}

#[test]
fn test_build_json_event_stream() {
    let dir = init_site();
    let output = run(dir.path(), &["build", "--json"]);
    assert!(output.status.success());

    let events = ndjson(&output);
    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["command"], "build");
    assert_eq!(events_of(&events, "complete").len(), 1);
    assert_eq!(events.last().unwrap()["warnings"], 0);
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = init_site();
    let output = run(dir.path(), &["build", "--dry-run", "--json"]);
    assert!(output.status.success());
    assert_eq!(last_event(&output)["written"].as_array().unwrap().len(), 3);
    assert!(!dir.path().join("dist").exists());
}

#[test]
fn test_output_flag_and_env_override() {
    let dir = init_site();
    let output = run(dir.path(), &["build", "--output", "public"]);
    assert!(output.status.success());
    assert!(dir.path().join("public/index.html").is_file());

    let output = folio()
        .current_dir(dir.path())
        .env("FOLIO_OUTPUT", "site-out")
        .arg("build")
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(dir.path().join("site-out/index.html").is_file());
}

#[test]
fn test_output_flag_wins_over_env() {
    let dir = init_site();
    let output = folio()
        .current_dir(dir.path())
        .env("FOLIO_OUTPUT", "site-out")
        .args(["build", "--output", "public"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(dir.path().join("public/index.html").is_file());
    assert!(!dir.path().join("site-out").exists());
}

#[test]
fn test_invalid_env_value_warns_and_is_ignored() {
    let dir = init_site();
    assert!(run(dir.path(), &["build"]).status.success());

    let output = folio()
        .current_dir(dir.path())
        .env("FOLIO_SEED", "abc")
        .env("FOLIO_VERBOSITY", "verbos")
        .args(["build", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
    let err = stderr(&output);
    assert!(err.contains("FOLIO_SEED"), "{err}");
    assert!(err.contains("did you mean 'verbose'"), "{err}");
    // The configured seed still applies, so nothing changed
    assert_eq!(last_event(&output)["written"], serde_json::json!([]));
}

#[test]
fn test_configured_debug_verbosity_enables_debug_logs() {
    let dir = init_site();
    let config = fs::read_to_string(dir.path().join("folio.toml")).unwrap();
    fs::write(
        dir.path().join("folio.toml"),
        config.replace("verbosity = \"normal\"", "verbosity = \"debug\""),
    )
    .unwrap();

    let output = run(dir.path(), &["build", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stderr(&output).contains("wrote"), "{}", stderr(&output));
}

#[test]
fn test_content_warnings_appear_in_build_summary() {
    let dir = init_site();
    let site = fs::read_to_string(dir.path().join("site.toml")).unwrap();
    fs::write(
        dir.path().join("site.toml"),
        site.replace("email = \"atharva.awate.dev@gmail.com\"", "email = \"not-an-address\""),
    )
    .unwrap();

    let output = run(dir.path(), &["build"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Build complete"), "{out}");
    assert!(out.contains("site: 'not-an-address' does not look like an email address"), "{out}");
}

#[test]
fn test_static_files_are_copied() {
    let dir = init_site();
    fs::write(dir.path().join("static/robots.txt"), "User-agent: *\n").unwrap();
    assert!(run(dir.path(), &["build"]).status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("dist/robots.txt")).unwrap(),
        "User-agent: *\n"
    );
}

#[test]
fn test_invalid_content_fails_build() {
    let dir = init_site();
    let site = fs::read_to_string(dir.path().join("site.toml")).unwrap();
    let broken = site.replacen("level = ", "level = 1", 1);
    fs::write(dir.path().join("site.toml"), broken).unwrap();

    let output = run(dir.path(), &["build", "--json"]);
    assert!(!output.status.success());
    assert_eq!(last_event(&output)["event"], "error");
    assert!(!dir.path().join("dist/index.html").exists());
}

#[test]
fn test_same_seed_same_page() {
    let a = init_site();
    let b = init_site();
    assert!(run(a.path(), &["build"]).status.success());
    assert!(run(b.path(), &["build"]).status.success());
    assert_eq!(
        fs::read(a.path().join("dist/index.html")).unwrap(),
        fs::read(b.path().join("dist/index.html")).unwrap()
    );
}
