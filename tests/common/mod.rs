//! Shared helpers for CLI integration tests.
//!
//! - `folio()`: the binary with color, unicode and `FOLIO_*` overrides turned off
//! - `init_site()`: a temp directory holding the starter portfolio
//! - `ndjson()`: parse `--json` output into events

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

pub fn folio() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
    cmd.env("NO_COLOR", "1");
    cmd.env("TERM", "dumb");
    for key in ["FOLIO_OUTPUT", "FOLIO_SEED", "FOLIO_MOTION", "FOLIO_SCENE", "FOLIO_VERBOSITY", "RUST_LOG"] {
        cmd.env_remove(key);
    }
    cmd
}

pub fn run(dir: &Path, args: &[&str]) -> Output {
    folio().current_dir(dir).args(args).output().unwrap()
}

/// Temp directory initialized with `folio init`
pub fn init_site() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["init"]);
    assert!(
        output.status.success(),
        "init failed:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    dir
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// One JSON value per non-empty stdout line
pub fn ndjson(output: &Output) -> Vec<Value> {
    stdout(output)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON: {l} ({e})")))
        .collect()
}

pub fn last_event(output: &Output) -> Value {
    ndjson(output).pop().expect("no JSON events on stdout")
}
