use std::path::Path;

use anyhow::{bail, Result};
use folio::check::CheckStatus;
use folio::{build, WriteOptions};

use crate::commands::load_source;
use crate::ui::blocks::check_item::render_check_item;
use crate::ui::context::UiContext;
use crate::ui::views::build::{render_build_files, render_build_header, render_build_summary};

pub fn cmd_build(
    source: &Path,
    output: Option<&Path>,
    force: bool,
    dry_run: bool,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let mut loaded = load_source(source)?;
    if let Some(output) = output {
        loaded.config.build.output = output.to_path_buf();
    }
    let ui = UiContext::new(json, verbose, &loaded.config);
    let dist = loaded.output_dir();
    let dist_display = dist.display().to_string();

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "build",
            "source": source.display().to_string(),
            "output": dist_display,
            "dry_run": dry_run,
        }))?;
    } else if !ui.quiet(&loaded.config) {
        print!(
            "{}",
            render_build_header(&source.display().to_string(), &dist_display, dry_run, ui.color, ui.unicode)
        );
    }

    let report = loaded.check();
    if !json {
        for item in report.items.iter().filter(|i| i.status == CheckStatus::Error) {
            eprint!("{}", render_check_item(item, ui.color, ui.unicode));
        }
    }
    let warnings: Vec<String> = report
        .items
        .iter()
        .filter(|i| i.status == CheckStatus::Warning)
        .map(|i| format!("{}: {}", i.section, i.message))
        .collect();

    let result = match build(&loaded, WriteOptions { force, dry_run }) {
        Ok(result) => result,
        Err(e) => {
            if json {
                crate::ui::json::emit(serde_json::json!({
                    "event": "error",
                    "command": "build",
                    "message": e.to_string(),
                }))?;
            }
            return Err(e.into());
        }
    };

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "build",
            "dry_run": dry_run,
            "written": result.written,
            "skipped": result.skipped,
            "errors": result.errors,
            "warnings": report.warnings(),
        }))?;
    } else if !ui.quiet(&loaded.config) {
        print!("{}", render_build_files(&result, ui.verbose, ui.color, ui.unicode));
        print!(
            "{}",
            render_build_summary(&result, &dist_display, dry_run, &warnings, ui.color, ui.unicode)
        );
    }

    if !result.is_success() {
        bail!("{} file(s) failed to write", result.errors.len());
    }
    Ok(())
}
