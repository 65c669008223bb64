use std::path::Path;

use anyhow::Result;
use chrono::Datelike;
use folio::build::collect_outputs;
use folio::build::diff::{diff_outputs, DiffStatus};

use crate::commands::load_source;
use crate::ui::context::UiContext;
use crate::ui::views::diff::{render_diff, render_diff_header};

pub fn cmd_diff(source: &Path, json: bool, verbose: u8) -> Result<()> {
    let loaded = load_source(source)?;
    let ui = UiContext::new(json, verbose, &loaded.config);
    let dist = loaded.output_dir();

    let outputs = collect_outputs(&loaded, chrono::Local::now().year())?;
    let diffs = diff_outputs(&dist, &outputs);

    if json {
        for diff in diffs.iter().filter(|d| d.status != DiffStatus::Unchanged) {
            let mut event = serde_json::to_value(diff)?;
            if let Some(obj) = event.as_object_mut() {
                obj.insert("event".to_string(), "diff".into());
            }
            crate::ui::json::emit(event)?;
        }
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "diff",
            "files": diffs.len(),
            "changed": diffs.iter().filter(|d| d.status != DiffStatus::Unchanged).count(),
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        render_diff_header(
            &source.display().to_string(),
            &dist.display().to_string(),
            ui.color,
            ui.unicode
        )
    );
    print!("{}", render_diff(&diffs, ui.verbose, ui.color, ui.unicode));
    Ok(())
}
