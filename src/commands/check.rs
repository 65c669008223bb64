use std::path::Path;

use anyhow::{bail, Result};

use crate::commands::load_source;
use crate::ui::context::UiContext;
use crate::ui::views::check::{render_check_header, render_check_report, render_check_summary};

pub fn cmd_check(source: &Path, strict_warnings: bool, json: bool, verbose: u8) -> Result<()> {
    let loaded = load_source(source)?;
    let ui = UiContext::new(json, verbose, &loaded.config);
    let report = loaded.check();

    if json {
        for item in &report.items {
            let mut event = serde_json::to_value(item)?;
            if let Some(obj) = event.as_object_mut() {
                obj.insert("event".to_string(), "check".into());
            }
            crate::ui::json::emit(event)?;
        }
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "passed": report.passes(),
            "warnings": report.warnings(),
            "errors": report.errors(),
            "success": report.is_success() && !(strict_warnings && report.warnings() > 0),
        }))?;
    } else {
        print!(
            "{}",
            render_check_header(&source.display().to_string(), strict_warnings, ui.color, ui.unicode)
        );
        print!("{}", render_check_report(&report, ui.verbose, ui.color, ui.unicode));
        print!("{}", render_check_summary(&report, strict_warnings, ui.color, ui.unicode));
    }

    if !report.is_success() {
        bail!("check found {} error(s)", report.errors());
    }
    if strict_warnings && report.warnings() > 0 {
        bail!("check found {} warning(s) (--strict-warnings)", report.warnings());
    }
    Ok(())
}
