use std::path::Path;

use anyhow::{bail, Result};
use folio::projects::{categories, Gallery};

use crate::commands::load_source;
use crate::ui::context::UiContext;
use crate::ui::views::projects::{render_projects, render_projects_header};

pub fn cmd_projects(source: &Path, category: &str, json: bool, verbose: u8) -> Result<()> {
    let loaded = load_source(source)?;
    let ui = UiContext::new(json, verbose, &loaded.config);
    let projects = &loaded.site.projects;
    let known = categories(projects);

    if !known.iter().any(|c| c == category) {
        bail!(
            "unknown category '{}' (categories are case-sensitive: {})",
            category,
            known.join(", ")
        );
    }

    let mut gallery = Gallery::new();
    gallery.set_filter(category);
    let visible = gallery.visible(projects);

    if json {
        for project in &visible {
            let mut event = serde_json::to_value(project)?;
            if let Some(obj) = event.as_object_mut() {
                obj.insert("event".to_string(), "project".into());
            }
            crate::ui::json::emit(event)?;
        }
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "projects",
            "filter": gallery.filter(),
            "categories": known,
            "count": visible.len(),
        }))?;
        return Ok(());
    }

    print!("{}", render_projects_header(&known, gallery.filter(), ui.color, ui.unicode));
    print!("{}", render_projects(&visible, ui.verbose, ui.color, ui.unicode));
    Ok(())
}
