//! Init command - write starter content into a directory
//!
//! Creates:
//! - `site.toml`: starter portfolio content
//! - `folio.toml`: build settings with their defaults spelled out
//! - `static/`: copied verbatim into the output

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use folio::config::{CONFIG_FILE, CONTENT_FILE};
use folio::models::STARTER_SITE;

use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::detect_capabilities;

/// Default `folio.toml`
pub const CONFIG_TEMPLATE: &str = r#"# Folio build settings

[build]
# Output directory, relative to this file
output = "dist"
# Copied verbatim into the output directory (favicon, resume, images)
static_dir = "static"
# Seed for the loading schedule and particle field
seed = 0x5EEDF011

[motion]
enabled = true
loading_screen = true

[scene]
enabled = true
particles = 2000

[output]
# quiet | normal | verbose | debug
verbosity = "normal"
"#;

pub fn cmd_init(path: &Path, force: bool, json: bool) -> Result<()> {
    let caps = detect_capabilities();
    let (color, unicode) = (caps.supports_color && !json, caps.supports_unicode);

    let content_path = path.join(CONTENT_FILE);
    if content_path.exists() && !force {
        bail!(
            "{} already exists in {}\nUse --force to overwrite",
            CONTENT_FILE,
            path.display()
        );
    }

    fs::create_dir_all(path.join("static")).with_context(|| format!("failed to create {}", path.display()))?;

    let mut created = Vec::new();
    fs::write(&content_path, STARTER_SITE).with_context(|| format!("failed to write {}", content_path.display()))?;
    created.push(CONTENT_FILE);

    let config_path = path.join(CONFIG_FILE);
    if force || !config_path.exists() {
        fs::write(&config_path, CONFIG_TEMPLATE)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        created.push(CONFIG_FILE);
    }
    tracing::info!(path = %path.display(), files = created.len(), "initialized");

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "path": path.display().to_string(),
            "created": created,
        }))?;
        return Ok(());
    }

    for file in &created {
        println!("{} Created {}", Icon::Success.colored(color, unicode), path.join(file).display());
    }
    println!(
        "{} Next: edit {} then run `folio build`",
        Icon::Arrow.colored(color, unicode),
        CONTENT_FILE
    );
    Ok(())
}
