use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use folio::watcher::{watch, WatchOptions};

use crate::commands::load_source;
use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(source: &Path, force: bool, json: bool, verbose: u8) -> Result<()> {
    let loaded = load_source(source)?;
    let ui = UiContext::new(json, verbose, &loaded.config);

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    if !json {
        print!(
            "{}",
            render_watch_header(
                &source.display().to_string(),
                &loaded.output_dir().display().to_string(),
                ui.color,
                ui.unicode
            )
        );
    }

    let options = WatchOptions {
        source: source.to_path_buf(),
        force,
    };

    watch(options, running, |event| {
        if json {
            println!("{}", event.to_json());
        } else {
            let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
            print!("{}", render_watch_event(&timestamp, &event, ui.color, ui.unicode));
        }
    })?;

    Ok(())
}
