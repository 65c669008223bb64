pub mod build;
pub mod check;
pub mod contact;
pub mod diff;
pub mod init;
pub mod projects;
pub mod watch;

use std::path::Path;

use anyhow::{Context, Result};
use folio::config::CONTENT_FILE;
use folio::Source;

/// Load a source directory with a hint when `site.toml` is missing
pub(crate) fn load_source(source: &Path) -> Result<Source> {
    if source.is_dir() && !source.join(CONTENT_FILE).exists() {
        anyhow::bail!(
            "no {} in {}\nRun `folio init {}` to create one",
            CONTENT_FILE,
            source.display(),
            source.display()
        );
    }
    Source::load(source).with_context(|| format!("failed to load {}", source.display()))
}
