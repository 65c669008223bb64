//! Site compiler
//!
//! A build runs in three steps:
//! 1. Load `site.toml` and `folio.toml` from the source directory
//! 2. Check the content and compile it into output files
//! 3. Write the outputs into the output directory (see [`writer`])

pub mod diff;
pub mod writer;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;

use crate::check::{check_site, CheckReport, CheckStatus};
use crate::config::{BuildConfig, ConfigWarning, CONTENT_FILE};
use crate::error::{FolioError, FolioResult};
use crate::models::SiteData;
use crate::render::page::{SCRIPT, STYLESHEET};
use crate::render::render_page;

pub use writer::{write_outputs, BuildResult, WriteOptions};

/// Stylesheet shipped with every build
pub const SITE_CSS: &str = include_str!("../../assets/site.css");

/// Runtime script shipped with every build
pub const SITE_JS: &str = include_str!("../../assets/site.js");

/// A file to be written, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Loaded source directory: content, configuration and load warnings
#[derive(Debug, Clone)]
pub struct Source {
    pub root: PathBuf,
    pub site: SiteData,
    pub config: BuildConfig,
    pub warnings: Vec<ConfigWarning>,
}

impl Source {
    pub fn load(root: &Path) -> FolioResult<Self> {
        if !root.is_dir() {
            return Err(FolioError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }
        let (site, mut warnings) = SiteData::load_with_warnings(&root.join(CONTENT_FILE))?;
        let (config, config_warnings) = BuildConfig::load_or_default(root)?;
        warnings.extend(config_warnings);
        Ok(Self {
            root: root.to_path_buf(),
            site,
            config,
            warnings,
        })
    }

    /// Output directory, resolved against the source directory
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.build.output)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.root.join(&self.config.build.static_dir)
    }

    /// Content checks plus load warnings
    pub fn check(&self) -> CheckReport {
        let mut report = check_site(&self.site);
        report.add_config_warnings(&self.warnings);
        report
    }
}

/// Compile the page for the current year
pub fn compile(site: &SiteData, config: &BuildConfig) -> FolioResult<Vec<OutputFile>> {
    compile_for_year(site, config, chrono::Local::now().year())
}

/// Compile `index.html`, `site.css` and `site.js`
pub fn compile_for_year(site: &SiteData, config: &BuildConfig, year: i32) -> FolioResult<Vec<OutputFile>> {
    let page = render_page(site, config, year)?;
    Ok(vec![
        OutputFile::new("index.html", page),
        OutputFile::new(STYLESHEET, SITE_CSS),
        OutputFile::new(SCRIPT, SITE_JS),
    ])
}

/// Every file under the static directory, copied verbatim to the output root
pub fn collect_static(dir: &Path) -> FolioResult<Vec<OutputFile>> {
    let mut out = Vec::new();
    if dir.is_dir() {
        collect_into(dir, dir, &mut out)?;
    }
    out.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(out)
}

fn collect_into(root: &Path, dir: &Path, out: &mut Vec<OutputFile>) -> FolioResult<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            collect_into(root, &path, out)?;
        } else if file_type.is_file() {
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            out.push(OutputFile::new(relative, fs::read(&path)?));
        }
    }
    Ok(())
}

/// Everything a build would write: compiled pages, then static files.
/// Static files never replace a compiled output of the same name.
pub fn collect_outputs(source: &Source, year: i32) -> FolioResult<Vec<OutputFile>> {
    let mut outputs = compile_for_year(&source.site, &source.config, year)?;
    for file in collect_static(&source.static_dir())? {
        if outputs.iter().any(|o| o.path == file.path) {
            tracing::warn!(path = %file.path.display(), "static file shadows a compiled output, skipped");
            continue;
        }
        outputs.push(file);
    }
    Ok(outputs)
}

/// Check, compile and write a source directory
pub fn build(source: &Source, options: WriteOptions) -> FolioResult<BuildResult> {
    let report = source.check();
    if !report.is_success() {
        let messages: Vec<&str> = report
            .items
            .iter()
            .filter(|i| i.status == CheckStatus::Error)
            .map(|i| i.message.as_str())
            .collect();
        return Err(FolioError::InvalidContent {
            message: messages.join("; "),
        });
    }

    let outputs = collect_outputs(source, chrono::Local::now().year())?;
    let dist = source.output_dir();
    tracing::info!(dist = %dist.display(), files = outputs.len(), "writing outputs");
    write_outputs(&dist, &outputs, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::STARTER_SITE;
    use tempfile::tempdir;

    fn starter_source(dir: &Path) -> Source {
        fs::write(dir.join(CONTENT_FILE), STARTER_SITE).unwrap();
        Source::load(dir).unwrap()
    }

    #[test]
    fn test_compile_outputs() {
        let site = SiteData::starter().unwrap();
        let outputs = compile_for_year(&site, &BuildConfig::default(), 2025).unwrap();
        let names: Vec<_> = outputs.iter().map(|o| o.path.to_string_lossy().to_string()).collect();
        assert_eq!(names, vec!["index.html", "site.css", "site.js"]);
    }

    #[test]
    fn test_missing_directory() {
        let err = Source::load(Path::new("/nonexistent/folio")).unwrap_err();
        assert!(matches!(err, FolioError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_static_files_are_copied() {
        let dir = tempdir().unwrap();
        let source = starter_source(dir.path());
        fs::create_dir_all(dir.path().join("static/assets")).unwrap();
        fs::write(dir.path().join("static/favicon.ico"), [0u8, 1, 2]).unwrap();
        fs::write(dir.path().join("static/assets/cv.pdf"), b"%PDF").unwrap();
        fs::write(dir.path().join("static/site.css"), b"shadowed").unwrap();

        let result = build(&source, WriteOptions::default()).unwrap();
        assert!(result.is_success());
        assert!(result.written.contains(&"assets/cv.pdf".to_string()));
        assert_eq!(fs::read(dir.path().join("dist/favicon.ico")).unwrap(), vec![0u8, 1, 2]);
        assert_eq!(fs::read_to_string(dir.path().join("dist/site.css")).unwrap(), SITE_CSS);
    }

    #[test]
    fn test_build_rejects_invalid_content() {
        let dir = tempdir().unwrap();
        let mut source = starter_source(dir.path());
        source.site.roles.clear();
        let err = build(&source, WriteOptions::default()).unwrap_err();
        assert!(matches!(err, FolioError::InvalidContent { .. }));
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_config_output_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONTENT_FILE), STARTER_SITE).unwrap();
        fs::write(dir.path().join("folio.toml"), "[build]\noutput = \"public\"\n").unwrap();
        let source = Source::load(dir.path()).unwrap();
        assert_eq!(source.output_dir(), dir.path().join("public"));
    }

    #[test]
    fn test_runtime_cancels_stale_success_reset() {
        let clear = SITE_JS.find("window.clearTimeout(resetTimer)").unwrap();
        let start = SITE_JS.find("setStatus(\"submitting\")").unwrap();
        let arm = SITE_JS.find("resetTimer = window.setTimeout(").unwrap();
        assert!(clear < start && start < arm);
    }
}
