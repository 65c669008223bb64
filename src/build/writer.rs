//! Output writer: atomic writes, content hashes and the build manifest

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Component, Path};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use super::OutputFile;
use crate::error::{FolioError, FolioResult};

/// Manifest file name inside the output directory
pub const MANIFEST_FILE: &str = ".folio-manifest.json";

const MANIFEST_VERSION: u32 = 1;

/// Options for writing outputs
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Rewrite files even when their hash is unchanged
    pub force: bool,
    /// Report what would be written without touching the disk
    pub dry_run: bool,
}

/// Result of writing a set of outputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildResult {
    /// Files written (or that would be written in a dry run)
    pub written: Vec<String>,
    /// Files skipped because their content is unchanged
    pub skipped: Vec<String>,
    /// Errors encountered, one per failed file
    pub errors: Vec<String>,
}

impl BuildResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Hashes of everything the last build wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    /// Output-relative path -> `sha256:<hex>`
    pub files: BTreeMap<String, String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            version: MANIFEST_VERSION,
            generated_at: Utc::now(),
            files: BTreeMap::new(),
        }
    }
}

impl Manifest {
    /// Load the manifest from `dist`. A missing or unreadable manifest is
    /// treated as empty so the next build rewrites everything.
    pub fn load(dist: &Path) -> Self {
        let path = dist.join(MANIFEST_FILE);
        fs::read_to_string(&path)
            .ok()
            .and_then(|content| match serde_json::from_str(&content) {
                Ok(manifest) => Some(manifest),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable manifest");
                    None
                }
            })
            .unwrap_or_default()
    }

    pub fn save(&self, dist: &Path) -> FolioResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        atomic_write(&dist.join(MANIFEST_FILE), json.as_bytes())
    }

    pub fn hash(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

/// SHA-256 of `content` as `sha256:<64 hex digits>`
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}

/// Write through a temp file in the same directory, then rename into place
pub fn atomic_write(path: &Path, content: &[u8]) -> FolioResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Reject output paths that would land outside the output directory
pub fn validate_output_path(path: &Path, root: &Path) -> FolioResult<()> {
    let escapes = path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_) | Component::RootDir));
    if escapes {
        return Err(FolioError::PathEscape {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        });
    }
    Ok(())
}

fn manifest_key(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Write `outputs` under `dist`, skipping files whose content already matches
pub fn write_outputs(dist: &Path, outputs: &[OutputFile], options: WriteOptions) -> FolioResult<BuildResult> {
    let previous = Manifest::load(dist);
    let mut manifest = Manifest::default();
    let mut result = BuildResult::default();

    for output in outputs {
        let key = manifest_key(&output.path);
        if let Err(e) = validate_output_path(&output.path, dist) {
            result.errors.push(e.to_string());
            continue;
        }

        let hash = hash_content(&output.content);
        let target = dist.join(&output.path);
        let unchanged = previous.hash(&key) == Some(hash.as_str())
            && fs::read(&target).map(|on_disk| hash_content(&on_disk) == hash).unwrap_or(false);
        manifest.files.insert(key.clone(), hash);

        if unchanged && !options.force {
            tracing::debug!(path = %key, "unchanged, skipping");
            result.skipped.push(key);
            continue;
        }

        if options.dry_run {
            result.written.push(key);
            continue;
        }

        match atomic_write(&target, &output.content) {
            Ok(()) => {
                tracing::debug!(path = %key, bytes = output.content.len(), "wrote");
                result.written.push(key);
            }
            Err(e) => {
                manifest.files.remove(&key);
                result.errors.push(format!("{}: {}", key, e));
            }
        }
    }

    if !options.dry_run {
        manifest.save(dist)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn output(path: &str, content: &str) -> OutputFile {
        OutputFile::new(path, content.as_bytes().to_vec())
    }

    #[test]
    fn test_hash_format() {
        let hash = hash_content(b"hello");
        assert!(hash.starts_with("sha256:"));
        assert_eq!(hash.len(), 7 + 64);
        assert_eq!(hash, hash_content(b"hello"));
    }

    #[test]
    fn test_atomic_write_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b.txt");
        atomic_write(&path, b"one").unwrap();
        atomic_write(&path, b"two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
    }

    #[test]
    fn test_second_write_skips_unchanged() {
        let dir = tempdir().unwrap();
        let outputs = vec![output("index.html", "<p>hi</p>"), output("site.css", "body{}")];

        let first = write_outputs(dir.path(), &outputs, WriteOptions::default()).unwrap();
        assert_eq!(first.written.len(), 2);
        assert!(dir.path().join(MANIFEST_FILE).exists());

        let second = write_outputs(dir.path(), &outputs, WriteOptions::default()).unwrap();
        assert!(second.written.is_empty());
        assert_eq!(second.skipped.len(), 2);

        let forced = write_outputs(dir.path(), &outputs, WriteOptions { force: true, dry_run: false }).unwrap();
        assert_eq!(forced.written.len(), 2);
    }

    #[test]
    fn test_hand_edited_output_is_rewritten() {
        let dir = tempdir().unwrap();
        let outputs = vec![output("index.html", "<p>hi</p>")];
        write_outputs(dir.path(), &outputs, WriteOptions::default()).unwrap();

        fs::write(dir.path().join("index.html"), "edited").unwrap();
        let result = write_outputs(dir.path(), &outputs, WriteOptions::default()).unwrap();
        assert_eq!(result.written, vec!["index.html".to_string()]);
        assert_eq!(fs::read_to_string(dir.path().join("index.html")).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempdir().unwrap();
        let outputs = vec![output("index.html", "<p>hi</p>")];
        let result = write_outputs(dir.path(), &outputs, WriteOptions { force: false, dry_run: true }).unwrap();
        assert_eq!(result.written.len(), 1);
        assert!(!dir.path().join("index.html").exists());
        assert!(!dir.path().join(MANIFEST_FILE).exists());
    }

    #[test]
    fn test_escaping_paths_are_errors() {
        let dir = tempdir().unwrap();
        let outputs = vec![output("../evil.html", "x"), output("ok.html", "y")];
        let result = write_outputs(dir.path(), &outputs, WriteOptions::default()).unwrap();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.written, vec!["ok.html".to_string()]);
        assert!(!result.is_success());
    }

    #[test]
    fn test_validate_output_path() {
        let root = PathBuf::from("/site/dist");
        assert!(validate_output_path(Path::new("static/cv.pdf"), &root).is_ok());
        assert!(validate_output_path(Path::new("/etc/passwd"), &root).is_err());
        assert!(validate_output_path(Path::new("a/../../b"), &root).is_err());
    }

    #[test]
    fn test_corrupt_manifest_is_ignored() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "not json").unwrap();
        let manifest = Manifest::load(dir.path());
        assert!(manifest.files.is_empty());
    }
}
