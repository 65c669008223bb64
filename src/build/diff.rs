//! Compare compiled outputs against what is currently in the output directory

use std::fs;
use std::path::Path;

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

use super::OutputFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    Added,
    Modified,
    Unchanged,
}

/// Difference for one output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub path: String,
    pub status: DiffStatus,
    pub additions: usize,
    pub deletions: usize,
    /// Unified diff for text files; `None` for binary or unchanged files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unified: Option<String>,
}

/// Unified diff with `a/` and `b/` headers
pub fn unified_diff(path: &str, old: &str, new: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string()
}

fn count_changes(old: &str, new: &str) -> (usize, usize) {
    let diff = TextDiff::from_lines(old, new);
    diff.iter_all_changes()
        .fold((0, 0), |(adds, dels), change| match change.tag() {
            ChangeTag::Insert => (adds + 1, dels),
            ChangeTag::Delete => (adds, dels + 1),
            ChangeTag::Equal => (adds, dels),
        })
}

/// Diff every output against its counterpart under `dist`
pub fn diff_outputs(dist: &Path, outputs: &[OutputFile]) -> Vec<FileDiff> {
    outputs
        .iter()
        .map(|output| {
            let path = output.path.to_string_lossy().replace('\\', "/");
            let Ok(current) = fs::read(dist.join(&output.path)) else {
                let additions = std::str::from_utf8(&output.content)
                    .map(|s| s.lines().count())
                    .unwrap_or(0);
                return FileDiff {
                    path,
                    status: DiffStatus::Added,
                    additions,
                    deletions: 0,
                    unified: None,
                };
            };

            if current == output.content {
                return FileDiff {
                    path,
                    status: DiffStatus::Unchanged,
                    additions: 0,
                    deletions: 0,
                    unified: None,
                };
            }

            match (std::str::from_utf8(&current), std::str::from_utf8(&output.content)) {
                (Ok(old), Ok(new)) => {
                    let (additions, deletions) = count_changes(old, new);
                    FileDiff {
                        unified: Some(unified_diff(&path, old, new)),
                        path,
                        status: DiffStatus::Modified,
                        additions,
                        deletions,
                    }
                }
                _ => FileDiff {
                    path,
                    status: DiffStatus::Modified,
                    additions: 0,
                    deletions: 0,
                    unified: None,
                },
            }
        })
        .collect()
}
