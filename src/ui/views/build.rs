use folio::BuildResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_build_header(
    source: &str,
    output: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "Folio Build");
    header.add("Source", source);
    header.add("Output", output);
    if dry_run {
        header.add("Mode", "dry run, nothing is written");
    }
    header.render(supports_color, supports_unicode)
}

/// Per-file lines. Skipped files are listed only when verbose.
pub fn render_build_files(result: &BuildResult, verbose: u8, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();
    for path in &result.written {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            path
        ));
    }
    if verbose > 0 {
        for path in &result.skipped {
            out.push_str(&format!(
                "  {} {} (unchanged)\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                path
            ));
        }
    }
    for error in &result.errors {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            error
        ));
    }
    out
}

/// Closing block. Content warnings are repeated here since they never stop a build.
pub fn render_build_summary(
    result: &BuildResult,
    output: &str,
    dry_run: bool,
    warnings: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = match (result.is_success(), dry_run) {
        (true, true) => "Dry run complete",
        (true, false) => "Build complete",
        (false, _) => "Build finished with errors",
    };
    let mut summary = if result.is_success() {
        ResultSummary::success(title)
    } else {
        ResultSummary::partial(title)
    };
    summary.add_stat(if dry_run { "to write" } else { "written" }, result.written.len());
    summary.add_stat("skipped", result.skipped.len());
    if !result.errors.is_empty() {
        summary.add_stat("errors", result.errors.len());
    }
    for warning in warnings {
        summary.add_warning(warning.as_str());
    }
    if result.is_success() && !dry_run {
        summary.with_next_step(format!("Open {}/index.html in a browser", output.trim_end_matches('/')));
    }
    summary.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> BuildResult {
        BuildResult {
            written: vec!["index.html".to_string()],
            skipped: vec!["site.css".to_string(), "site.js".to_string()],
            errors: Vec::new(),
        }
    }

    #[test]
    fn skipped_files_only_when_verbose() {
        let quiet = render_build_files(&result(), 0, false, true);
        assert_eq!(quiet, "  ✓ index.html\n");
        let verbose = render_build_files(&result(), 1, false, true);
        assert!(verbose.contains("○ site.css (unchanged)"));
    }

    #[test]
    fn summary_points_at_index() {
        let out = render_build_summary(&result(), "dist/", false, &[], false, true);
        assert!(out.contains("Build complete"));
        assert!(out.contains("1 written, 2 skipped"));
        assert!(out.contains("Open dist/index.html in a browser"));
    }

    #[test]
    fn dry_run_summary() {
        let out = render_build_summary(&result(), "dist", true, &[], false, false);
        assert!(out.contains("[OK] Dry run complete"));
        assert!(out.contains("1 to write"));
        assert!(!out.contains("Open"));
    }

    #[test]
    fn summary_repeats_content_warnings() {
        let warnings = vec!["site: 'nope' does not look like an email address".to_string()];
        let out = render_build_summary(&result(), "dist", false, &warnings, false, false);
        assert!(out.contains("[OK] Build complete"));
        assert!(out.contains("  [WARN] site: 'nope' does not look like an email address\n"));
    }
}
