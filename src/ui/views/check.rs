use folio::check::CheckReport;

use crate::ui::blocks::check_item::render_check_item;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_check_header(source: &str, strict_warnings: bool, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Folio Check");
    header.add("Source", source);
    if strict_warnings {
        header.add("Strict", "failing on warnings");
    }
    header.render(supports_color, supports_unicode)
}

/// Items grouped by section, in run order. Passing items are only listed
/// when `verbose` is set.
pub fn render_check_report(report: &CheckReport, verbose: u8, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();
    let mut current_section: Option<&str> = None;

    for item in &report.items {
        if verbose == 0 && item.status == folio::CheckStatus::Pass {
            continue;
        }
        if current_section != Some(item.section.as_str()) {
            if current_section.is_some() {
                out.push('\n');
            }
            out.push_str(&item.section);
            out.push('\n');
            current_section = Some(item.section.as_str());
        }
        out.push_str(&render_check_item(item, supports_color, supports_unicode));
    }

    out
}

pub fn render_check_summary(report: &CheckReport, strict_warnings: bool, supports_color: bool, supports_unicode: bool) -> String {
    let failed = !report.is_success() || (strict_warnings && report.warnings() > 0);
    let title = if failed {
        "Check FAILED"
    } else if report.warnings() > 0 {
        "Check passed with warnings"
    } else {
        "All checks passed"
    };

    let mut summary = if failed || report.warnings() > 0 {
        ResultSummary::partial(title)
    } else {
        ResultSummary::success(title)
    };
    summary.add_stat("passed", report.passes());
    summary.add_stat("warnings", report.warnings());
    summary.add_stat("errors", report.errors());
    if strict_warnings && report.warnings() > 0 {
        summary.add_warning("warnings count as failures with --strict-warnings");
    }
    if failed {
        summary.with_next_step("Fix the items above, then run `folio check` again");
    }
    summary.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::{check_site, SiteData};

    #[test]
    fn quiet_report_hides_passes() {
        let report = check_site(&SiteData::starter().unwrap());
        assert_eq!(render_check_report(&report, 0, false, true), "");
        let verbose = render_check_report(&report, 1, false, true);
        assert!(verbose.contains("hero\n"));
        assert!(verbose.contains("✓ roles"));
    }

    #[test]
    fn errors_fail_the_summary() {
        let mut site = SiteData::starter().unwrap();
        site.roles.clear();
        let report = check_site(&site);
        let out = render_check_summary(&report, false, false, false);
        assert!(out.contains("[WARN] Check FAILED"));
        assert!(out.contains("1 errors"));
        assert!(render_check_report(&report, 0, false, false).contains("[FAIL] roles"));
    }

    #[test]
    fn strict_warnings_fail_the_summary() {
        let mut site = SiteData::starter().unwrap();
        site.site.email = "nope".to_string();
        let report = check_site(&site);
        assert!(render_check_summary(&report, false, false, true).contains("passed with warnings"));
        let strict = render_check_summary(&report, true, false, true);
        assert!(strict.contains("Check FAILED"));
        assert!(strict.contains("warnings count as failures with --strict-warnings"));
    }
}
