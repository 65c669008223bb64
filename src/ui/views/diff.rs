use folio::build::diff::{DiffStatus, FileDiff};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_diff_header(source: &str, output: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Diff, "Folio Diff");
    header.add("Source", source);
    header.add("Output", output);
    header.render(supports_color, supports_unicode)
}

/// One line per changed file; with `verbose`, the unified diff follows.
pub fn render_diff(diffs: &[FileDiff], verbose: u8, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = String::new();
    for diff in diffs {
        match diff.status {
            DiffStatus::Unchanged => {
                if verbose > 0 {
                    out.push_str(&format!(
                        "  {} {}\n",
                        Icon::Pending.colored(supports_color, supports_unicode),
                        diff.path
                    ));
                }
                continue;
            }
            DiffStatus::Added => out.push_str(&format!(
                "  {} {} {}\n",
                ColoredText::success("+").render(supports_color),
                diff.path,
                ColoredText::dim(format!("(new, {} lines)", diff.additions)).render(supports_color)
            )),
            DiffStatus::Modified => out.push_str(&format!(
                "  {} {} {}\n",
                ColoredText::warning("~").render(supports_color),
                diff.path,
                ColoredText::dim(format!("(+{} -{})", diff.additions, diff.deletions)).render(supports_color)
            )),
        }

        if verbose > 0 {
            if let Some(unified) = &diff.unified {
                for line in unified.lines() {
                    let rendered = if line.starts_with('+') && !line.starts_with("+++") {
                        ColoredText::success(line).render(supports_color)
                    } else if line.starts_with('-') && !line.starts_with("---") {
                        ColoredText::error(line).render(supports_color)
                    } else {
                        ColoredText::dim(line).render(supports_color)
                    };
                    out.push_str(&format!("    {}\n", rendered));
                }
            }
        }
    }

    let changed = diffs.iter().filter(|d| d.status != DiffStatus::Unchanged).count();
    if changed == 0 {
        out.push_str(&format!(
            "{} Output is up to date\n",
            Icon::Success.colored(supports_color, supports_unicode)
        ));
    } else {
        out.push_str(&format!(
            "\n{} {} of {} files would change\n",
            Icon::Diff.colored(supports_color, supports_unicode),
            changed,
            diffs.len()
        ));
    }
    out
}
