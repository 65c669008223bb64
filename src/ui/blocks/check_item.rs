use folio::check::{CheckItem, CheckStatus};

use crate::ui::primitives::icon::Icon;

/// One check line plus its recommendation
pub fn render_check_item(item: &CheckItem, supports_color: bool, supports_unicode: bool) -> String {
    let icon = match item.status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Warning => Icon::Warning,
        CheckStatus::Error => Icon::Error,
    }
    .colored(supports_color, supports_unicode);

    let mut out = format!("  {} {} - {}\n", icon, item.name, item.message);
    if let Some(rec) = &item.recommendation {
        out.push_str(&format!(
            "    {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            rec
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_recommendation_line() {
        let item = CheckItem {
            section: "skills".to_string(),
            name: "level".to_string(),
            status: CheckStatus::Error,
            message: "Frontend / React: level 120 is above 100".to_string(),
            recommendation: Some("Skill levels are percentages between 0 and 100".to_string()),
        };
        let out = render_check_item(&item, false, false);
        assert!(out.contains("[FAIL] level - Frontend / React"));
        assert!(out.contains("[>] Skill levels are percentages"));
    }
}
