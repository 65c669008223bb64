use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Closing block of a command: title, counts and an optional hint
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, false)
    }

    fn new(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title) = if self.success {
            (Icon::Success, ColoredText::success(self.title.as_str()))
        } else {
            (Icon::Warning, ColoredText::warning(self.title.as_str()))
        };

        let mut out = format!(
            "\n{} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        if !self.stats.is_empty() {
            let stats: Vec<String> = self
                .stats
                .iter()
                .map(|(label, count)| format!("{} {}", count, label))
                .collect();
            out.push_str(&format!("  {}\n", stats.join(", ")));
        }

        for warning in &self.warnings {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                warning
            ));
        }

        if let Some(hint) = &self.next_step {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim(hint.as_str()).render(supports_color)
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_stats_and_next_step() {
        let mut summary = ResultSummary::success("Build complete");
        summary.add_stat("written", 3);
        summary.add_stat("skipped", 1);
        summary.with_next_step("Open dist/index.html");

        let out = summary.render(false, true);
        assert!(out.contains("✓ Build complete"));
        assert!(out.contains("3 written, 1 skipped"));
        assert!(out.contains("↳ Open dist/index.html"));
    }

    #[test]
    fn partial_uses_warning_icon() {
        let mut summary = ResultSummary::partial("Check passed with warnings");
        summary.add_warning("2 warnings");
        let out = summary.render(false, false);
        assert!(out.starts_with("\n[WARN] Check passed with warnings"));
    }
}
