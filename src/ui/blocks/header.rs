use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// First block a command prints: icon and title, then `label: value` rows.
///
/// Values line up in one column, padded past the widest label.
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    rows: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push((label.into(), value.into()));
    }

    fn label_width(&self) -> usize {
        self.rows
            .iter()
            .map(|(label, _)| label.chars().count() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let width = self.label_width();
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(self.title.as_str()).bold().render(supports_color)
        );
        for (label, value) in &self.rows {
            let label = format!("{:<width$}", format!("{label}:"));
            out.push_str(&ColoredText::dim(label).render(supports_color));
            out.push(' ');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_line_uses_ascii_icon() {
        let header = CommandHeader::new(Icon::Build, "Folio Build");
        assert_eq!(header.render(false, false), "[BUILD] Folio Build\n");
    }

    #[test]
    fn values_line_up_past_the_widest_label() {
        let mut header = CommandHeader::new(Icon::Diff, "Folio Diff");
        header.add("Source", "./portfolio");
        header.add("Output", "dist");
        header.add("Seed", "0x5EEDF011");

        assert_eq!(
            header.render(false, false),
            "[DIFF] Folio Diff\nSource: ./portfolio\nOutput: dist\nSeed:   0x5EEDF011\n"
        );
    }
}
