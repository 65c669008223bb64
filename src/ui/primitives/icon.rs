use crossterm::style::{Color, Stylize};

use crate::ui::theme::{colors, icons, icons_ascii};

/// Glyphs the CLI prints in front of a status line or a command header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Watch,
    Build,
    Check,
    Diff,
    Mail,
    Gallery,
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Icon::Success,
        Icon::Error,
        Icon::Warning,
        Icon::Progress,
        Icon::Pending,
        Icon::Arrow,
        Icon::Watch,
        Icon::Build,
        Icon::Check,
        Icon::Diff,
        Icon::Mail,
        Icon::Gallery,
    ];

    /// `(unicode, ascii)` spelling of the glyph.
    fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Progress => (icons::PROGRESS, icons_ascii::PROGRESS),
            Icon::Pending => (icons::PENDING, icons_ascii::PENDING),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Watch => (icons::WATCH, icons_ascii::WATCH),
            Icon::Build => (icons::BUILD, icons_ascii::BUILD),
            Icon::Check => (icons::CHECK, icons_ascii::CHECK),
            Icon::Diff => (icons::DIFF, icons_ascii::DIFF),
            Icon::Mail => (icons::MAIL, icons_ascii::MAIL),
            Icon::Gallery => (icons::GALLERY, icons_ascii::GALLERY),
        }
    }

    /// Status icons take their status color; command icons share the info color.
    pub fn color(self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Progress => colors::WARNING,
            Icon::Pending | Icon::Arrow => colors::DIM,
            _ => colors::INFO,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fallback_is_bracketed() {
        assert_eq!(Icon::Success.render(false), "[OK]");
        assert_eq!(Icon::Gallery.render(false), "[PROJECTS]");
        for icon in Icon::ALL {
            let ascii = icon.render(false);
            assert!(ascii.starts_with('[') && ascii.ends_with(']'), "{icon:?}: {ascii}");
            assert_ne!(icon.render(true), ascii, "{icon:?}");
        }
    }

    #[test]
    fn command_icons_share_the_info_color() {
        for icon in [Icon::Watch, Icon::Build, Icon::Check, Icon::Diff, Icon::Mail, Icon::Gallery] {
            assert_eq!(icon.color(), colors::INFO);
        }
        assert_eq!(Icon::Progress.color(), Icon::Warning.color());
    }

    #[test]
    fn color_only_wraps_the_glyph() {
        assert_eq!(Icon::Error.colored(false, true), "✗");
        let colored = Icon::Error.colored(true, true);
        assert!(colored.contains('✗') && colored.starts_with('\u{1b}'));
    }
}
