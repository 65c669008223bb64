//! Navigation state: active section tracking and the mobile menu

use crate::models::NavItem;

/// Header switches to its compact style past this scroll offset (px)
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// A section becomes active once its top is at or above this viewport offset (px)
pub const ACTIVATION_OFFSET: f64 = 150.0;

/// Section active before any scroll event
pub const INITIAL_SECTION: &str = "home";

/// Pick the active section from viewport-relative section tops.
///
/// Sections are scanned from last to first; the first one whose top has
/// crossed `ACTIVATION_OFFSET` wins. Sections missing from `tops` are skipped.
pub fn active_section<'a>(nav: &'a [NavItem], tops: &[(&str, f64)]) -> Option<&'a str> {
    nav.iter().rev().map(NavItem::section_id).find(|id| {
        tops.iter()
            .find(|(section, _)| section == id)
            .map(|(_, top)| *top <= ACTIVATION_OFFSET)
            .unwrap_or(false)
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    active: String,
    scrolled: bool,
    menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: INITIAL_SECTION.to_string(),
            scrolled: false,
            menu_open: false,
        }
    }
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Handle a scroll event. Keeps the previous section when none qualifies.
    pub fn on_scroll(&mut self, nav: &[NavItem], scroll_y: f64, tops: &[(&str, f64)]) {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        if let Some(id) = active_section(nav, tops) {
            if id != self.active {
                self.active = id.to_string();
            }
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Link click: closes the mobile menu and returns the section to scroll to.
    /// The section turns active on the next scroll event that crosses the threshold.
    pub fn navigate<'a>(&mut self, href: &'a str) -> &'a str {
        self.menu_open = false;
        href.strip_prefix('#').unwrap_or(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Vec<NavItem> {
        ["home", "about", "skills", "projects"]
            .iter()
            .map(|id| NavItem::new(*id, format!("#{}", id)))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let state = NavState::new();
        assert_eq!(state.active(), "home");
        assert!(!state.is_scrolled());
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_last_crossed_section_wins() {
        let nav = nav();
        let tops = [("home", -900.0), ("about", -300.0), ("skills", 120.0), ("projects", 800.0)];
        assert_eq!(active_section(&nav, &tops), Some("skills"));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let nav = nav();
        let tops = [("home", -100.0), ("about", 150.0), ("skills", 150.5)];
        assert_eq!(active_section(&nav, &tops), Some("about"));
    }

    #[test]
    fn test_no_section_keeps_previous() {
        let nav = nav();
        let mut state = NavState::new();
        state.on_scroll(&nav, 700.0, &[("about", 10.0)]);
        assert_eq!(state.active(), "about");

        state.on_scroll(&nav, 700.0, &[("home", 400.0), ("about", 900.0)]);
        assert_eq!(state.active(), "about");
    }

    #[test]
    fn test_scrolled_flag() {
        let nav = nav();
        let mut state = NavState::new();
        state.on_scroll(&nav, 50.0, &[]);
        assert!(!state.is_scrolled());
        state.on_scroll(&nav, 51.0, &[]);
        assert!(state.is_scrolled());
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut state = NavState::new();
        state.toggle_menu();
        assert!(state.is_menu_open());
        assert_eq!(state.navigate("#projects"), "projects");
        assert!(!state.is_menu_open());
    }
}
