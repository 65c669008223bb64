//! Project gallery state: category filter and detail selection

use crate::models::Project;

/// Filter value that shows every project
pub const ALL_CATEGORIES: &str = "All";

/// Tags shown on a card before collapsing into `+N`
pub const CARD_TAG_LIMIT: usize = 4;

/// "All" followed by each distinct category, in first-seen order
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for project in projects {
        if !out.iter().any(|c| c == &project.category) {
            out.push(project.category.clone());
        }
    }
    out
}

/// Projects matching `category` exactly (case-sensitive). "All" keeps everything.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    if category == ALL_CATEGORIES {
        return projects.iter().collect();
    }
    projects.iter().filter(|p| p.category == category).collect()
}

/// Gallery UI state: active filter plus the project open in the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    filter: String,
    selected: Option<u32>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            filter: ALL_CATEGORIES.to_string(),
            selected: None,
        }
    }
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, category: impl Into<String>) {
        self.filter = category.into();
    }

    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.filter)
    }

    /// Open the detail view. Unknown ids are ignored.
    pub fn select(&mut self, projects: &[Project], id: u32) -> bool {
        if projects.iter().any(|p| p.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.selected?;
        projects.iter().find(|p| p.id == id)
    }
}
