//! Content checks run by `folio check` and before every build
//!
//! Errors describe content the page cannot render faithfully (duplicate ids,
//! broken anchors, impossible skill levels). Warnings describe content that
//! renders but probably isn't what the author meant.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::ConfigWarning;
use crate::contact::is_valid_email;
use crate::models::{SiteData, SECTION_IDS};
use crate::render::html::CATEGORY_ICONS;

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckItem {
    /// Content section the check looked at ("skills", "projects", ...)
    pub section: String,
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl CheckItem {
    fn new(section: &str, name: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            section: section.to_string(),
            name: name.to_string(),
            status,
            message: message.into(),
            recommendation: None,
        }
    }

    fn pass(section: &str, name: &str, message: impl Into<String>) -> Self {
        Self::new(section, name, CheckStatus::Pass, message)
    }

    fn warning(section: &str, name: &str, message: impl Into<String>) -> Self {
        Self::new(section, name, CheckStatus::Warning, message)
    }

    fn error(section: &str, name: &str, message: impl Into<String>) -> Self {
        Self::new(section, name, CheckStatus::Error, message)
    }

    fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

/// All check items in run order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub items: Vec<CheckItem>,
}

impl CheckReport {
    fn count(&self, status: CheckStatus) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }

    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    /// No errors. Warnings do not fail a build.
    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    /// Append unknown-key warnings from loading `site.toml` or `folio.toml`
    pub fn add_config_warnings(&mut self, warnings: &[ConfigWarning]) {
        for warning in warnings {
            let mut item = CheckItem::warning("config", "unknown_key", warning.to_string());
            if let Some(suggestion) = &warning.suggestion {
                item = item.recommend(format!("Rename '{}' to '{}'", warning.key, suggestion));
            }
            self.items.push(item);
        }
    }
}

fn check_roles(site: &SiteData, items: &mut Vec<CheckItem>) {
    if site.roles.is_empty() {
        items.push(
            CheckItem::error("hero", "roles", "No roles configured; the rotating title has nothing to show")
                .recommend("Add at least one entry to `roles`"),
        );
    } else {
        items.push(CheckItem::pass("hero", "roles", format!("{} roles", site.roles.len())));
    }
}

fn check_email(site: &SiteData, items: &mut Vec<CheckItem>) {
    if is_valid_email(&site.site.email) {
        items.push(CheckItem::pass("site", "email", "Contact email looks valid"));
    } else {
        items.push(
            CheckItem::warning(
                "site",
                "email",
                format!("'{}' does not look like an email address", site.site.email),
            )
            .recommend("Use an address of the form name@domain.tld"),
        );
    }
}

fn check_skills(site: &SiteData, items: &mut Vec<CheckItem>) {
    let mut bad_levels = 0;
    for category in &site.skills.categories {
        for skill in &category.skills {
            if skill.level > 100 {
                bad_levels += 1;
                items.push(
                    CheckItem::error(
                        "skills",
                        "level",
                        format!(
                            "{} / {}: level {} is above 100",
                            category.name, skill.name, skill.level
                        ),
                    )
                    .recommend("Skill levels are percentages between 0 and 100"),
                );
            }
        }
        if !category.icon.is_empty() && !CATEGORY_ICONS.contains(&category.icon.as_str()) {
            items.push(
                CheckItem::warning(
                    "skills",
                    "icon",
                    format!(
                        "{}: unknown icon '{}', a generic icon is used",
                        category.name, category.icon
                    ),
                )
                .recommend(format!("Use one of: {}", CATEGORY_ICONS.join(", "))),
            );
        }
    }
    if bad_levels == 0 {
        items.push(CheckItem::pass(
            "skills",
            "level",
            format!("{} skills within 0..=100", site.skills.skill_count()),
        ));
    }
}

/// First id that appears more than once
fn duplicate_id(ids: impl IntoIterator<Item = u32>) -> Option<u32> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

fn check_projects(site: &SiteData, items: &mut Vec<CheckItem>) {
    match duplicate_id(site.projects.iter().map(|p| p.id)) {
        Some(id) => items.push(
            CheckItem::error("projects", "ids", format!("Project id {} is used more than once", id))
                .recommend("Give every project a unique id; detail views are keyed by it"),
        ),
        None => items.push(CheckItem::pass(
            "projects",
            "ids",
            format!("{} projects with unique ids", site.projects.len()),
        )),
    }

    for project in &site.projects {
        let missing: Vec<&str> = [("github", &project.github), ("demo", &project.demo)]
            .into_iter()
            .filter(|(_, url)| url.is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            items.push(CheckItem::warning(
                "projects",
                "links",
                format!("{}: no {} link, the button is hidden", project.title, missing.join(" or ")),
            ));
        }
    }
}

fn check_experience(site: &SiteData, items: &mut Vec<CheckItem>) {
    match duplicate_id(site.experience.iter().map(|e| e.id)) {
        Some(id) => items.push(
            CheckItem::error(
                "experience",
                "ids",
                format!("Experience id {} is used more than once", id),
            )
            .recommend("Give every experience entry a unique id"),
        ),
        None => items.push(CheckItem::pass(
            "experience",
            "ids",
            format!("{} entries with unique ids", site.experience.len()),
        )),
    }
}

fn check_nav(site: &SiteData, items: &mut Vec<CheckItem>) {
    let mut broken = 0;
    for item in &site.nav {
        if !item.href.starts_with('#') {
            broken += 1;
            items.push(
                CheckItem::error(
                    "nav",
                    "href",
                    format!("{}: href '{}' is not an in-page anchor", item.name, item.href),
                )
                .recommend("Navigation links must look like #section"),
            );
        } else if !SECTION_IDS.contains(&item.section_id()) {
            broken += 1;
            items.push(
                CheckItem::error(
                    "nav",
                    "href",
                    format!("{}: no section with id '{}'", item.name, item.section_id()),
                )
                .recommend(format!("Point it at one of: {}", SECTION_IDS.join(", "))),
            );
        }
    }
    if broken == 0 {
        items.push(CheckItem::pass(
            "nav",
            "href",
            format!("{} links resolve to sections", site.nav.len()),
        ));
    }
}

/// Run every content check
pub fn check_site(site: &SiteData) -> CheckReport {
    let mut items = Vec::new();
    check_roles(site, &mut items);
    check_email(site, &mut items);
    check_skills(site, &mut items);
    check_projects(site, &mut items);
    check_experience(site, &mut items);
    check_nav(site, &mut items);
    CheckReport { items }
}
