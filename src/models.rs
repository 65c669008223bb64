//! Content model for Folio
//!
//! `SiteData` is the configuration object every section renders from. It is
//! loaded once from `site.toml` and never mutated afterwards:
//! - `SiteIdentity`: name, contact details and social links
//! - `About`, `SkillsData`, `Project`, `Experience`: section content
//! - `NavItem`: navigation anchors, in page order

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigWarning;
use crate::error::{FolioError, FolioResult};

/// Starter content written by `folio init`
pub const STARTER_SITE: &str = include_str!("../assets/site.toml");

/// Section ids in page order. Navigation anchors must point at one of these.
pub const SECTION_IDS: [&str; 6] = ["home", "about", "skills", "projects", "experience", "contact"];

/// Identity of the portfolio owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteIdentity {
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub social: SocialLinks,
}

impl SiteIdentity {
    /// First word of the name, shown next to the navbar logo
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// First character of the name, shown inside the logo badge
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .find(|c| !c.is_whitespace())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl SocialLinks {
    /// Configured links as `(label, url)` pairs, in display order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(url) = self.github.as_deref().filter(|u| !u.is_empty()) {
            out.push(("GitHub", url));
        }
        if let Some(url) = self.linkedin.as_deref().filter(|u| !u.is_empty()) {
            out.push(("LinkedIn", url));
        }
        out
    }
}

/// Page-level metadata for the document head and social previews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMeta {
    #[serde(default)]
    pub base_url: Option<String>,
    /// Document title. Falls back to "{name} | {title}".
    #[serde(default)]
    pub page_title: Option<String>,
    #[serde(default)]
    pub page_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub twitter_description: Option<String>,
}

fn default_locale() -> String {
    "en_US".to_string()
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            base_url: None,
            page_title: None,
            page_description: None,
            keywords: Vec::new(),
            locale: default_locale(),
            twitter_description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

/// Short strength card shown beside the about copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0..=100. `folio check` rejects anything larger.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillsData {
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
}

impl SkillsData {
    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub demo: String,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Tags shown on a card plus the number folded into the `+N` badge
    pub fn tag_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.tags.len().min(limit);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

impl NavItem {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }

    /// Target section id (`#about` -> `about`)
    pub fn section_id(&self) -> &str {
        self.href.strip_prefix('#').unwrap_or(&self.href)
    }
}

fn default_nav() -> Vec<NavItem> {
    SECTION_IDS
        .iter()
        .map(|id| {
            let name = match *id {
                "home" => "Home",
                "about" => "About",
                "skills" => "Skills",
                "projects" => "Projects",
                "experience" => "Experience",
                _ => "Contact",
            };
            NavItem::new(name, format!("#{}", id))
        })
        .collect()
}

/// The configuration object: everything the page renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub roles: Vec<String>,

    pub site: SiteIdentity,

    #[serde(default)]
    pub meta: SiteMeta,

    #[serde(default)]
    pub about: About,

    #[serde(default)]
    pub skills: SkillsData,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub experience: Vec<Experience>,

    #[serde(default = "default_nav")]
    pub nav: Vec<NavItem>,
}

impl SiteData {
    /// Load content from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> FolioResult<Self> {
        Self::load_with_warnings(path).map(|(data, _)| data)
    }

    /// Load content and collect unknown keys as warnings
    pub fn load_with_warnings(path: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        if !path.exists() {
            return Err(FolioError::ContentNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content, path)
    }

    /// Parse content from a TOML string. `path` is only used in diagnostics.
    pub fn from_toml_str(content: &str, path: &Path) -> FolioResult<(Self, Vec<ConfigWarning>)> {
        crate::config::parse_toml_with_warnings(content, path)
    }

    /// The built-in starter portfolio
    pub fn starter() -> FolioResult<Self> {
        Self::from_toml_str(STARTER_SITE, Path::new("site.toml")).map(|(data, _)| data)
    }

    /// Document title used in `<title>` and social previews
    pub fn page_title(&self) -> String {
        self.meta
            .page_title
            .clone()
            .unwrap_or_else(|| format!("{} | {}", self.site.name, self.site.title))
    }

    /// Meta description, falling back to the identity description
    pub fn page_description(&self) -> &str {
        self.meta
            .page_description
            .as_deref()
            .unwrap_or(&self.site.description)
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}
