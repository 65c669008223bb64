//! Page layout: document head, sections in order and the runtime data islands

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::BuildConfig;
use crate::contact::ValidationRules;
use crate::error::FolioResult;
use crate::loading::LoadingSchedule;
use crate::models::{SiteData, SECTION_IDS};
use crate::motion::ScrollPlan;
use crate::nav::{ACTIVATION_OFFSET, INITIAL_SECTION, SCROLLED_THRESHOLD};
use crate::rotation::ROTATION_INTERVAL;
use crate::scene::SceneData;

use super::html::{attr, escape, json_script};
use super::sections;
use super::RenderContext;

/// Stylesheet and script file names next to `index.html`
pub const STYLESHEET: &str = "site.css";
pub const SCRIPT: &str = "site.js";

/// Id of the JSON island holding runtime state
pub const STATE_ID: &str = "folio-state";

/// Id of the JSON island holding the 3D scene
pub const SCENE_ID: &str = "scene-data";

#[derive(Debug, Clone, Serialize)]
pub struct NavRuntime {
    pub scrolled_threshold: f64,
    pub activation_offset: f64,
    pub initial: &'static str,
    pub sections: Vec<String>,
}

/// Everything `site.js` reads at startup
#[derive(Debug, Clone, Serialize)]
pub struct PageState {
    pub roles: Vec<String>,
    pub rotation_ms: u64,
    pub nav: NavRuntime,
    pub contact: ValidationRules,
    pub scroll: ScrollPlan,
    pub motion: bool,
    pub loading: Option<LoadingSchedule>,
}

impl PageState {
    pub fn new(site: &SiteData, config: &BuildConfig, loading: &LoadingSchedule) -> Self {
        Self {
            roles: site.roles.clone(),
            rotation_ms: ROTATION_INTERVAL.as_millis() as u64,
            nav: NavRuntime {
                scrolled_threshold: SCROLLED_THRESHOLD,
                activation_offset: ACTIVATION_OFFSET,
                initial: INITIAL_SECTION,
                sections: site.nav.iter().map(|n| n.section_id().to_string()).collect(),
            },
            contact: ValidationRules::default(),
            scroll: ScrollPlan::new(config.motion.enabled),
            motion: config.motion.enabled,
            loading: config.motion.loading_screen.then(|| loading.clone()),
        }
    }
}

fn head(site: &SiteData, extra_css: &str) -> String {
    let title = site.page_title();
    let description = site.page_description();
    let twitter_description = site
        .meta
        .twitter_description
        .as_deref()
        .unwrap_or(description);
    let url = site
        .meta
        .base_url
        .as_deref()
        .map(|url| {
            format!(
                "\n<link rel=\"canonical\" href=\"{0}\">\n<meta property=\"og:url\" content=\"{0}\">",
                attr(url)
            )
        })
        .unwrap_or_default();
    let keywords = if site.meta.keywords.is_empty() {
        String::new()
    } else {
        format!(
            "\n<meta name=\"keywords\" content=\"{}\">",
            attr(&site.meta.keywords.join(", "))
        )
    };
    let style = if extra_css.is_empty() {
        String::new()
    } else {
        format!("\n<style>\n{}</style>", extra_css)
    };

    format!(
        r#"<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">{keywords}
<meta name="author" content="{name}">
<meta name="creator" content="{name}">
<meta name="robots" content="index, follow">{url}
<meta property="og:type" content="website">
<meta property="og:locale" content="{locale}">
<meta property="og:site_name" content="{name} Portfolio">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta name="twitter:card" content="summary_large_image">
<meta name="twitter:title" content="{title}">
<meta name="twitter:description" content="{twitter_description}">
<link rel="icon" href="/favicon.ico">
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous">
<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&amp;family=JetBrains+Mono:wght@400;500&amp;display=swap">
<link rel="stylesheet" href="{stylesheet}">{style}
</head>"#,
        title = escape(&title),
        description = attr(description),
        keywords = keywords,
        name = attr(&site.site.name),
        url = url,
        locale = attr(&site.meta.locale),
        twitter_description = attr(twitter_description),
        stylesheet = STYLESHEET,
        style = style,
    )
}

/// Render the complete `index.html`.
///
/// The loading schedule and the particle field draw from one `StdRng`
/// seeded with `build.seed`, so equal inputs give byte-identical output.
pub fn render_page(site: &SiteData, config: &BuildConfig, year: i32) -> FolioResult<String> {
    let ctx = RenderContext::new(site, config, year);
    let mut rng = StdRng::seed_from_u64(config.build.seed);
    let loading = LoadingSchedule::generate(&mut rng);
    let state = PageState::new(site, config, &loading);

    let scene = if config.scene.enabled {
        let data = SceneData::build(&mut rng, config.scene.particles);
        format!("\n{}", json_script(SCENE_ID, &data)?)
    } else {
        String::new()
    };

    let main = [
        sections::hero::render(&ctx),
        sections::about::render(&ctx),
        sections::skills::render(&ctx),
        sections::projects::render(&ctx),
        sections::experience::render(&ctx),
        sections::contact::render(&ctx),
    ]
    .join("\n");

    let body_class = if config.motion.enabled { "" } else { r#" class="no-motion""# };

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark scroll-smooth">
{head}
<body{body_class}>
<div class="noise-overlay" aria-hidden="true"></div>
{loading}
{navbar}
<main>
{main}
</main>
{footer}
{state}{scene}
<script src="{script}" defer></script>
</body>
</html>
"#,
        head = head(site, &sections::loading::keyframes(&ctx, &loading)),
        body_class = body_class,
        loading = sections::loading::render(&ctx, &loading),
        navbar = sections::navbar::render(&ctx),
        main = main,
        footer = sections::footer::render(&ctx),
        state = json_script(STATE_ID, &state)?,
        scene = scene,
        script = SCRIPT,
    ))
}

/// Section ids present in rendered markup, in document order
pub fn rendered_sections(markup: &str) -> Vec<&'static str> {
    let mut found: Vec<(usize, &'static str)> = SECTION_IDS
        .iter()
        .filter_map(|id| {
            markup
                .find(&format!(r#"<section id="{}""#, id))
                .map(|pos| (pos, *id))
        })
        .collect();
    found.sort_by_key(|(pos, _)| *pos);
    found.into_iter().map(|(_, id)| id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::count_items;

    fn starter_page(config: &BuildConfig) -> String {
        let site = SiteData::starter().unwrap();
        render_page(&site, config, 2025).unwrap()
    }

    #[test]
    fn test_sections_in_page_order() {
        let page = starter_page(&BuildConfig::default());
        assert_eq!(rendered_sections(&page), SECTION_IDS.to_vec());
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<html lang="en" class="dark scroll-smooth">"#));
        assert!(page.contains("noise-overlay"));
    }

    #[test]
    fn test_list_counts_match_configuration() {
        let site = SiteData::starter().unwrap();
        let page = render_page(&site, &BuildConfig::default(), 2025).unwrap();

        assert_eq!(count_items(&page, "nav"), site.nav.len());
        assert_eq!(count_items(&page, "skill"), site.skills.skill_count());
        assert_eq!(count_items(&page, "project"), site.projects.len());
        assert_eq!(count_items(&page, "experience"), site.experience.len());
        assert_eq!(count_items(&page, "role"), site.roles.len());
    }

    #[test]
    fn test_metadata() {
        let page = starter_page(&BuildConfig::default());
        assert!(page.contains("<title>Atharva Awate | Software Engineer &amp; Full-Stack Developer</title>"));
        assert!(page.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(page.contains(r#"<meta property="og:locale" content="en_US">"#));
        assert!(page.contains(r#"<link rel="canonical" href="https://atharva-awate.dev">"#));
        assert!(page.contains(r#"<meta name="robots" content="index, follow">"#));
    }

    #[test]
    fn test_locale_defaults_without_meta_table() {
        let content = "[site]\nname = \"Ada Lovelace\"\ntitle = \"Analyst\"\ndescription = \"Notes\"\nemail = \"ada@example.com\"\n";
        let (site, _) = SiteData::from_toml_str(content, std::path::Path::new("site.toml")).unwrap();
        let page = render_page(&site, &BuildConfig::default(), 2025).unwrap();
        assert!(page.contains(r#"<meta property="og:locale" content="en_US">"#));
    }

    #[test]
    fn test_same_seed_same_output() {
        let config = BuildConfig::default();
        assert_eq!(starter_page(&config), starter_page(&config));

        let mut other = BuildConfig::default();
        other.build.seed = 42;
        assert_ne!(starter_page(&config), starter_page(&other));
    }

    #[test]
    fn test_data_islands() {
        let page = starter_page(&BuildConfig::default());
        assert!(page.contains(r#"id="folio-state""#));
        assert!(page.contains(r#"id="scene-data""#));
        assert!(page.contains(r#""rotation_ms":3000"#));
        assert!(page.contains("@keyframes folio-loading"));

        let mut config = BuildConfig::default();
        config.scene.enabled = false;
        config.motion.loading_screen = false;
        let page = starter_page(&config);
        assert!(!page.contains(r#"id="scene-data""#));
        assert!(!page.contains("@keyframes folio-loading"));
        assert!(page.contains(r#""loading":null"#));
    }

    #[test]
    fn test_motion_disabled() {
        let mut config = BuildConfig::default();
        config.motion.enabled = false;
        let page = starter_page(&config);
        assert!(!page.contains("data-reveal"));
        assert!(page.contains(r#"<body class="no-motion">"#));
        assert!(page.contains(r#""tweens":[]"#));
    }
}
