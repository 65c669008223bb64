//! Projects: category filter, project cards and one detail dialog per project

use std::fmt::Write;

use crate::models::Project;
use crate::motion;
use crate::projects::{categories, ALL_CATEGORIES, CARD_TAG_LIMIT};
use crate::render::html::{attr, escape, icon, EXTERNAL};
use crate::render::RenderContext;

use super::section_header;

fn filters(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    for category in categories(&ctx.site.projects) {
        let active = category == ALL_CATEGORIES;
        let _ = write!(
            out,
            r#"<button class="filter-btn{active}" type="button" aria-pressed="{active_bool}" data-item="project-filter" data-filter="{value}">{label}</button>"#,
            active = if active { " is-active" } else { "" },
            active_bool = active,
            value = attr(&category),
            label = escape(&category),
        );
    }
    out
}

fn tag_badges(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!(r#"<span class="tech-badge">{}</span>"#, escape(tag)))
        .collect()
}

/// Icon links to the repository and live demo. Empty urls are skipped.
fn card_links(project: &Project) -> String {
    let mut out = String::new();
    if !project.github.is_empty() {
        let _ = write!(
            out,
            r#"<a class="icon-btn glass" href="{}" {} aria-label="View {} on GitHub">{}</a>"#,
            attr(&project.github),
            EXTERNAL,
            attr(&project.title),
            icon("github", "icon-md")
        );
    }
    if !project.demo.is_empty() {
        let _ = write!(
            out,
            r#"<a class="icon-btn glass" href="{}" {} aria-label="View {} live demo">{}</a>"#,
            attr(&project.demo),
            EXTERNAL,
            attr(&project.title),
            icon("external-link", "icon-md")
        );
    }
    out
}

fn card(ctx: &RenderContext<'_>, index: usize, project: &Project) -> String {
    let (shown, hidden) = project.tag_preview(CARD_TAG_LIMIT);
    let more = if hidden > 0 {
        format!(r#"<span class="tech-badge">+{}</span>"#, hidden)
    } else {
        String::new()
    };
    format!(
        r#"<article class="project-card glass card-hover{featured}" data-item="project" data-category="{category}" data-project="{id}"{reveal}>
<div class="project-media"><span class="project-number">{id}</span><span class="category-badge">{category_text}</span></div>
<div class="project-body">
<h3>{title}</h3>
<p class="project-summary">{description}</p>
<div class="project-tags">{tags}{more}</div>
<div class="project-actions"><div class="project-links">{links}</div><button class="details-btn" type="button" data-open-project="{id}" aria-haspopup="dialog" aria-controls="project-dialog-{id}">View Details{chevron}</button></div>
</div>
</article>"#,
        featured = if project.featured { " is-featured" } else { "" },
        category = attr(&project.category),
        id = project.id,
        reveal = ctx.reveal(&motion::card(index)),
        category_text = escape(&project.category),
        title = escape(&project.title),
        description = escape(&project.description),
        tags = tag_badges(shown),
        more = more,
        links = card_links(project),
        chevron = icon("chevron-right", "icon-sm"),
    )
}

fn dialog(project: &Project) -> String {
    let mut actions = String::new();
    if !project.github.is_empty() {
        let _ = write!(
            actions,
            r#"<a class="btn-secondary" href="{}" {}>{}View Code</a>"#,
            attr(&project.github),
            EXTERNAL,
            icon("github", "icon-md")
        );
    }
    if !project.demo.is_empty() {
        let _ = write!(
            actions,
            r#"<a class="btn-primary" href="{}" {}>{}Live Demo</a>"#,
            attr(&project.demo),
            EXTERNAL,
            icon("external-link", "icon-md")
        );
    }
    let body = if project.long_description.is_empty() {
        &project.description
    } else {
        &project.long_description
    };
    format!(
        r#"<dialog class="project-dialog glass-strong" id="project-dialog-{id}" data-item="project-dialog" data-dialog="{id}" aria-labelledby="project-dialog-title-{id}">
<button class="dialog-close glass" type="button" data-close-dialog aria-label="Close modal">{close}</button>
<div class="dialog-media"><span class="project-number">{id}</span><span class="category-badge">{category}</span></div>
<div class="dialog-body">
<h2 id="project-dialog-title-{id}">{title}</h2>
<p>{body}</p>
<h3 class="dialog-label">Tech Stack</h3>
<div class="project-tags">{tags}</div>
<div class="dialog-actions">{actions}</div>
</div>
</dialog>"#,
        id = project.id,
        close = icon("x", "icon-lg"),
        category = escape(&project.category),
        title = escape(&project.title),
        body = escape(body),
        tags = tag_badges(&project.tags),
        actions = actions,
    )
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let projects = &ctx.site.projects;
    let cards: String = projects
        .iter()
        .enumerate()
        .map(|(index, project)| card(ctx, index, project))
        .collect::<Vec<_>>()
        .join("\n");
    let dialogs: String = projects.iter().map(dialog).collect::<Vec<_>>().join("\n");

    let more = ctx
        .site
        .site
        .social
        .github
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| {
            let reveal = motion::Reveal::new(
                motion::Offset::fade_up(20.0),
                motion::Transition::new(0.6).delayed(0.4),
            );
            format!(
                r#"<div class="projects-more"{}><a href="{}" {}>{}View more on GitHub{}</a></div>"#,
                ctx.reveal(&reveal),
                attr(url),
                EXTERNAL,
                icon("github", "icon-md"),
                icon("chevron-right", "icon-sm")
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section id="projects" class="section projects">
<div class="container">
{header}
<div class="project-filters" role="group" aria-label="Filter projects"{controls}>{filters}</div>
<div class="project-grid" data-project-grid>
{cards}
</div>
<p class="projects-empty" data-projects-empty hidden>No projects in this category yet.</p>
{more}
</div>
{dialogs}
</section>"#,
        header = section_header(
            ctx,
            "// Featured Work",
            "Projects I've Built",
            Some("A selection of projects that showcase my skills in building full-stack applications with modern technologies"),
        ),
        controls = ctx.reveal(&motion::SECTION_CONTROLS),
        filters = filters(ctx),
        cards = cards,
        more = more,
        dialogs = dialogs,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::models::SiteData;
    use crate::render::count_items;

    #[test]
    fn test_cards_dialogs_and_filters() {
        let site = SiteData::starter().unwrap();
        let config = BuildConfig::default();
        let out = render(&RenderContext::new(&site, &config, 2025));

        assert_eq!(count_items(&out, "project"), site.projects.len());
        assert_eq!(count_items(&out, "project-dialog"), site.projects.len());
        // All, Full-Stack, Frontend, Backend
        assert_eq!(count_items(&out, "project-filter"), 4);
        assert!(out.contains(r#"data-category="Full-Stack""#));
        assert!(out.contains("Projects I&#39;ve Built"));
    }

    #[test]
    fn test_tag_overflow_badge() {
        let site = SiteData::starter().unwrap();
        let config = BuildConfig::default();
        let out = render(&RenderContext::new(&site, &config, 2025));

        // projects 1, 2 and 4 carry six tags, 3 and 5 carry five
        assert_eq!(out.matches(r#"<span class="tech-badge">+2</span>"#).count(), 3);
        assert_eq!(out.matches(r#"<span class="tech-badge">+1</span>"#).count(), 2);
    }

    #[test]
    fn test_empty_links_are_skipped() {
        let mut site = SiteData::starter().unwrap();
        site.projects.truncate(1);
        site.projects[0].github.clear();
        site.projects[0].demo.clear();
        let config = BuildConfig::default();
        let out = render(&RenderContext::new(&site, &config, 2025));

        assert!(!out.contains("View Code"));
        assert!(!out.contains("Live Demo"));
        assert!(!out.contains("live demo"));
    }
}
