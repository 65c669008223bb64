//! About: headline, narrative copy, highlight stats and strength cards

use std::fmt::Write;

use crate::motion;
use crate::render::html::{escape, icon};
use crate::render::RenderContext;

use super::section_header;

pub fn render(ctx: &RenderContext<'_>) -> String {
    let about = &ctx.site.about;

    // Copy column children share one stagger sequence
    let mut step = 0;
    let mut copy = String::new();
    let _ = write!(
        copy,
        r#"<p class="about-description"{}>{}</p>"#,
        ctx.reveal(&motion::list_item(step)),
        escape(&about.description)
    );
    for paragraph in &about.paragraphs {
        step += 1;
        let _ = write!(
            copy,
            r#"<p class="about-paragraph" data-item="paragraph"{}>{}</p>"#,
            ctx.reveal(&motion::list_item(step)),
            escape(paragraph)
        );
    }

    let mut stats = String::new();
    for highlight in &about.highlights {
        let _ = write!(
            stats,
            r#"<div class="stat glass card-hover" data-item="highlight"><div class="stat-value gradient-text">{}</div><div class="stat-label">{}</div></div>"#,
            escape(&highlight.value),
            escape(&highlight.label)
        );
    }
    if !stats.is_empty() {
        step += 1;
        let _ = write!(
            copy,
            r#"<div class="about-stats"{}>{}</div>"#,
            ctx.reveal(&motion::list_item(step)),
            stats
        );
    }

    let mut features = String::new();
    for (index, feature) in about.features.iter().enumerate() {
        let _ = write!(
            features,
            r#"<div class="feature glass card-hover{offset}" data-item="feature"{reveal}><div class="feature-icon">{icon}</div><h3>{title}</h3><p>{description}</p></div>"#,
            offset = if index % 2 == 1 { " feature-offset" } else { "" },
            reveal = ctx.reveal(&motion::list_item(index)),
            icon = icon(&feature.icon, "icon-lg"),
            title = escape(&feature.title),
            description = escape(&feature.description),
        );
    }

    format!(
        r#"<section id="about" class="section about">
<div class="accent-glow accent-glow-right" aria-hidden="true"></div>
<div class="accent-glow accent-glow-left" aria-hidden="true"></div>
<div class="container">
{header}
<div class="about-grid">
<div class="about-copy">{copy}</div>
<div class="about-features">{features}</div>
</div>
</div>
</section>"#,
        header = section_header(ctx, "// About Me", &about.headline, None),
        copy = copy,
        features = features,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::models::SiteData;
    use crate::render::count_items;

    #[test]
    fn test_counts_match_content() {
        let site = SiteData::starter().unwrap();
        let config = BuildConfig::default();
        let out = render(&RenderContext::new(&site, &config, 2025));

        assert_eq!(count_items(&out, "paragraph"), site.about.paragraphs.len());
        assert_eq!(count_items(&out, "highlight"), site.about.highlights.len());
        assert_eq!(count_items(&out, "feature"), site.about.features.len());
        assert!(out.contains("Building Digital Solutions That Scale"));
        assert_eq!(out.matches("feature-offset").count(), 2);
    }

    #[test]
    fn test_empty_about_renders_header_only() {
        let mut site = SiteData::starter().unwrap();
        site.about = Default::default();
        let config = BuildConfig::default();
        let out = render(&RenderContext::new(&site, &config, 2025));

        assert_eq!(count_items(&out, "highlight"), 0);
        assert!(!out.contains("about-stats"));
        assert!(out.contains(r#"id="about""#));
    }
}
