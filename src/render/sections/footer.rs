//! Footer: brand, copyright year, social links and back-to-top

use crate::render::html::{attr, escape, icon, EXTERNAL};
use crate::render::RenderContext;

pub fn render(ctx: &RenderContext<'_>) -> String {
    let site = &ctx.site.site;
    let mut links: String = site
        .social
        .entries()
        .into_iter()
        .map(|(label, url)| {
            format!(
                r#"<a class="footer-link" href="{}" {} aria-label="{}" data-item="footer-link">{}</a>"#,
                attr(url),
                EXTERNAL,
                label,
                icon(&label.to_lowercase(), "icon-md")
            )
        })
        .collect();
    links.push_str(&format!(
        r#"<a class="footer-link" href="mailto:{}" aria-label="Email" data-item="footer-link">{}</a>"#,
        attr(&site.email),
        icon("mail", "icon-md")
    ));

    let made_in = if site.location.is_empty() {
        format!("Made with {}", icon("heart", "icon-sm heart"))
    } else {
        format!(
            "Made with {} in {}",
            icon("heart", "icon-sm heart"),
            escape(&site.location)
        )
    };

    format!(
        r##"<footer class="site-footer">
<div class="container footer-row">
<div class="footer-brand"><a class="logo" href="#home" data-nav="home"><span class="logo-badge">{initial}</span><span class="logo-name">{name}</span></a><p class="footer-copy">&copy; {year} {made_in}</p></div>
<div class="footer-links">{links}</div>
<button class="back-to-top glass" type="button" data-back-to-top aria-label="Back to top">{arrow}<span>Back to top</span></button>
</div>
<p class="footer-credit">Designed &amp; Built by {name} using Rust and a little JavaScript</p>
</footer>"##,
        initial = escape(&site.initial()),
        name = escape(&site.name),
        year = ctx.year,
        made_in = made_in,
        links = links,
        arrow = icon("arrow-up", "icon-sm"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::models::SiteData;
    use crate::render::count_items;

    #[test]
    fn test_year_and_links() {
        let site = SiteData::starter().unwrap();
        let config = BuildConfig::default();
        let out = render(&RenderContext::new(&site, &config, 2031));

        assert!(out.contains("&copy; 2031 Made with"));
        assert!(out.contains("in India"));
        // GitHub, LinkedIn, Email
        assert_eq!(count_items(&out, "footer-link"), 3);
        assert!(out.contains("data-back-to-top"));
    }
}
