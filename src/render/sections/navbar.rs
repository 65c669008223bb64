//! Fixed header with desktop links, call-to-action and the mobile menu

use std::fmt::Write;

use crate::nav::INITIAL_SECTION;
use crate::render::html::{attr, escape, icon};
use crate::render::RenderContext;

pub fn render(ctx: &RenderContext<'_>) -> String {
    let site = &ctx.site.site;
    let mut desktop = String::new();
    let mut mobile = String::new();

    for (index, item) in ctx.site.nav.iter().enumerate() {
        let active = item.section_id() == INITIAL_SECTION;
        let _ = write!(
            desktop,
            r#"<li data-item="nav"><a class="nav-link{active}" href="{href}" data-nav="{id}">{name}</a></li>"#,
            active = if active { " is-active" } else { "" },
            href = attr(&item.href),
            id = attr(item.section_id()),
            name = escape(&item.name),
        );
        let _ = write!(
            mobile,
            r#"<li data-item="nav-mobile" style="--menu-delay:{delay}s"><a class="mobile-link{active}" href="{href}" data-nav="{id}">{name}</a></li>"#,
            delay = crate::motion::fmt_num(index as f64 * 0.1),
            active = if active { " is-active" } else { "" },
            href = attr(&item.href),
            id = attr(item.section_id()),
            name = escape(&item.name),
        );
    }

    format!(
        r##"<header class="site-header" data-header>
<nav class="container nav-bar" aria-label="Primary">
<a class="logo" href="#home" data-nav="home"><span class="logo-badge">{initial}</span><span class="logo-name">{first}</span></a>
<ul class="nav-links">{desktop}</ul>
<a class="btn-primary nav-cta" href="#contact" data-nav="contact">Let&#39;s Talk</a>
<button class="menu-toggle" type="button" aria-label="Toggle menu" aria-expanded="false" aria-controls="mobile-menu" data-menu-toggle><span class="when-closed">{menu}</span><span class="when-open">{close}</span></button>
</nav>
</header>
<div class="mobile-menu" id="mobile-menu" hidden data-mobile-menu>
<div class="mobile-backdrop" data-menu-close></div>
<nav class="mobile-panel" aria-label="Mobile">
<ul class="mobile-links">{mobile}</ul>
<a class="btn-primary mobile-cta" href="#contact" data-nav="contact">Let&#39;s Talk</a>
</nav>
</div>"##,
        initial = escape(&site.initial()),
        first = escape(site.first_name()),
        desktop = desktop,
        menu = icon("menu", "icon-md"),
        close = icon("x", "icon-md"),
        mobile = mobile,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::models::SiteData;
    use crate::render::count_items;

    #[test]
    fn test_one_link_per_nav_item() {
        let site = SiteData::starter().unwrap();
        let config = BuildConfig::default();
        let out = render(&RenderContext::new(&site, &config, 2025));
        assert_eq!(count_items(&out, "nav"), site.nav.len());
        assert_eq!(count_items(&out, "nav-mobile"), site.nav.len());
        assert!(out.contains(r#"<span class="logo-name">Atharva</span>"#));
        assert_eq!(out.matches("is-active").count(), 2);
    }
}
