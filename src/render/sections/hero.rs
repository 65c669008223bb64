//! Hero: animated name, rotating role, calls to action and the 3D backdrop

use std::fmt::Write;

use crate::motion::{self, fmt_num, HERO_LETTERS};
use crate::render::html::{attr, escape, icon, EXTERNAL};
use crate::render::RenderContext;

/// Split the name into individually animated letters
fn name_letters(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    for (index, ch) in ctx.site.site.name.chars().enumerate() {
        if ch == ' ' {
            out.push_str(r#"<span class="letter letter-space">&nbsp;</span>"#);
            continue;
        }
        let style = if ctx.config.motion.enabled {
            format!(
                r#" style="--letter-delay:{}s;--letter-duration:{}s;--letter-from:{}px""#,
                fmt_num(HERO_LETTERS.delay_for(index)),
                fmt_num(HERO_LETTERS.transition.duration),
                fmt_num(HERO_LETTERS.from_y),
            )
        } else {
            String::new()
        };
        let mut buf = [0u8; 4];
        let _ = write!(
            out,
            r#"<span class="letter"{}>{}</span>"#,
            style,
            escape(ch.encode_utf8(&mut buf))
        );
    }
    out
}

fn roles(ctx: &RenderContext<'_>) -> String {
    ctx.site
        .roles
        .iter()
        .enumerate()
        .map(|(index, role)| {
            format!(
                r#"<span class="role gradient-text{}" data-item="role"{}>{}</span>"#,
                if index == 0 { " is-current" } else { "" },
                if index == 0 { "" } else { r#" aria-hidden="true""# },
                escape(role)
            )
        })
        .collect()
}

fn socials(ctx: &RenderContext<'_>) -> String {
    ctx.site
        .site
        .social
        .entries()
        .into_iter()
        .map(|(label, url)| {
            format!(
                r#"<a class="social-round" href="{}" {} aria-label="{} Profile">{}</a>"#,
                attr(url),
                EXTERNAL,
                label,
                icon(&label.to_lowercase(), "icon-md")
            )
        })
        .collect()
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let site = &ctx.site.site;
    let scene = if ctx.config.scene.enabled {
        r#"<canvas class="hero-scene" data-scene aria-hidden="true"></canvas>"#
    } else {
        ""
    };
    let resume = site
        .resume_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .map(|url| {
            format!(
                r#"<a class="btn-secondary" href="{}" {}>{}Download Resume</a>"#,
                attr(url),
                EXTERNAL,
                icon("download", "icon-md")
            )
        })
        .unwrap_or_default();

    format!(
        r##"<section id="home" class="hero">
<div class="gradient-orb gradient-orb-1" aria-hidden="true"></div>
<div class="gradient-orb gradient-orb-2" aria-hidden="true"></div>
<div class="hero-fallback" aria-hidden="true"></div>
{scene}
<div class="bg-grid" aria-hidden="true"></div>
<div class="hero-content">
<p class="hero-greeting"{r0}>Hello, I&#39;m</p>
<h1 class="hero-name" aria-label="{name_label}">{letters}</h1>
<div class="hero-roles" data-roles aria-live="polite">{roles}</div>
<p class="hero-description"{r2}>{description}</p>
<div class="hero-actions"{r3}>
<a class="btn-primary" href="#projects" data-nav="projects">{external}View Projects</a>
{resume}
</div>
<div class="hero-socials"{r4}>{socials}</div>
</div>
<a class="scroll-indicator" href="#about" data-nav="about" aria-label="Scroll to about section"><span>Scroll</span>{arrow}</a>
</section>"##,
        scene = scene,
        r0 = ctx.reveal(&motion::hero_block(0)),
        name_label = attr(&site.name),
        letters = name_letters(ctx),
        roles = roles(ctx),
        r2 = ctx.reveal(&motion::hero_block(2)),
        description = escape(&site.description),
        r3 = ctx.reveal(&motion::hero_block(3)),
        external = icon("external-link", "icon-md"),
        resume = resume,
        r4 = ctx.reveal(&motion::hero_block(4)),
        socials = socials(ctx),
        arrow = icon("arrow-down", "icon-sm"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::models::SiteData;
    use crate::render::count_items;

    #[test]
    fn test_letters_and_roles() {
        let site = SiteData::starter().unwrap();
        let config = BuildConfig::default();
        let out = render(&RenderContext::new(&site, &config, 2025));

        assert_eq!(count_items(&out, "role"), site.roles.len());
        // "Atharva Awate": 12 letters and one space
        assert_eq!(out.matches(r#"<span class="letter" style"#).count(), 12);
        assert_eq!(out.matches("letter-space").count(), 1);
        assert!(out.contains("data-scene"));
        assert!(out.contains("Download Resume"));
    }

    #[test]
    fn test_scene_and_motion_disabled() {
        let site = SiteData::starter().unwrap();
        let mut config = BuildConfig::default();
        config.scene.enabled = false;
        config.motion.enabled = false;
        let out = render(&RenderContext::new(&site, &config, 2025));

        assert!(!out.contains("data-scene"));
        assert!(!out.contains("data-reveal"));
        assert!(!out.contains("--letter-delay"));
        assert_eq!(out.matches(r#"<span class="letter">"#).count(), 12);
    }
}
