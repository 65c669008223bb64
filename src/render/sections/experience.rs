//! Experience timeline. Entries alternate sides and slide in from their side.

use std::fmt::Write;

use crate::models::Experience;
use crate::motion;
use crate::render::html::{escape, icon};
use crate::render::RenderContext;

use super::section_header;

/// Horizontal slide distance of timeline entries
const SLIDE: f64 = 50.0;

fn entry_reveal(index: usize) -> motion::Reveal {
    let x = if index % 2 == 0 { -SLIDE } else { SLIDE };
    motion::Reveal::new(
        motion::Offset::slide_x(x),
        motion::Transition::new(0.6).delayed(motion::stagger(0.0, motion::STAGGER_STEP, index)),
    )
    .with_margin(motion::CARD_MARGIN)
}

fn entry(ctx: &RenderContext<'_>, index: usize, item: &Experience) -> String {
    let bullets: String = item
        .description
        .iter()
        .map(|line| {
            format!(
                r#"<li data-item="experience-bullet">{}<span>{}</span></li>"#,
                icon("chevron-right", "icon-sm"),
                escape(line)
            )
        })
        .collect();
    let tags: String = item
        .technologies
        .iter()
        .map(|tech| format!(r#"<span class="tech-badge">{}</span>"#, escape(tech)))
        .collect();

    let mut meta = String::new();
    let _ = write!(
        meta,
        r#"<span>{}{}</span>"#,
        icon("calendar", "icon-sm"),
        escape(&item.period)
    );
    if !item.location.is_empty() {
        let _ = write!(
            meta,
            r#"<span>{}{}</span>"#,
            icon("map-pin", "icon-sm"),
            escape(&item.location)
        );
    }

    format!(
        r#"<li class="timeline-entry {side}" data-item="experience"{reveal}>
<span class="timeline-dot" aria-hidden="true">{briefcase}</span>
<article class="timeline-card glass card-hover">
<h3>{title}</h3>
<p class="timeline-company gradient-text">{company}</p>
<div class="timeline-meta">{meta}</div>
<ul class="timeline-bullets">{bullets}</ul>
<div class="timeline-tags">{tags}</div>
</article>
</li>"#,
        side = if index % 2 == 0 { "is-left" } else { "is-right" },
        reveal = ctx.reveal(&entry_reveal(index)),
        briefcase = icon("briefcase", "icon-sm"),
        title = escape(&item.title),
        company = escape(&item.company),
        meta = meta,
        bullets = bullets,
        tags = tags,
    )
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let entries: Vec<String> = ctx
        .site
        .experience
        .iter()
        .enumerate()
        .map(|(index, item)| entry(ctx, index, item))
        .collect();

    format!(
        r#"<section id="experience" class="section experience">
<div class="container">
{header}
<ol class="timeline">
<li class="timeline-line" aria-hidden="true"></li>
{entries}
</ol>
</div>
</section>"#,
        header = section_header(
            ctx,
            "// Experience",
            "My Journey",
            Some("A timeline of my professional experience and growth as a software developer"),
        ),
        entries = entries.join("\n"),
    )
}
