//! Skills: one tab and one panel per category, plus the full stack cloud
//!
//! Every panel is rendered; the runtime only toggles `hidden`. With
//! scripting disabled the first category stays visible.

use std::fmt::Write;

use crate::motion::{self, fmt_num};
use crate::render::html::{attr, escape, icon};
use crate::render::RenderContext;

use super::section_header;

/// Skill bars fill over one second, staggered by index
const BAR_FILL_SECONDS: f64 = 1.0;

fn tabs(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    for (index, category) in ctx.site.skills.categories.iter().enumerate() {
        let selected = index == 0;
        let _ = write!(
            out,
            r#"<button class="skill-tab{active}" type="button" role="tab" id="skill-tab-{index}" aria-selected="{selected}" aria-controls="skill-panel-{index}" data-item="skill-category" data-tab="{index}">{icon}<span>{name}</span></button>"#,
            active = if selected { " is-active" } else { "" },
            index = index,
            selected = selected,
            icon = icon(&category.icon, "icon-md"),
            name = escape(&category.name),
        );
    }
    out
}

fn panels(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    for (index, category) in ctx.site.skills.categories.iter().enumerate() {
        let mut bars = String::new();
        for (position, skill) in category.skills.iter().enumerate() {
            let level = skill.level.min(100);
            let _ = write!(
                bars,
                r#"<div class="skill glass card-hover" data-item="skill"{reveal}><div class="skill-head"><h3>{name}</h3><span class="skill-level">{level}%</span></div><div class="skill-bar" role="progressbar" aria-label="{label}" aria-valuemin="0" aria-valuemax="100" aria-valuenow="{level}"><div class="skill-bar-fill" style="width:{level}%;--fill-delay:{delay}s;--fill-duration:{duration}s"></div></div></div>"#,
                reveal = ctx.reveal(&motion::list_item(position)),
                name = escape(&skill.name),
                label = attr(&skill.name),
                level = level,
                delay = fmt_num(motion::stagger(0.0, motion::STAGGER_STEP, position)),
                duration = fmt_num(BAR_FILL_SECONDS),
            );
        }
        let _ = write!(
            out,
            r#"<div class="skill-panel" role="tabpanel" id="skill-panel-{index}" aria-labelledby="skill-tab-{index}" data-panel="{index}"{hidden}>{bars}</div>"#,
            index = index,
            hidden = if index == 0 { "" } else { " hidden" },
            bars = bars,
        );
    }
    out
}

fn stack(ctx: &RenderContext<'_>) -> String {
    ctx.site
        .skills
        .categories
        .iter()
        .flat_map(|category| category.skills.iter())
        .map(|skill| format!(r#"<span class="tech-badge">{}</span>"#, escape(&skill.name)))
        .collect()
}

pub fn render(ctx: &RenderContext<'_>) -> String {
    let stack_reveal = motion::Reveal::new(
        motion::Offset::fade_up(30.0),
        motion::Transition::new(0.6).delayed(0.4),
    );
    format!(
        r#"<section id="skills" class="section skills">
<div class="bg-grid bg-grid-faint" aria-hidden="true"></div>
<div class="container">
{header}
<div class="skill-tabs" role="tablist"{controls}>{tabs}</div>
<div class="skill-panels">{panels}</div>
<div class="skill-stack"{stack_reveal}><p>Full Technology Stack</p><div class="tech-cloud">{stack}</div></div>
</div>
</section>"#,
        header = section_header(
            ctx,
            "// Technical Skills",
            "Technologies I Work With",
            Some("A comprehensive toolkit of modern technologies that I use to build robust, scalable applications"),
        ),
        controls = ctx.reveal(&motion::SECTION_CONTROLS),
        tabs = tabs(ctx),
        panels = panels(ctx),
        stack_reveal = ctx.reveal(&stack_reveal),
        stack = stack(ctx),
    )
}
