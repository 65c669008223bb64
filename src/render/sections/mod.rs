//! Section renderers, in page order

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod loading;
pub mod navbar;
pub mod projects;
pub mod skills;

use super::html::escape;
use super::RenderContext;
use crate::motion;

/// Shared section heading: eyebrow, title, optional lede and accent bar
pub(crate) fn section_header(ctx: &RenderContext<'_>, eyebrow: &str, title: &str, lede: Option<&str>) -> String {
    let lede = lede
        .map(|text| format!(r#"<p class="section-lede">{}</p>"#, escape(text)))
        .unwrap_or_default();
    format!(
        r#"<div class="section-header"{reveal}><span class="eyebrow">{eyebrow}</span><h2 class="section-title">{title}</h2>{lede}<div class="accent-bar"></div></div>"#,
        reveal = ctx.reveal(&motion::SECTION_HEADER),
        eyebrow = escape(eyebrow),
        title = escape(title),
        lede = lede,
    )
}
