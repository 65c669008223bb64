//! Page rendering
//!
//! Each section renders independently from the shared `RenderContext`.
//! List items carry `data-item="<kind>"` so the rendered count of any
//! content list can be checked against the configuration object.

pub mod html;
pub mod page;
pub mod sections;

use crate::config::BuildConfig;
use crate::models::SiteData;
use crate::motion::Reveal;

pub use page::render_page;

/// Inputs shared by every section renderer
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a SiteData,
    pub config: &'a BuildConfig,
    /// Copyright year shown in the footer
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    pub fn new(site: &'a SiteData, config: &'a BuildConfig, year: i32) -> Self {
        Self { site, config, year }
    }

    /// Reveal attributes, or nothing when motion is disabled
    pub fn reveal(&self, reveal: &Reveal) -> String {
        if self.config.motion.enabled {
            reveal.attrs()
        } else {
            String::new()
        }
    }
}

/// Count elements tagged `data-item="<kind>"` in rendered markup
pub fn count_items(markup: &str, kind: &str) -> usize {
    markup.matches(&format!(r#"data-item="{}""#, kind)).count()
}
