//! Loading overlay shown before the page is revealed

use crate::loading::LoadingSchedule;
use crate::render::html::escape;
use crate::render::RenderContext;

/// Keyframes animation name used by the progress bar
pub const KEYFRAMES: &str = "folio-loading";

/// Overlay markup, or nothing when the loading screen is disabled
pub fn render(ctx: &RenderContext<'_>, schedule: &LoadingSchedule) -> String {
    if !ctx.config.motion.loading_screen {
        return String::new();
    }
    format!(
        r#"<div class="loading-screen" data-loading aria-hidden="true" style="--loading-duration:{hide}ms;--loading-fade:{fade}ms">
<div class="loading-badge"><span>{initial}</span></div>
<div class="loading-track"><div class="loading-bar" style="width:{final_width:.2}%;animation:{name} {hide}ms linear both"></div></div>
<p class="loading-text">Loading experience...</p>
</div>"#,
        hide = schedule.hide_after_ms,
        fade = schedule.fade_ms,
        initial = escape(&ctx.site.site.initial()),
        final_width = schedule.final_width(),
        name = KEYFRAMES,
    )
}

/// Keyframes for the `<style>` block, empty when the overlay is off
pub fn keyframes(ctx: &RenderContext<'_>, schedule: &LoadingSchedule) -> String {
    if ctx.config.motion.loading_screen {
        schedule.to_keyframes(KEYFRAMES)
    } else {
        String::new()
    }
}
