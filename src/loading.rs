//! Simulated loading screen
//!
//! Progress is decoration: every tick adds a random step until it reaches
//! 100, independent of what the browser is actually loading. The overlay
//! stays up for a fixed minimum time and then fades out.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;

/// Interval between progress steps
pub const TICK: Duration = Duration::from_millis(150);

/// Largest single progress step (exclusive)
pub const MAX_STEP: f64 = 15.0;

/// Overlay stays visible this long after mount
pub const MIN_DISPLAY: Duration = Duration::from_millis(2000);

/// Fade-out duration once the overlay is dismissed
pub const FADE_OUT: Duration = Duration::from_millis(500);

/// Progress counter driven by ticks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadingProgress {
    value: f64,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw accumulated value, may overshoot 100 on the final step
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Bar width in percent
    pub fn width(&self) -> f64 {
        self.value.min(100.0)
    }

    pub fn is_complete(&self) -> bool {
        self.value >= 100.0
    }

    /// Apply one tick. Returns false once progress has stopped.
    pub fn tick(&mut self, rng: &mut impl Rng) -> bool {
        if self.is_complete() {
            self.value = 100.0;
            return false;
        }
        self.value += rng.gen::<f64>() * MAX_STEP;
        true
    }
}

/// One sampled bar width, `at_ms` after mount
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressSample {
    pub at_ms: u64,
    pub width: f64,
}

/// Progress samples for the visible lifetime of the overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadingSchedule {
    pub samples: Vec<ProgressSample>,
    pub hide_after_ms: u64,
    pub fade_ms: u64,
}

impl LoadingSchedule {
    /// Run the tick loop for the display window and record each width
    pub fn generate(rng: &mut impl Rng) -> Self {
        let hide_after_ms = MIN_DISPLAY.as_millis() as u64;
        let tick_ms = TICK.as_millis() as u64;

        let mut progress = LoadingProgress::new();
        let mut samples = vec![ProgressSample { at_ms: 0, width: 0.0 }];
        let mut at_ms = tick_ms;
        while at_ms <= hide_after_ms {
            if !progress.tick(rng) {
                break;
            }
            samples.push(ProgressSample {
                at_ms,
                width: progress.width(),
            });
            at_ms += tick_ms;
        }

        Self {
            samples,
            hide_after_ms,
            fade_ms: FADE_OUT.as_millis() as u64,
        }
    }

    /// Width shown when the overlay is dismissed
    pub fn final_width(&self) -> f64 {
        self.samples.last().map(|s| s.width).unwrap_or(0.0)
    }

    /// CSS keyframes animating the bar through the sampled widths
    pub fn to_keyframes(&self, name: &str) -> String {
        let mut css = format!("@keyframes {} {{\n", name);
        for sample in &self.samples {
            let pct = sample.at_ms as f64 / self.hide_after_ms as f64 * 100.0;
            css.push_str(&format!(
                "  {:.2}% {{ width: {:.2}%; }}\n",
                pct.min(100.0),
                sample.width
            ));
        }
        css.push_str("}\n");
        css
    }
}
