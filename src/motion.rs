//! Reveal and scroll animation parameters
//!
//! Sections reveal once when they enter the viewport. Independently, a scroll
//! plan fades every section, drifts the gradient orbs and scales hoverable
//! cards in as they scroll past. The renderer writes reveals as `data-reveal`
//! attributes and embeds the scroll plan as JSON for `site.js`.

use serde::Serialize;

/// Easing curves understood by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    EaseOut,
    EaseInOut,
    Power2Out,
    Power3Out,
}

impl Ease {
    /// CSS timing function equivalent
    pub fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Ease::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)",
        }
    }
}

/// Timing of a single transition, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

impl Transition {
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease: Ease::EaseOut,
        }
    }

    pub const fn delayed(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub const fn eased(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Starting offset a revealed element animates from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Offset {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Offset {
    pub const fn fade_up(y: f64) -> Self {
        Self { opacity: 0.0, x: 0.0, y, scale: 1.0 }
    }

    pub const fn slide_x(x: f64) -> Self {
        Self { opacity: 0.0, x, y: 0.0, scale: 1.0 }
    }

    pub const fn zoom(scale: f64) -> Self {
        Self { opacity: 0.0, x: 0.0, y: 0.0, scale }
    }

    /// CSS transform for the hidden state
    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate({}px, {}px)", fmt_num(self.x), fmt_num(self.y)));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", fmt_num(self.scale)));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// One-time viewport reveal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reveal {
    pub from: Offset,
    pub transition: Transition,
    /// Viewport margin in px; negative values require the element to be
    /// that far inside the viewport before revealing
    pub margin: i32,
}

impl Reveal {
    pub const fn new(from: Offset, transition: Transition) -> Self {
        Self { from, transition, margin: SECTION_MARGIN }
    }

    pub const fn with_margin(mut self, margin: i32) -> Self {
        self.margin = margin;
        self
    }

    pub const fn delayed(mut self, delay: f64) -> Self {
        self.transition.delay = delay;
        self
    }

    /// Inline attributes consumed by the runtime: `data-reveal` plus the
    /// hidden-state style
    pub fn attrs(&self) -> String {
        format!(
            r#" data-reveal data-reveal-margin="{}" style="--reveal-opacity:{};--reveal-transform:{};--reveal-duration:{}s;--reveal-delay:{}s;--reveal-ease:{}""#,
            self.margin,
            fmt_num(self.from.opacity),
            self.from.transform(),
            fmt_num(self.transition.duration),
            fmt_num(self.transition.delay),
            self.transition.ease.css(),
        )
    }
}

/// Section-level reveal margin
pub const SECTION_MARGIN: i32 = -100;

/// Card-level reveal margin
pub const CARD_MARGIN: i32 = -50;

/// Delay added per list index
pub const STAGGER_STEP: f64 = 0.1;

/// Delay for item `index` of a staggered list
pub fn stagger(base: f64, step: f64, index: usize) -> f64 {
    round3(base + step * index as f64)
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Format a number without a trailing `.0`
pub fn fmt_num(v: f64) -> String {
    let v = round3(v);
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Section heading: fade up 20px over 0.6s
pub const SECTION_HEADER: Reveal = Reveal::new(Offset::fade_up(20.0), Transition::new(0.6));

/// Filter buttons and skill tabs follow the heading
pub const SECTION_CONTROLS: Reveal = SECTION_HEADER.delayed(0.2);

/// Cards: fade up 30px, staggered by index
pub fn card(index: usize) -> Reveal {
    Reveal::new(
        Offset::fade_up(30.0),
        Transition::new(0.5).delayed(stagger(0.0, STAGGER_STEP, index)),
    )
    .with_margin(CARD_MARGIN)
}

/// Staggered list children (skills, highlights, bullets)
pub fn list_item(index: usize) -> Reveal {
    Reveal::new(
        Offset::fade_up(20.0),
        Transition::new(0.5).delayed(stagger(0.2, STAGGER_STEP, index)),
    )
}

/// Columns sliding in from the side (about, contact)
pub fn side(x: f64, delay: f64) -> Reveal {
    Reveal::new(Offset::slide_x(x), Transition::new(0.6).delayed(delay))
}

/// Hero content fades up after mount, one step per block
pub fn hero_block(step: usize) -> Reveal {
    Reveal::new(
        Offset::fade_up(20.0),
        Transition::new(0.6).delayed(stagger(0.0, 0.2, step)),
    )
    .with_margin(0)
}

/// Per-letter animation of the hero name
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterStagger {
    pub from_y: f64,
    pub stagger: f64,
    pub transition: Transition,
}

pub const HERO_LETTERS: LetterStagger = LetterStagger {
    from_y: 100.0,
    stagger: 0.05,
    transition: Transition::new(0.8).delayed(0.2).eased(Ease::Power3Out),
};

impl LetterStagger {
    pub fn delay_for(&self, index: usize) -> f64 {
        stagger(self.transition.delay, self.stagger, index)
    }
}

/// Scroll-linked tween driven by the runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollTween {
    /// CSS selector of the animated elements
    pub selector: &'static str,
    pub from: TweenValues,
    pub to: TweenValues,
    /// Trigger start, e.g. "top 80%": element top meets 80% of viewport height
    pub start: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub ease: Ease,
    /// Scrubbed tweens follow the scroll position instead of playing once
    pub scrub: bool,
    /// Reverse when scrolling back above the start
    pub reverse: bool,
    /// Use the parent element's bounds as the trigger
    pub parent_trigger: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TweenValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

/// Everything `site.js` needs to wire scroll animations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollPlan {
    pub enabled: bool,
    pub tweens: Vec<ScrollTween>,
}

impl ScrollPlan {
    pub fn new(enabled: bool) -> Self {
        let tweens = if enabled {
            vec![section_fade(), orb_parallax(), card_scale()]
        } else {
            Vec::new()
        };
        Self { enabled, tweens }
    }
}

/// Sections brighten from 0.8 to full opacity as they scroll in
pub fn section_fade() -> ScrollTween {
    ScrollTween {
        selector: "section",
        from: TweenValues { opacity: Some(0.8), ..Default::default() },
        to: TweenValues { opacity: Some(1.0), ..Default::default() },
        start: "top 80%",
        end: Some("top 20%"),
        duration: Some(1.0),
        ease: Ease::Power2Out,
        scrub: false,
        reverse: true,
        parent_trigger: false,
    }
}

/// Gradient orbs drift up 100px across their parent's scroll range
pub fn orb_parallax() -> ScrollTween {
    ScrollTween {
        selector: ".gradient-orb",
        from: TweenValues { y: Some(0.0), ..Default::default() },
        to: TweenValues { y: Some(-100.0), ..Default::default() },
        start: "top bottom",
        end: Some("bottom top"),
        duration: None,
        ease: Ease::Linear,
        scrub: true,
        reverse: false,
        parent_trigger: true,
    }
}

/// Hoverable cards scale in once they reach 85% of the viewport
pub fn card_scale() -> ScrollTween {
    ScrollTween {
        selector: ".card-hover",
        from: TweenValues { opacity: Some(0.0), scale: Some(0.95), ..Default::default() },
        to: TweenValues { opacity: Some(1.0), scale: Some(1.0), ..Default::default() },
        start: "top 85%",
        end: None,
        duration: Some(0.6),
        ease: Ease::Power2Out,
        scrub: false,
        reverse: true,
        parent_trigger: false,
    }
}

/// Parse a trigger position like "top 80%" into (edge, viewport fraction)
pub fn parse_trigger(trigger: &str) -> Option<(&str, f64)> {
    let (edge, pos) = trigger.split_once(' ')?;
    let fraction = match pos {
        "top" => 0.0,
        "center" => 0.5,
        "bottom" => 1.0,
        pct => pct.strip_suffix('%')?.parse::<f64>().ok()? / 100.0,
    };
    matches!(edge, "top" | "center" | "bottom").then_some((edge, fraction))
}
