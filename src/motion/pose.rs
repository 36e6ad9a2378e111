use std::fmt;

/// A visual pose: opacity plus a translate/scale transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    /// Transparent and shifted by `(x, y)` px.
    pub const fn offset(x: f64, y: f64) -> Self {
        Pose {
            opacity: 0.0,
            translate_x: x,
            translate_y: y,
            scale: 1.0,
        }
    }

    pub const fn faded() -> Self {
        Self::offset(0.0, 0.0)
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }

    pub fn style(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    pub const REVEAL: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::EaseOut => write!(f, "ease-out"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// Parameters of an animated container: where it starts, where it ends, and how it gets there.
///
/// Durations and delays are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub initial: Pose,
    pub target: Pose,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl AnimationSpec {
    /// Section reveal: rise 60px and fade in over 0.8s.
    pub const fn reveal(delay: f64) -> Self {
        AnimationSpec {
            initial: Pose::offset(0.0, 60.0),
            target: Pose::REST,
            duration: 0.8,
            delay,
            easing: Easing::REVEAL,
        }
    }

    /// Hero intro lines: rise 30px on page load.
    pub const fn intro(delay: f64) -> Self {
        AnimationSpec {
            initial: Pose::offset(0.0, 30.0),
            target: Pose::REST,
            duration: 0.8,
            delay,
            easing: Easing::EaseOut,
        }
    }

    /// Timeline detail panel: slide in from the right, no delay.
    pub const fn detail_panel() -> Self {
        AnimationSpec {
            initial: Pose::offset(20.0, 0.0),
            target: Pose::REST,
            duration: 0.4,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Bullet points of the detail panel, slid in from the left.
    pub fn highlight(index: usize) -> Self {
        AnimationSpec {
            initial: Pose::offset(-20.0, 0.0),
            target: Pose::REST,
            duration: 0.3,
            delay: index as f64 * 0.1,
            easing: Easing::EaseOut,
        }
    }

    /// Skill list items, revealed when scrolled into view.
    pub fn skill_item(index: usize) -> Self {
        AnimationSpec {
            initial: Pose::offset(-10.0, 0.0),
            target: Pose::REST,
            duration: 0.3,
            delay: index as f64 * 0.05,
            easing: Easing::EaseOut,
        }
    }

    pub const fn fade(duration: f64, delay: f64) -> Self {
        AnimationSpec {
            initial: Pose::faded(),
            target: Pose::REST,
            duration,
            delay,
            easing: Easing::EaseOut,
        }
    }

    /// Inline style for a transition-driven element. The delay is not part of
    /// the style; the reveal timer owns it.
    pub fn transition_style(&self, revealed: bool) -> String {
        let pose = if revealed { self.target } else { self.initial };
        format!(
            "{} transition: opacity {d}s {e}, transform {d}s {e};",
            pose.style(),
            d = self.duration,
            e = self.easing,
        )
    }

    /// Inline style for an element that animates as soon as it is inserted.
    ///
    /// Every fresh insertion replays the `enter` keyframes from `input.css`.
    pub fn keyframe_style(&self) -> String {
        format!(
            "--enter-opacity: {}; --enter-transform: {}; {} animation: enter {}s {} {}s both;",
            self.initial.opacity,
            self.initial.transform(),
            self.target.style(),
            self.duration,
            self.easing,
            self.delay,
        )
    }
}
