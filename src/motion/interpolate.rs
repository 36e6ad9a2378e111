/// Hero fades out over the first 15% of the page.
pub const HERO_FADE: ScrollTransform = ScrollTransform::new((0.0, 0.15), (1.0, 0.0));
/// Hero shrinks slightly over the same range.
pub const HERO_SCALE: ScrollTransform = ScrollTransform::new((0.0, 0.15), (1.0, 0.95));

/// Linear map from `input` to `output`, clamped to the input endpoints.
///
/// A zero-width input range acts as a step at its endpoint.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    let span = in_hi - in_lo;
    let t = if span == 0.0 {
        if value < in_lo {
            0.0
        } else {
            1.0
        }
    } else {
        ((value - in_lo) / span).clamp(0.0, 1.0)
    };
    out_lo + (out_hi - out_lo) * t
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTransform {
    input: (f64, f64),
    output: (f64, f64),
}

impl ScrollTransform {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn apply(&self, progress: f64) -> f64 {
        interpolate(progress, self.input, self.output)
    }
}
