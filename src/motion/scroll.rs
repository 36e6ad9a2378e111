/// Raw document measurements taken on a scroll or resize event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Fraction of the scrollable height consumed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let range = self.scroll_height - self.viewport_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.offset / range).clamp(0.0, 1.0)
    }

    pub fn sample(&self) -> ScrollSample {
        ScrollSample {
            offset: self.offset.max(0.0),
            progress: self.progress(),
        }
    }
}

/// The value published to every scroll consumer for one event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    pub offset: f64,
    pub progress: f64,
}
