use super::pose::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVisibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    /// The bar hides once the scroll offset is strictly greater than this.
    pub threshold: f64,
    pub enter_ms: u32,
    pub exit_ms: u32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            enter_ms: 225,
            exit_ms: 195,
        }
    }
}

/// Shows the navigation bar at the top of the page and slides it away as soon
/// as the page is scrolled. No hysteresis: every crossing of the threshold toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct NavController {
    config: NavConfig,
    state: NavVisibility,
}

impl NavController {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            state: NavVisibility::Visible,
        }
    }

    pub fn state(&self) -> NavVisibility {
        self.state
    }

    /// Feed a scroll offset. Returns the new state if it changed.
    pub fn sample(&mut self, offset: f64) -> Option<NavVisibility> {
        let next = if offset > self.config.threshold {
            NavVisibility::Hidden
        } else {
            NavVisibility::Visible
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }

    /// Slide down into place when shown, up out of view when hidden.
    pub fn style(&self) -> String {
        match self.state {
            NavVisibility::Visible => format!(
                "transform: translateY(0); transition: transform {}ms {};",
                self.config.enter_ms,
                Easing::CubicBezier(0.0, 0.0, 0.2, 1.0)
            ),
            NavVisibility::Hidden => format!(
                "transform: translateY(-100%); transition: transform {}ms {};",
                self.config.exit_ms,
                Easing::CubicBezier(0.4, 0.0, 0.6, 1.0)
            ),
        }
    }
}

impl Default for NavController {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}
