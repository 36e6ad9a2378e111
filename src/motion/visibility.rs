/// Intersection margin in px. Negative values shrink the viewport, so an
/// element counts as visible only once it is that far inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMargin(pub f64);

impl ViewportMargin {
    /// Reveal sections slightly before they are fully on screen.
    pub const SECTION: ViewportMargin = ViewportMargin(-100.0);
    /// Small items inside a section reveal as soon as any part shows.
    pub const ITEM: ViewportMargin = ViewportMargin(0.0);

    /// CSS `rootMargin` for an `IntersectionObserver`.
    pub fn root_margin(&self) -> String {
        format!("{}px", self.0)
    }
}

impl Default for ViewportMargin {
    fn default() -> Self {
        Self(0.0)
    }
}

/// Whether an element spanning `[top, bottom]` (viewport coordinates) intersects
/// the viewport after applying `margin`.
pub fn intersects(top: f64, bottom: f64, viewport_height: f64, margin: ViewportMargin) -> bool {
    let lo = -margin.0;
    let hi = viewport_height + margin.0;
    top < hi && bottom > lo
}

/// Tracks whether an element is, or with `once` has ever been, in view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityRecord {
    once: bool,
    intersecting: bool,
    has_entered_viewport: bool,
}

impl VisibilityRecord {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            intersecting: false,
            has_entered_viewport: false,
        }
    }

    /// A record that stays visible after the first entry.
    pub fn sticky() -> Self {
        Self::new(true)
    }

    pub fn has_entered_viewport(&self) -> bool {
        self.has_entered_viewport
    }

    pub fn is_visible(&self) -> bool {
        if self.once {
            self.has_entered_viewport
        } else {
            self.intersecting
        }
    }

    /// Once sticky and entered, further observations are pointless.
    pub fn is_settled(&self) -> bool {
        self.once && self.has_entered_viewport
    }

    /// Feed one intersection observation. Returns `true` if `is_visible` changed.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let before = self.is_visible();
        self.intersecting = intersecting;
        if intersecting {
            self.has_entered_viewport = true;
        }
        before != self.is_visible()
    }
}

impl Default for VisibilityRecord {
    fn default() -> Self {
        Self::sticky()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticky_is_monotonic() {
        let mut record = VisibilityRecord::sticky();
        assert!(!record.has_entered_viewport());
        assert!(!record.observe(false));
        assert!(record.observe(true));
        assert!(record.is_visible());
        // scroll away and back
        assert!(!record.observe(false));
        assert!(record.is_visible());
        assert!(record.has_entered_viewport());
        assert!(!record.observe(true));
        assert!(record.is_visible());
        assert!(record.is_settled());
    }

    #[test]
    fn test_non_sticky_follows_intersection() {
        let mut record = VisibilityRecord::new(false);
        assert!(record.observe(true));
        assert!(record.observe(false));
        assert!(!record.is_visible());
        assert!(record.has_entered_viewport());
        assert!(!record.is_settled());
    }

    #[test]
    fn test_records_are_independent() {
        let mut a = VisibilityRecord::sticky();
        let b = VisibilityRecord::sticky();
        a.observe(true);
        assert!(a.is_visible());
        assert!(!b.is_visible());
    }

    #[test]
    fn test_intersects_with_negative_margin() {
        let m = ViewportMargin::SECTION;
        // peeking 50px into an 800px viewport is not enough
        assert!(!intersects(750.0, 1200.0, 800.0, m));
        // 150px in is
        assert!(intersects(650.0, 1100.0, 800.0, m));
        // above the top band
        assert!(!intersects(-400.0, 80.0, 800.0, m));
        assert!(intersects(-400.0, 120.0, 800.0, m));
    }

    #[test]
    fn test_intersects_without_margin() {
        let m = ViewportMargin::default();
        assert!(intersects(799.0, 900.0, 800.0, m));
        assert!(!intersects(800.0, 900.0, 800.0, m));
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(ViewportMargin::SECTION.root_margin(), "-100px");
        assert_eq!(ViewportMargin::ITEM.root_margin(), "0px");
    }

    #[test]
    fn test_item_reveals_before_its_section() {
        // a skill line 40px above the fold counts, a section there does not
        assert!(intersects(760.0, 790.0, 800.0, ViewportMargin::ITEM));
        assert!(!intersects(760.0, 790.0, 800.0, ViewportMargin::SECTION));
        assert_eq!(ViewportMargin::ITEM, ViewportMargin::default());
    }
}
