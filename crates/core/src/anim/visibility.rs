use unfold_protocol::{Rect, Viewport};

/// Fraction of a block that must be inside the viewport before it counts
/// as entered.
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// One-shot viewport-entry detector.
///
/// The flag flips true the first time at least `threshold` of the target
/// rectangle is inside the viewport, and stays true for the life of the
/// detector — scrolling the target back out never un-reveals it. This is
/// a plain check-and-set, not a subscription: callers feed it the current
/// scroll window once per frame.
#[derive(Debug, Clone)]
pub struct ViewportEntry {
    threshold: f64,
    entered_at: Option<f64>,
}

impl ViewportEntry {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            entered_at: None,
        }
    }

    /// Feed the current scroll window. Returns the (monotonic) entered
    /// state. A detector without a target rectangle is a no-op and stays
    /// un-entered.
    pub fn observe(&mut self, target: Option<&Rect>, view: &Viewport, now: f64) -> bool {
        if self.entered_at.is_some() {
            return true;
        }
        let Some(rect) = target else {
            return false;
        };
        let fraction = rect.visible_fraction(view.y, view.bottom());
        if fraction > 0.0 && fraction >= self.threshold {
            self.entered_at = Some(now);
        }
        self.entered_at.is_some()
    }

    pub fn has_entered(&self) -> bool {
        self.entered_at.is_some()
    }

    /// The time the flag flipped, for reveal interpolation.
    pub fn entered_at(&self) -> Option<f64> {
        self.entered_at
    }
}

impl Default for ViewportEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at(y: f64) -> Viewport {
        Viewport::new(y, 800.0, 600.0)
    }

    #[test]
    fn flips_once_threshold_is_reached() {
        let target = Rect::new(0.0, 1000.0, 800.0, 400.0);
        let mut entry = ViewportEntry::new();

        // Far above the section: nothing visible.
        assert!(!entry.observe(Some(&target), &view_at(0.0), 0.0));

        // 10% visible — below the 15% default threshold.
        assert!(!entry.observe(Some(&target), &view_at(440.0), 0.1));

        // 60% visible — over threshold.
        assert!(entry.observe(Some(&target), &view_at(640.0), 0.2));
        assert_eq!(entry.entered_at(), Some(0.2));
    }

    #[test]
    fn never_reverts_after_leaving_the_viewport() {
        let target = Rect::new(0.0, 1000.0, 800.0, 400.0);
        let mut entry = ViewportEntry::new();
        assert!(entry.observe(Some(&target), &view_at(900.0), 1.0));

        // Scroll far past, then back before the section.
        assert!(entry.observe(Some(&target), &view_at(5000.0), 2.0));
        assert!(entry.observe(Some(&target), &view_at(0.0), 3.0));
        assert!(entry.has_entered());
        // The flip time is from the first observation.
        assert_eq!(entry.entered_at(), Some(1.0));
    }

    #[test]
    fn threshold_is_overridable() {
        let target = Rect::new(0.0, 1000.0, 800.0, 400.0);
        let mut strict = ViewportEntry::with_threshold(0.9);
        // 60% visible is enough for the default but not for 0.9.
        assert!(!strict.observe(Some(&target), &view_at(640.0), 0.0));
        assert!(strict.observe(Some(&target), &view_at(1000.0), 1.0));
    }

    #[test]
    fn zero_threshold_still_requires_intersection() {
        let target = Rect::new(0.0, 1000.0, 800.0, 400.0);
        let mut any = ViewportEntry::with_threshold(0.0);
        assert!(!any.observe(Some(&target), &view_at(0.0), 0.0));
        assert!(any.observe(Some(&target), &view_at(401.0), 1.0));
    }

    #[test]
    fn absent_target_is_a_no_op() {
        let mut entry = ViewportEntry::new();
        assert!(!entry.observe(None, &view_at(0.0), 0.0));
        assert!(!entry.has_entered());
    }
}
