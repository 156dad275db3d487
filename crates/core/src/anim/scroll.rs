/// Scroll depth past which the nav bar switches to its elevated
/// (opaque, bordered) state.
pub const NAV_ELEVATION_THRESHOLD: f64 = 50.0;

/// Exponential approach rate for anchor glides. Higher settles faster.
const GLIDE_RATE: f64 = 6.0;

/// Remaining distance below which a glide snaps to its target.
const GLIDE_EPSILON: f64 = 0.5;

/// The page's single scroll position.
///
/// One writer (the input handler driving `scroll_by` / `glide_to` /
/// `step`), many readers (`offset`, `nav_elevated`). Anchor navigation
/// glides with an exponential ease-out; any direct scroll input cancels
/// an in-flight glide.
#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: f64,
    content_height: f64,
    viewport_height: f64,
    glide_target: Option<f64>,
}

impl ScrollState {
    pub fn new(content_height: f64, viewport_height: f64) -> Self {
        Self {
            offset: 0.0,
            content_height: content_height.max(0.0),
            viewport_height: viewport_height.max(0.0),
            glide_target: None,
        }
    }

    /// Update page/viewport heights (relayout, terminal resize). The
    /// offset is re-clamped; a pending glide is retargeted into range.
    pub fn set_extent(&mut self, content_height: f64, viewport_height: f64) {
        self.content_height = content_height.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        self.offset = self.clamp(self.offset);
        if let Some(t) = self.glide_target {
            self.glide_target = Some(self.clamp(t));
        }
    }

    fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    fn clamp(&self, y: f64) -> f64 {
        y.clamp(0.0, self.max_offset())
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Direct scroll input. Cancels any glide.
    pub fn scroll_by(&mut self, dy: f64) {
        self.glide_target = None;
        self.offset = self.clamp(self.offset + dy);
    }

    /// Jump without animation. Cancels any glide.
    pub fn scroll_to(&mut self, y: f64) {
        self.glide_target = None;
        self.offset = self.clamp(y);
    }

    /// Begin a smooth glide toward `y`.
    pub fn glide_to(&mut self, y: f64) {
        self.glide_target = Some(self.clamp(y));
    }

    pub fn is_gliding(&self) -> bool {
        self.glide_target.is_some()
    }

    /// Advance the glide by `dt` seconds. Returns true while still in
    /// motion.
    pub fn step(&mut self, dt: f64) -> bool {
        let Some(target) = self.glide_target else {
            return false;
        };
        let alpha = 1.0 - (-GLIDE_RATE * dt.max(0.0)).exp();
        self.offset += (target - self.offset) * alpha;
        if (target - self.offset).abs() < GLIDE_EPSILON {
            self.offset = target;
            self.glide_target = None;
            return false;
        }
        true
    }

    /// Elevated iff the page is scrolled past the threshold. Exactly at
    /// the threshold the bar is still transparent.
    pub fn nav_elevated(&self) -> bool {
        self.offset > NAV_ELEVATION_THRESHOLD
    }
}
