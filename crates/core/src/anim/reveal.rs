/// How a hidden block sits before its reveal plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
    /// Fade in while sliding up from 32 units below.
    SlideUp,
    /// Fade in while rising 20 units and growing from 95% scale
    /// (metric cards).
    RiseScale,
    /// Fade in while sliding in from 20 units to the left
    /// (timeline entries).
    SlideLeft,
}

/// Per-instance reveal configuration. Immutable; the start delay is the
/// caller's stagger knob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub delay: f64,
    pub duration: f64,
    pub style: RevealStyle,
}

impl RevealConfig {
    pub fn slide_up(delay: f64) -> Self {
        Self {
            delay,
            duration: 0.7,
            style: RevealStyle::SlideUp,
        }
    }

    pub fn rise_scale(delay: f64) -> Self {
        Self {
            delay,
            duration: 0.6,
            style: RevealStyle::RiseScale,
        }
    }

    pub fn slide_left(delay: f64) -> Self {
        Self {
            delay,
            duration: 0.6,
            style: RevealStyle::SlideLeft,
        }
    }

    /// Interpolate the block's transform at `now`, given the time its
    /// visibility flag flipped (`entered_at`). Pure: no timer is owned
    /// here — the rendering loop supplies time.
    pub fn sample(&self, entered_at: Option<f64>, now: f64) -> RevealTransform {
        let Some(at) = entered_at else {
            return RevealTransform::hidden(self.style);
        };
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            ((now - at - self.delay) / self.duration).clamp(0.0, 1.0)
        };
        if progress <= 0.0 {
            return RevealTransform::hidden(self.style);
        }
        let eased = ease_out_quint(progress);
        let hidden = RevealTransform::hidden(self.style);
        RevealTransform {
            opacity: eased,
            dx: hidden.dx * (1.0 - eased),
            dy: hidden.dy * (1.0 - eased),
            scale: hidden.scale + (1.0 - hidden.scale) * eased,
        }
    }
}

/// The interpolated visual state of a reveal block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTransform {
    pub opacity: f64,
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
}

impl RevealTransform {
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
    };

    fn hidden(style: RevealStyle) -> Self {
        match style {
            RevealStyle::SlideUp => Self {
                opacity: 0.0,
                dx: 0.0,
                dy: 32.0,
                scale: 1.0,
            },
            RevealStyle::RiseScale => Self {
                opacity: 0.0,
                dx: 0.0,
                dy: 20.0,
                scale: 0.95,
            },
            RevealStyle::SlideLeft => Self {
                opacity: 0.0,
                dx: -20.0,
                dy: 0.0,
                scale: 1.0,
            },
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.opacity - 1.0).abs() < f64::EPSILON
    }
}

/// Fast-start, soft-landing ease-out. Stands in for the design's
/// `cubic-bezier(0.16, 1, 0.3, 1)` without a bezier solver.
fn ease_out_quint(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(5)
}
