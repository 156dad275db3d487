/// Seconds per character.
pub const DEFAULT_CHAR_INTERVAL: f64 = 0.040;

/// Caret blink period in seconds (lit for the first half).
const BLINK_PERIOD: f64 = 1.0;

/// Progressive typing effect over a fixed source string.
///
/// The displayed prefix grows by one character per interval and never
/// shrinks; once the full string is shown the effect is complete and the
/// caret disappears permanently. Tick counts are derived from elapsed
/// time rather than an owned timer, so the emitter is deterministic
/// under test and cancellation is simply dropping it.
#[derive(Debug, Clone)]
pub struct Typewriter {
    source: String,
    /// Byte offset just past each character, for prefix slicing.
    char_ends: Vec<usize>,
    interval: f64,
    started_at: Option<f64>,
}

impl Typewriter {
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_interval(source, DEFAULT_CHAR_INTERVAL)
    }

    pub fn with_interval(source: impl Into<String>, interval: f64) -> Self {
        let source = source.into();
        let char_ends = char_end_offsets(&source);
        Self {
            source,
            char_ends,
            interval: interval.max(0.001),
            started_at: None,
        }
    }

    /// Begin typing at `now`. Subsequent calls are no-ops; use
    /// [`Typewriter::restart`] to re-trigger.
    pub fn start(&mut self, now: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Re-trigger with a new source string and speed: the displayed
    /// prefix resets to empty and typing begins again at `now`.
    pub fn restart(&mut self, source: impl Into<String>, interval: f64, now: f64) {
        self.source = source.into();
        self.char_ends = char_end_offsets(&self.source);
        self.interval = interval.max(0.001);
        self.started_at = Some(now);
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of characters shown at `now`: one per elapsed interval,
    /// bounded by the source length.
    pub fn visible_chars(&self, now: f64) -> usize {
        let Some(start) = self.started_at else {
            return 0;
        };
        let elapsed = (now - start).max(0.0);
        let ticks = (elapsed / self.interval).floor() as usize;
        ticks.min(self.char_ends.len())
    }

    /// The displayed prefix at `now`.
    pub fn prefix(&self, now: f64) -> &str {
        match self.visible_chars(now) {
            0 => "",
            n => &self.source[..self.char_ends[n - 1]],
        }
    }

    pub fn is_complete(&self, now: f64) -> bool {
        self.visible_chars(now) == self.char_ends.len()
    }

    /// The caret accompanies the prefix for as long as typing is
    /// incomplete.
    pub fn caret_present(&self, now: f64) -> bool {
        !self.is_complete(now)
    }

    /// Blink phase for renderers: lit during the first half of each
    /// second since start.
    pub fn caret_lit(&self, now: f64) -> bool {
        let Some(start) = self.started_at else {
            return true;
        };
        ((now - start).max(0.0) % BLINK_PERIOD) < BLINK_PERIOD / 2.0
    }
}

fn char_end_offsets(s: &str) -> Vec<usize> {
    s.char_indices().map(|(i, c)| i + c.len_utf8()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn at_tick(start: f64, interval: f64, k: usize) -> f64 {
        start + interval * (k + 1) as f64 + EPS
    }

    #[test]
    fn nothing_shown_before_start() {
        let tw = Typewriter::new("hello");
        assert_eq!(tw.prefix(99.0), "");
        assert!(!tw.is_complete(99.0));
    }

    #[test]
    fn one_character_per_tick() {
        let mut tw = Typewriter::with_interval("hello", 0.04);
        tw.start(1.0);
        for k in 0..5 {
            let now = at_tick(1.0, 0.04, k);
            assert_eq!(tw.prefix(now).chars().count(), k + 1, "tick {k}");
            assert!(tw.caret_present(now) == (k + 1 < 5));
        }
    }

    #[test]
    fn stops_at_full_length_and_drops_the_caret() {
        let mut tw = Typewriter::with_interval("abc", 0.04);
        tw.start(0.0);
        let done = at_tick(0.0, 0.04, 2);
        assert_eq!(tw.prefix(done), "abc");
        assert!(tw.is_complete(done));
        assert!(!tw.caret_present(done));
        // Long after the last tick: still complete, still no caret.
        assert_eq!(tw.prefix(1000.0), "abc");
        assert!(!tw.caret_present(1000.0));
    }

    #[test]
    fn prefix_length_is_monotonic() {
        let mut tw = Typewriter::with_interval("monotonic", 0.04);
        tw.start(0.0);
        let mut last = 0;
        for i in 0..40 {
            let n = tw.visible_chars(f64::from(i) * 0.013);
            assert!(n >= last);
            last = n;
        }
    }

    #[test]
    fn restart_resets_to_empty() {
        let mut tw = Typewriter::with_interval("first", 0.04);
        tw.start(0.0);
        assert!(tw.is_complete(10.0));

        tw.restart("second", 0.02, 10.0);
        assert_eq!(tw.prefix(10.0), "");
        assert!(tw.caret_present(10.0));
        assert_eq!(tw.prefix(at_tick(10.0, 0.02, 0)), "s");
    }

    #[test]
    fn start_is_idempotent() {
        let mut tw = Typewriter::with_interval("hi", 0.04);
        tw.start(1.0);
        tw.start(50.0);
        assert_eq!(tw.prefix(at_tick(1.0, 0.04, 0)), "h");
    }

    #[test]
    fn multibyte_prefixes_stay_on_char_boundaries() {
        let mut tw = Typewriter::with_interval("héllo ✦", 0.04);
        tw.start(0.0);
        assert_eq!(tw.prefix(at_tick(0.0, 0.04, 1)), "hé");
        assert_eq!(tw.prefix(at_tick(0.0, 0.04, 6)), "héllo ✦");
    }

    #[test]
    fn caret_blinks_on_a_one_second_period() {
        let mut tw = Typewriter::with_interval("long enough to keep typing", 1.0);
        tw.start(0.0);
        assert!(tw.caret_lit(0.1));
        assert!(!tw.caret_lit(0.7));
        assert!(tw.caret_lit(1.2));
    }
}
