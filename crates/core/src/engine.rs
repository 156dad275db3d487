//! The page composition root.
//!
//! [`PageEngine`] owns every piece of transient UI state the page has:
//! the single scroll position, one visibility detector per reveal block,
//! and the typing emitter. Renderers drive it with two calls per frame —
//! `advance(now)` then `render(now)` — and feed input through the scroll
//! and anchor methods. Time is always an input, never sampled here, so
//! the whole engine is deterministic under test.

use tracing::debug;
use unfold_protocol::page::{PageSpec, SectionId};
use unfold_protocol::{RenderCommand, Viewport};

use crate::anim::{RevealTransform, ScrollState, Typewriter, ViewportEntry};
use crate::layout::{self, PageLayout};
use crate::views::{self, Emit, RevealSlot, navbar};

/// Sections whose frame is further than this from the viewport edge are
/// skipped during rendering (their detectors still observe every frame).
const CULL_MARGIN: f64 = 100.0;

struct SlotState {
    slot: RevealSlot,
    entry: ViewportEntry,
}

struct SectionSlots {
    id: SectionId,
    slots: Vec<SlotState>,
}

pub struct PageEngine {
    spec: PageSpec,
    layout: PageLayout,
    scroll: ScrollState,
    sections: Vec<SectionSlots>,
    typist: Typewriter,
    last_now: Option<f64>,
}

impl PageEngine {
    pub fn new(spec: PageSpec, width: f64, viewport_height: f64) -> Self {
        let typist = Typewriter::new(spec.hero.tagline.clone());
        let mut engine = Self {
            layout: PageLayout {
                width,
                viewport_height,
                height: 0.0,
                sections: Vec::new(),
            },
            scroll: ScrollState::new(0.0, viewport_height),
            sections: Vec::new(),
            typist,
            spec,
            last_now: None,
        };
        engine.rebuild(width, viewport_height);
        engine
    }

    pub fn spec(&self) -> &PageSpec {
        &self.spec
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.scroll.offset(),
            self.layout.width,
            self.layout.viewport_height,
        )
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    pub fn nav_elevated(&self) -> bool {
        self.scroll.nav_elevated()
    }

    /// The fixed outbound targets, independent of all page state.
    pub fn links(&self) -> (String, String) {
        (self.spec.mailto(), self.spec.contact.profile_url.clone())
    }

    /// Re-solve layout for a new viewport. Revealed blocks stay revealed:
    /// detectors are carried over by position, only their rectangles move.
    pub fn resize(&mut self, width: f64, viewport_height: f64) {
        if (width - self.layout.width).abs() < f64::EPSILON
            && (viewport_height - self.layout.viewport_height).abs() < f64::EPSILON
        {
            return;
        }
        self.rebuild(width, viewport_height);
    }

    fn rebuild(&mut self, width: f64, viewport_height: f64) {
        let layout = layout::solve(&self.spec, width, viewport_height);
        let mut sections = Vec::with_capacity(layout.sections.len());
        for (si, sf) in layout.sections.iter().enumerate() {
            let mut slots = Vec::new();
            self.emit_section(sf.id, &sf.frame, &mut Emit::collect(&mut slots), false);
            let states = slots
                .into_iter()
                .enumerate()
                .map(|(i, slot)| {
                    let entry = self
                        .sections
                        .get(si)
                        .and_then(|old| old.slots.get(i))
                        .map_or_else(
                            || ViewportEntry::with_threshold(slot.threshold),
                            |old| old.entry.clone(),
                        );
                    SlotState { slot, entry }
                })
                .collect();
            sections.push(SectionSlots {
                id: sf.id,
                slots: states,
            });
        }
        self.sections = sections;
        self.scroll.set_extent(layout.height, viewport_height);
        self.layout = layout;
    }

    /// Per-frame step: glide, visibility detection, typing.
    pub fn advance(&mut self, now: f64) {
        let dt = self.last_now.map_or(0.0, |t| (now - t).max(0.0));
        self.last_now = Some(now);

        // The tagline starts typing on mount, independent of visibility.
        self.typist.start(now);

        self.scroll.step(dt);

        let view = self.viewport();
        for sec in &mut self.sections {
            for st in &mut sec.slots {
                let before = st.entry.has_entered();
                let after = st.entry.observe(Some(&st.slot.rect), &view, now);
                if after && !before {
                    debug!(section = %sec.id, "reveal block entered viewport");
                }
            }
        }
    }

    // ── Input ──────────────────────────────────────────────────────

    pub fn scroll_by(&mut self, dy: f64) {
        self.scroll.scroll_by(dy);
    }

    pub fn scroll_to(&mut self, y: f64) {
        self.scroll.scroll_to(y);
    }

    /// Smooth-scroll to a section. Returns false (and does nothing) if
    /// the page has no frame for it.
    pub fn jump_to(&mut self, id: SectionId) -> bool {
        match self.layout.anchor_y(id) {
            Some(y) => {
                debug!(section = %id, target = y, "anchor jump");
                self.scroll.glide_to(y);
                true
            }
            None => false,
        }
    }

    /// Handle an in-page href (`#projects`). Unknown anchors and
    /// external targets are left to the caller; both return false.
    pub fn activate_href(&mut self, href: &str) -> bool {
        let Some(name) = href.strip_prefix('#') else {
            return false;
        };
        SectionId::from_anchor(name).is_some_and(|id| self.jump_to(id))
    }

    /// True while any animation is in flight (glide, typing, or a reveal
    /// still interpolating).
    pub fn is_animating(&self, now: f64) -> bool {
        if self.scroll.is_gliding() || !self.typist.is_complete(now) {
            return true;
        }
        self.sections.iter().flat_map(|s| &s.slots).any(|st| {
            st.entry
                .entered_at()
                .is_some_and(|at| now < at + st.slot.config.delay + st.slot.config.duration)
        })
    }

    // ── Rendering ──────────────────────────────────────────────────

    /// Emit the frame's command list in viewport space: visible sections
    /// first, then the nav bar on top.
    pub fn render(&self, now: f64) -> Vec<RenderCommand> {
        let view = self.viewport();
        let mut out: Vec<RenderCommand> = Vec::with_capacity(256);

        for (sf, sec) in self.layout.sections.iter().zip(&self.sections) {
            if sf.frame.bottom() < view.y - CULL_MARGIN || sf.frame.y > view.bottom() + CULL_MARGIN
            {
                continue;
            }
            let transforms: Vec<RevealTransform> = sec
                .slots
                .iter()
                .map(|st| st.slot.config.sample(st.entry.entered_at(), now))
                .collect();
            let mut e = Emit::render(&mut out, &transforms, now);
            self.emit_section(sf.id, &sf.frame, &mut e, true);
        }

        translate_y(&mut out, -view.y);

        let mut e = Emit::render(&mut out, &[], now);
        navbar::emit(&self.spec, view.width, self.scroll.nav_elevated(), &mut e);

        out
    }

    fn emit_section(&self, id: SectionId, frame: &unfold_protocol::Rect, e: &mut Emit<'_>, typed: bool) {
        let typist = typed.then_some(&self.typist);
        match id {
            SectionId::Hero => views::hero::emit(&self.spec, frame, typist, e),
            SectionId::Projects => views::projects::emit(&self.spec, frame, e),
            SectionId::Skills => views::skills::emit(&self.spec, frame, e),
            SectionId::Journey => views::journey::emit(&self.spec, frame, e),
            SectionId::Contact => views::contact::emit(&self.spec, frame, e),
        };
    }
}

fn translate_y(cmds: &mut [RenderCommand], dy: f64) {
    for cmd in cmds {
        match cmd {
            RenderCommand::DrawRect { rect, .. } | RenderCommand::LinkRegion { rect, .. } => {
                rect.y += dy;
            }
            RenderCommand::DrawText { position, .. } => position.y += dy,
            RenderCommand::DrawLine { from, to, .. } => {
                from.y += dy;
                to.y += dy;
            }
            RenderCommand::BeginSection { .. } | RenderCommand::EndSection => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn engine() -> PageEngine {
        PageEngine::new(content::default_page(), 1200.0, 800.0)
    }

    #[test]
    fn nav_elevation_follows_the_scroll_threshold() {
        let mut e = engine();
        assert!(!e.nav_elevated());
        e.scroll_to(50.0);
        assert!(!e.nav_elevated());
        e.scroll_to(51.0);
        assert!(e.nav_elevated());
    }

    #[test]
    fn unknown_anchor_is_a_no_op() {
        let mut e = engine();
        let before = e.scroll_offset();
        assert!(!e.activate_href("#blog"));
        assert!(!e.activate_href("https://example.com"));
        e.advance(0.1);
        assert_eq!(e.scroll_offset(), before);
    }

    #[test]
    fn anchor_href_glides_to_the_section() {
        let mut e = engine();
        assert!(e.activate_href("#journey"));
        let target = e.layout().anchor_y(SectionId::Journey).unwrap_or(0.0);
        let mut now = 0.0;
        for _ in 0..600 {
            now += 1.0 / 60.0;
            e.advance(now);
        }
        assert!((e.scroll_offset() - target).abs() < 1.0);
    }

    #[test]
    fn resize_preserves_revealed_blocks() {
        let mut e = engine();
        e.advance(0.0);
        let revealed_before: usize = e
            .sections
            .iter()
            .flat_map(|s| &s.slots)
            .filter(|st| st.entry.has_entered())
            .count();
        assert!(revealed_before > 0, "hero blocks reveal on mount");

        e.resize(900.0, 700.0);
        let revealed_after: usize = e
            .sections
            .iter()
            .flat_map(|s| &s.slots)
            .filter(|st| st.entry.has_entered())
            .count();
        assert!(revealed_after >= revealed_before);
    }

    #[test]
    fn nav_bar_renders_after_page_content() {
        let mut e = engine();
        e.advance(0.0);
        e.scroll_to(51.0);
        let cmds = e.render(0.0);
        let nav_bg = cmds.iter().rposition(|c| {
            matches!(
                c,
                RenderCommand::DrawRect {
                    fill: unfold_protocol::ThemeToken::NavBackground,
                    ..
                }
            )
        });
        let last_section_end = cmds
            .iter()
            .rposition(|c| matches!(c, RenderCommand::EndSection));
        match (nav_bg, last_section_end) {
            (Some(nav), Some(section)) => assert!(nav > section),
            other => panic!("missing nav or section commands: {other:?}"),
        }
    }

    #[test]
    fn typing_is_driven_by_advance_time() {
        let mut e = engine();
        e.advance(0.0);
        assert!(e.is_animating(0.0));
        // 40ms per char over a ~130 char tagline: finished within 10s.
        e.advance(10.0);
        let cmds = e.render(10.0);
        let tagline = e.spec().hero.tagline.clone();
        let full = cmds.iter().any(|c| match c {
            RenderCommand::DrawText { text, .. } => *text == tagline.as_str(),
            _ => false,
        });
        assert!(full, "tagline should be fully typed out");
    }
}
