//! View transforms: content + animation state → render commands.
//!
//! Each section module exposes a single `emit` walker that serves three
//! callers: the layout pass (measuring heights, no output), the engine's
//! slot collection (declaring reveal blocks), and per-frame rendering.
//! Running one walker for all three keeps block order and geometry in
//! agreement by construction.

pub mod contact;
pub mod hero;
pub mod journey;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod text;

use unfold_protocol::{FontKind, Point, Rect, RenderCommand, SharedStr, TextAlign, ThemeToken};

use crate::anim::{RevealConfig, RevealTransform};

// ── Type scale (page units) ────────────────────────────────────────────

pub const FONT_H1: f64 = 60.0;
pub const FONT_H2: f64 = 44.0;
pub const FONT_H3: f64 = 30.0;
pub const FONT_TITLE: f64 = 18.0;
pub const FONT_BODY: f64 = 15.0;
pub const FONT_SMALL: f64 = 13.0;
pub const FONT_MONO: f64 = 11.0;

/// Horizontal page padding and content column widths.
pub const PAGE_PAD_X: f64 = 24.0;
pub const CONTENT_MAX_W: f64 = 1000.0;
pub const NARROW_MAX_W: f64 = 720.0;

/// Vertical padding above and below each non-hero section.
pub const SECTION_PAD_Y: f64 = 112.0;

/// Width of the centered content column for a given page width.
pub fn content_width(page_width: f64, max_w: f64) -> f64 {
    (page_width - 2.0 * PAGE_PAD_X).min(max_w).max(120.0)
}

/// Left edge of the centered content column.
pub fn content_x(page_width: f64, max_w: f64) -> f64 {
    (page_width - content_width(page_width, max_w)) / 2.0
}

/// A reveal block declared by a view: the rectangle its visibility
/// detector watches, the reveal configuration applied to it, and the
/// visibility threshold (default 0.15, per-block override-able).
#[derive(Debug, Clone)]
pub struct RevealSlot {
    pub rect: Rect,
    pub config: RevealConfig,
    pub threshold: f64,
}

/// Shared walker state for measure / slot-collection / render passes.
pub struct Emit<'a> {
    out: Option<&'a mut Vec<RenderCommand>>,
    slots: Option<&'a mut Vec<RevealSlot>>,
    /// Sampled transforms, in block declaration order. Empty during
    /// measurement (blocks then render as fully visible).
    blocks: &'a [RevealTransform],
    block_index: usize,
    pub now: f64,
}

impl<'a> Emit<'a> {
    /// Measurement pass: no output, no slots, no time.
    pub fn measure() -> Emit<'static> {
        Emit {
            out: None,
            slots: None,
            blocks: &[],
            block_index: 0,
            now: 0.0,
        }
    }

    /// Slot-collection pass.
    pub fn collect(slots: &'a mut Vec<RevealSlot>) -> Emit<'a> {
        Emit {
            out: None,
            slots: Some(slots),
            blocks: &[],
            block_index: 0,
            now: 0.0,
        }
    }

    /// Render pass with sampled block transforms.
    pub fn render(
        out: &'a mut Vec<RenderCommand>,
        blocks: &'a [RevealTransform],
        now: f64,
    ) -> Emit<'a> {
        Emit {
            out: Some(out),
            slots: None,
            blocks,
            block_index: 0,
            now,
        }
    }

    /// Declare the next reveal block. Returns its sampled transform
    /// (fully visible outside the render pass).
    pub fn next_block(&mut self, rect: Rect, config: RevealConfig) -> RevealTransform {
        self.next_block_with(rect, config, crate::anim::DEFAULT_THRESHOLD)
    }

    /// As [`Emit::next_block`], with a non-default visibility threshold.
    pub fn next_block_with(
        &mut self,
        rect: Rect,
        config: RevealConfig,
        threshold: f64,
    ) -> RevealTransform {
        if let Some(slots) = self.slots.as_deref_mut() {
            slots.push(RevealSlot {
                rect,
                config,
                threshold,
            });
        }
        let t = self
            .blocks
            .get(self.block_index)
            .copied()
            .unwrap_or(RevealTransform::VISIBLE);
        self.block_index += 1;
        t
    }

    pub fn rect(
        &mut self,
        rect: Rect,
        fill: ThemeToken,
        border: Option<ThemeToken>,
        corner_radius: f64,
        opacity: f64,
    ) {
        if let Some(out) = self.out.as_deref_mut() {
            out.push(RenderCommand::DrawRect {
                rect,
                fill,
                border,
                corner_radius,
                opacity,
            });
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        text: impl Into<SharedStr>,
        color: ThemeToken,
        font: FontKind,
        size: f64,
        align: TextAlign,
        opacity: f64,
    ) {
        if let Some(out) = self.out.as_deref_mut() {
            out.push(RenderCommand::DrawText {
                position: Point::new(x, y),
                text: text.into(),
                color,
                font,
                size,
                align,
                opacity,
            });
        }
    }

    pub fn line(&mut self, from: Point, to: Point, color: ThemeToken, width: f64, opacity: f64) {
        if let Some(out) = self.out.as_deref_mut() {
            out.push(RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
                opacity,
            });
        }
    }

    pub fn link(&mut self, rect: Rect, href: impl Into<SharedStr>, label: impl Into<SharedStr>) {
        if let Some(out) = self.out.as_deref_mut() {
            out.push(RenderCommand::LinkRegion {
                rect,
                href: href.into(),
                label: label.into(),
            });
        }
    }

    pub fn begin_section(&mut self, id: &str, label: Option<&str>) {
        if let Some(out) = self.out.as_deref_mut() {
            out.push(RenderCommand::BeginSection {
                id: SharedStr::from(id),
                label: label.map(SharedStr::from),
            });
        }
    }

    pub fn end_section(&mut self) {
        if let Some(out) = self.out.as_deref_mut() {
            out.push(RenderCommand::EndSection);
        }
    }
}

/// Eyebrow + two-line heading shared by the non-hero sections. Returns
/// the height consumed. The whole heading is one reveal block.
pub(crate) fn section_heading(
    e: &mut Emit<'_>,
    heading: &unfold_protocol::page::SectionHeading,
    x: f64,
    y: f64,
    w: f64,
) -> f64 {
    let t = e.next_block(
        Rect::new(x, y, w, heading_height()),
        RevealConfig::slide_up(0.0),
    );
    let y = y + t.dy;

    // Eyebrow rule + mono label.
    e.line(
        Point::new(x, y + 8.0),
        Point::new(x + 48.0, y + 8.0),
        ThemeToken::AccentBorder,
        1.0,
        t.opacity,
    );
    e.text(
        x + 60.0,
        y + 8.0,
        heading.eyebrow.to_uppercase(),
        ThemeToken::AccentSoft,
        FontKind::Mono,
        FONT_MONO,
        TextAlign::Left,
        t.opacity,
    );

    let line_y = y + 28.0;
    let lh = text::line_height(FONT_H2);
    e.text(
        x,
        line_y + lh / 2.0,
        heading.line.as_str(),
        ThemeToken::TextPrimary,
        FontKind::Display,
        FONT_H2,
        TextAlign::Left,
        t.opacity,
    );
    e.text(
        x,
        line_y + lh + lh / 2.0,
        heading.accent_line.as_str(),
        ThemeToken::AccentSoft,
        FontKind::Display,
        FONT_H2,
        TextAlign::Left,
        t.opacity,
    );

    heading_height()
}

/// Fixed height of the section heading block (rule row + two display
/// lines + trailing gap).
pub(crate) fn heading_height() -> f64 {
    28.0 + 2.0 * text::line_height(FONT_H2) + 56.0
}
