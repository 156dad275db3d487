use unfold_protocol::page::{PageSpec, TimelineEntry};
use unfold_protocol::{FontKind, Point, Rect, TextAlign, ThemeToken};

use crate::anim::RevealConfig;
use crate::views::{
    Emit, FONT_SMALL, FONT_TITLE, NARROW_MAX_W, SECTION_PAD_Y, content_width, content_x,
    section_heading, text,
};

const ENTRY_INDENT: f64 = 32.0;
const ENTRY_GAP: f64 = 40.0;

/// Professional journey timeline. Each entry slides in from the left
/// with its own detector, dot, and connector line.
pub fn emit(spec: &PageSpec, frame: &Rect, e: &mut Emit<'_>) -> f64 {
    let s = &spec.journey;
    let w = frame.w;
    let cw = content_width(w, NARROW_MAX_W);
    let x = frame.x + content_x(w, NARROW_MAX_W);
    let mut y = frame.y + SECTION_PAD_Y;

    e.begin_section("journey", Some(&s.heading.eyebrow));
    y += section_heading(e, &s.heading, x, y, cw);

    let body_w = cw - ENTRY_INDENT;
    let count = s.entries.len();
    for (i, entry) in s.entries.iter().enumerate() {
        let h = entry_height(entry, body_w);
        let rect = Rect::new(x, y, cw, h);
        let t = e.next_block(rect, RevealConfig::slide_left(0.1 * (i + 1) as f64));
        let ex = x + t.dx;
        let last = i + 1 == count;

        // Timeline dot and connector.
        e.rect(
            Rect::new(ex, y + 4.0, 12.0, 12.0),
            ThemeToken::TimelineDot,
            Some(ThemeToken::Accent),
            6.0,
            t.opacity,
        );
        if !last {
            e.line(
                Point::new(ex + 6.0, y + 22.0),
                Point::new(ex + 6.0, y + h + ENTRY_GAP - 6.0),
                ThemeToken::TimelineLine,
                1.0,
                t.opacity,
            );
        }

        let tx = ex + ENTRY_INDENT;
        let org_lh = text::line_height(FONT_TITLE);
        e.text(
            tx,
            y + org_lh / 2.0,
            entry.organization.as_str(),
            ThemeToken::TextPrimary,
            FontKind::Body,
            FONT_TITLE,
            TextAlign::Left,
            t.opacity,
        );
        let mut ly = y + org_lh + 6.0;

        let role_lh = text::line_height(14.0);
        e.text(
            tx,
            ly + role_lh / 2.0,
            entry.role.as_str(),
            ThemeToken::AccentSoft,
            FontKind::Body,
            14.0,
            TextAlign::Left,
            t.opacity,
        );
        ly += role_lh + 6.0;

        let lh = text::line_height(FONT_SMALL);
        for line in summary_lines(entry, body_w) {
            e.text(
                tx,
                ly + lh / 2.0,
                line.as_str(),
                ThemeToken::TextSecondary,
                FontKind::Body,
                FONT_SMALL,
                TextAlign::Left,
                t.opacity,
            );
            ly += lh;
        }

        y += h + ENTRY_GAP;
    }
    if count > 0 {
        y -= ENTRY_GAP;
    }

    e.end_section();
    y + SECTION_PAD_Y - frame.y
}

fn summary_lines(entry: &TimelineEntry, body_w: f64) -> Vec<String> {
    text::wrap(
        &entry.summary,
        text::max_chars(body_w, FontKind::Body, FONT_SMALL),
    )
}

fn entry_height(entry: &TimelineEntry, body_w: f64) -> f64 {
    text::line_height(FONT_TITLE)
        + 6.0
        + text::line_height(14.0)
        + 6.0
        + summary_lines(entry, body_w).len() as f64 * text::line_height(FONT_SMALL)
}

#[cfg(test)]
mod tests {
    use unfold_protocol::RenderCommand;

    use super::*;
    use crate::content;
    use crate::views::RevealSlot;

    #[test]
    fn entries_slide_in_from_the_left() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 0.0);
        let mut slots: Vec<RevealSlot> = Vec::new();
        emit(&spec, &frame, &mut Emit::collect(&mut slots));
        assert_eq!(slots.len(), 1 + spec.journey.entries.len());
        for (i, slot) in slots[1..].iter().enumerate() {
            assert_eq!(
                slot.config.style,
                crate::anim::RevealStyle::SlideLeft,
                "entry {i}"
            );
        }
    }

    #[test]
    fn connector_lines_join_all_but_the_last_entry() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 0.0);
        let mut out = Vec::new();
        emit(&spec, &frame, &mut Emit::render(&mut out, &[], 0.0));
        let vertical_lines = out
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    RenderCommand::DrawLine {
                        color: ThemeToken::TimelineLine,
                        ..
                    }
                )
            })
            .count();
        assert_eq!(vertical_lines, spec.journey.entries.len() - 1);
    }

    #[test]
    fn organizations_are_rendered() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 0.0);
        let mut out = Vec::new();
        emit(&spec, &frame, &mut Emit::render(&mut out, &[], 0.0));
        let texts: Vec<String> = out
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.to_string()),
                _ => None,
            })
            .collect();
        for entry in &spec.journey.entries {
            assert!(texts.contains(&entry.organization));
        }
    }
}
