use unfold_protocol::page::PageSpec;
use unfold_protocol::{FontKind, Rect, TextAlign, ThemeToken};

use crate::anim::{RevealConfig, Typewriter};
use crate::views::{CONTENT_MAX_W, Emit, FONT_BODY, FONT_H1, FONT_MONO, content_width, text};

const TAGLINE_SIZE: f64 = 19.0;
const BADGE_H: f64 = 36.0;
const CHIP_H: f64 = 26.0;
const BUTTON_H: f64 = 52.0;
const CUE_H: f64 = 24.0;

/// Full-viewport hero: availability badge, display headline, typed
/// tagline, credential chips, call-to-action buttons, scroll cue.
///
/// Returns the height the hero needs; the layout pass grows it to fill
/// the viewport. `typist` is absent outside the render pass.
pub fn emit(spec: &PageSpec, frame: &Rect, typist: Option<&Typewriter>, e: &mut Emit<'_>) -> f64 {
    let hero = &spec.hero;
    let w = frame.w;
    let cx = frame.x + w / 2.0;
    let column = content_width(w, CONTENT_MAX_W);

    let h1_lh = text::line_height(FONT_H1);
    let headline_limit = text::max_chars(column * 0.92, FontKind::Display, FONT_H1);
    let headline_lines = text::wrap_headline(&hero.headline, headline_limit);

    let badge_h = if hero.badge.is_some() { BADGE_H + 32.0 } else { 0.0 };
    let headline_h = headline_lines.len() as f64 * h1_lh + 24.0;
    let tagline_h = text::line_height(TAGLINE_SIZE) + 20.0;
    let creds_h = if hero.credentials.is_empty() {
        0.0
    } else {
        CHIP_H + 40.0
    };
    let buttons_h = BUTTON_H + 64.0;
    let content_h = badge_h + headline_h + tagline_h + creds_h + buttons_h + CUE_H;
    let height = frame.h.max(content_h + 160.0);

    let mut y = frame.y + (height - content_h) / 2.0;

    e.begin_section("hero", None);

    // ── Availability badge ─────────────────────────────────────────
    if let Some(badge) = &hero.badge {
        let label = badge.to_uppercase();
        let tw = text::text_width(&label, FontKind::Mono, FONT_MONO);
        let pill_w = tw + 46.0;
        let pill = Rect::new(cx - pill_w / 2.0, y, pill_w, BADGE_H);
        let t = e.next_block(pill, RevealConfig::slide_up(0.0));
        let pill = pill.translated(t.dx, t.dy);

        e.rect(
            pill,
            ThemeToken::ChipBackground,
            Some(ThemeToken::AccentBorder),
            BADGE_H / 2.0,
            t.opacity,
        );
        // Pulsing status dot.
        e.rect(
            Rect::new(pill.x + 14.0, pill.y + BADGE_H / 2.0 - 3.0, 6.0, 6.0),
            ThemeToken::Accent,
            None,
            3.0,
            t.opacity * pulse(e.now),
        );
        e.text(
            pill.x + 28.0,
            pill.y + BADGE_H / 2.0,
            label,
            ThemeToken::TextSecondary,
            FontKind::Mono,
            FONT_MONO,
            TextAlign::Left,
            t.opacity,
        );
        y += BADGE_H + 32.0;
    }

    // ── Headline ───────────────────────────────────────────────────
    {
        let block = Rect::new(
            cx - column / 2.0,
            y,
            column,
            headline_lines.len() as f64 * h1_lh,
        );
        let t = e.next_block(block, RevealConfig::slide_up(0.15));
        let space = text::char_width(FontKind::Display, FONT_H1);
        for (i, line) in headline_lines.iter().enumerate() {
            let total = text::headline_line_chars(line) as f64 * space;
            let mut run_x = cx - total / 2.0 + t.dx;
            let line_cy = y + t.dy + i as f64 * h1_lh + h1_lh / 2.0;
            for (run, accent) in line {
                let color = if *accent {
                    ThemeToken::Accent
                } else {
                    ThemeToken::TextPrimary
                };
                e.text(
                    run_x,
                    line_cy,
                    run.as_str(),
                    color,
                    FontKind::Display,
                    FONT_H1,
                    TextAlign::Left,
                    t.opacity,
                );
                run_x += (run.chars().count() + 1) as f64 * space;
            }
        }
        y += headline_h;
    }

    // ── Typed tagline ──────────────────────────────────────────────
    {
        let lh = text::line_height(TAGLINE_SIZE);
        let block = Rect::new(cx - column / 2.0, y, column, lh);
        let t = e.next_block(block, RevealConfig::slide_up(0.3));
        // Centered against the full source so the line does not shift
        // while it types out.
        let full_w = text::text_width(&hero.tagline, FontKind::Body, TAGLINE_SIZE);
        let start_x = cx - full_w / 2.0 + t.dx;
        let cy = y + t.dy + lh / 2.0;
        let shown: &str = typist.map_or(hero.tagline.as_str(), |tw| tw.prefix(e.now));
        e.text(
            start_x,
            cy,
            shown,
            ThemeToken::TextSecondary,
            FontKind::Body,
            TAGLINE_SIZE,
            TextAlign::Left,
            t.opacity,
        );
        if let Some(tw) = typist
            && tw.caret_present(e.now)
            && tw.caret_lit(e.now)
        {
            let caret_x = start_x + text::text_width(shown, FontKind::Body, TAGLINE_SIZE);
            e.text(
                caret_x,
                cy,
                "▌",
                ThemeToken::AccentSoft,
                FontKind::Body,
                TAGLINE_SIZE,
                TextAlign::Left,
                t.opacity,
            );
        }
        y += tagline_h;
    }

    // ── Credential chips ───────────────────────────────────────────
    if !hero.credentials.is_empty() {
        let widths: Vec<f64> = hero
            .credentials
            .iter()
            .map(|c| text::text_width(c, FontKind::Mono, FONT_MONO) + 24.0)
            .collect();
        let total: f64 = widths.iter().sum::<f64>() + 12.0 * (widths.len() - 1) as f64;
        let block = Rect::new(cx - total / 2.0, y, total, CHIP_H);
        let t = e.next_block(block, RevealConfig::slide_up(0.4));
        let mut chip_x = cx - total / 2.0 + t.dx;
        for (cred, cw) in hero.credentials.iter().zip(&widths) {
            let chip = Rect::new(chip_x, y + t.dy, *cw, CHIP_H);
            e.rect(
                chip,
                ThemeToken::ChipBackground,
                Some(ThemeToken::AccentBorder),
                6.0,
                t.opacity,
            );
            e.text(
                chip.x + chip.w / 2.0,
                chip.y + CHIP_H / 2.0,
                cred.as_str(),
                ThemeToken::AccentSoft,
                FontKind::Mono,
                FONT_MONO,
                TextAlign::Center,
                t.opacity,
            );
            chip_x += cw + 12.0;
        }
        y += creds_h;
    }

    // ── Call-to-action buttons ─────────────────────────────────────
    {
        let pw = text::text_width(&hero.primary_action.label, FontKind::Body, FONT_BODY) + 72.0;
        let sw = text::text_width(&hero.secondary_action.label, FontKind::Body, FONT_BODY) + 56.0;
        let total = pw + 16.0 + sw;
        let block = Rect::new(cx - total / 2.0, y, total, BUTTON_H);
        let t = e.next_block(block, RevealConfig::slide_up(0.5));

        let primary = Rect::new(cx - total / 2.0 + t.dx, y + t.dy, pw, BUTTON_H);
        e.rect(primary, ThemeToken::ButtonPrimary, None, 12.0, t.opacity);
        e.text(
            primary.x + pw / 2.0,
            primary.y + BUTTON_H / 2.0,
            format!("{} →", hero.primary_action.label),
            ThemeToken::ButtonPrimaryText,
            FontKind::Body,
            FONT_BODY,
            TextAlign::Center,
            t.opacity,
        );
        e.link(
            primary,
            spec.href_for(&hero.primary_action.target),
            hero.primary_action.label.as_str(),
        );

        let secondary = Rect::new(primary.right() + 16.0, y + t.dy, sw, BUTTON_H);
        e.rect(
            secondary,
            ThemeToken::Surface,
            Some(ThemeToken::Border),
            12.0,
            t.opacity,
        );
        e.text(
            secondary.x + sw / 2.0,
            secondary.y + BUTTON_H / 2.0,
            hero.secondary_action.label.as_str(),
            ThemeToken::TextSecondary,
            FontKind::Body,
            FONT_BODY,
            TextAlign::Center,
            t.opacity,
        );
        e.link(
            secondary,
            spec.href_for(&hero.secondary_action.target),
            hero.secondary_action.label.as_str(),
        );
        y += buttons_h;
    }

    // ── Scroll cue ─────────────────────────────────────────────────
    {
        let block = Rect::new(cx - 20.0, y, 40.0, CUE_H);
        let t = e.next_block(block, RevealConfig::slide_up(0.7));
        let float_dy = (e.now * std::f64::consts::TAU / 3.0).sin() * 6.0;
        e.text(
            cx,
            y + t.dy + float_dy + CUE_H / 2.0,
            "⌄",
            ThemeToken::TextMuted,
            FontKind::Body,
            22.0,
            TextAlign::Center,
            t.opacity,
        );
        e.link(block, "#projects", "scroll to projects");
    }

    e.end_section();
    height
}

/// Slow sine pulse for the status dot, between 0.4 and 0.8 opacity.
fn pulse(now: f64) -> f64 {
    0.6 + 0.2 * (std::f64::consts::PI * now).sin()
}

#[cfg(test)]
mod tests {
    use unfold_protocol::RenderCommand;

    use super::*;
    use crate::content;
    use crate::views::RevealSlot;

    #[test]
    fn declares_the_reveal_cascade() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let mut slots: Vec<RevealSlot> = Vec::new();
        emit(&spec, &frame, None, &mut Emit::collect(&mut slots));
        // badge, headline, tagline, credentials, buttons, cue.
        assert_eq!(slots.len(), 6);
        let delays: Vec<f64> = slots.iter().map(|s| s.config.delay).collect();
        assert_eq!(delays, vec![0.0, 0.15, 0.3, 0.4, 0.5, 0.7]);
        // Staggered blocks flow downward.
        assert!(slots[1].rect.y > slots[0].rect.y);
    }

    #[test]
    fn measure_and_render_agree_on_height() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let measured = emit(&spec, &frame, None, &mut Emit::measure());
        let mut out = Vec::new();
        let rendered = emit(&spec, &frame, None, &mut Emit::render(&mut out, &[], 0.0));
        assert_eq!(measured, rendered);
        assert!(!out.is_empty());
    }

    #[test]
    fn action_links_resolve_against_the_page() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let mut out = Vec::new();
        emit(&spec, &frame, None, &mut Emit::render(&mut out, &[], 0.0));
        let hrefs: Vec<String> = out
            .iter()
            .filter_map(|c| match c {
                RenderCommand::LinkRegion { href, .. } => Some(href.to_string()),
                _ => None,
            })
            .collect();
        assert!(hrefs.contains(&"#projects".to_string()));
        assert!(hrefs.iter().any(|h| h.starts_with("mailto:")));
    }

    #[test]
    fn caret_follows_the_typed_prefix() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let mut typist = Typewriter::with_interval(spec.hero.tagline.clone(), 0.04);
        typist.start(0.0);

        let mut out = Vec::new();
        // Mid-typing, on a lit blink phase.
        emit(
            &spec,
            &frame,
            Some(&typist),
            &mut Emit::render(&mut out, &[], 0.1),
        );
        let has_caret = out.iter().any(|c| match c {
            RenderCommand::DrawText { text, .. } => *text == "▌",
            _ => false,
        });
        assert!(has_caret);

        // Long after completion the caret is gone.
        out.clear();
        emit(
            &spec,
            &frame,
            Some(&typist),
            &mut Emit::render(&mut out, &[], 1000.25),
        );
        let has_caret = out.iter().any(|c| match c {
            RenderCommand::DrawText { text, .. } => *text == "▌",
            _ => false,
        });
        assert!(!has_caret);
    }
}
