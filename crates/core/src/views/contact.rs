use unfold_protocol::page::PageSpec;
use unfold_protocol::{FontKind, Point, Rect, TextAlign, ThemeToken};

use crate::anim::RevealConfig;
use crate::views::{
    Emit, FONT_BODY, FONT_H2, FONT_MONO, NARROW_MAX_W, SECTION_PAD_Y, content_width, content_x,
    text,
};

const BUTTON_H: f64 = 52.0;
const BLURB_MAX_W: f64 = 420.0;

/// Contact close: centered heading + blurb, the two outbound controls,
/// and the footer. The hrefs come straight from the page spec and do not
/// depend on any animation or scroll state.
pub fn emit(spec: &PageSpec, frame: &Rect, e: &mut Emit<'_>) -> f64 {
    let s = &spec.contact;
    let w = frame.w;
    let cw = content_width(w, NARROW_MAX_W);
    let x = frame.x + content_x(w, NARROW_MAX_W);
    let cx = x + cw / 2.0;
    let mut y = frame.y + SECTION_PAD_Y;

    e.begin_section("contact", None);

    // ── Heading + blurb ────────────────────────────────────────────
    let h2_lh = text::line_height(FONT_H2);
    let blurb_w = cw.min(BLURB_MAX_W);
    let blurb_lines = text::wrap(&s.blurb, text::max_chars(blurb_w, FontKind::Body, FONT_BODY));
    let blurb_lh = text::line_height(FONT_BODY);
    let heading_h = 2.0 * h2_lh + 24.0 + blurb_lines.len() as f64 * blurb_lh + 40.0;
    {
        let block = Rect::new(x, y, cw, heading_h);
        let t = e.next_block(block, RevealConfig::slide_up(0.0));
        let ty = y + t.dy;
        e.text(
            cx,
            ty + h2_lh / 2.0,
            s.line.as_str(),
            ThemeToken::TextPrimary,
            FontKind::Display,
            FONT_H2,
            TextAlign::Center,
            t.opacity,
        );
        e.text(
            cx,
            ty + h2_lh + h2_lh / 2.0,
            s.accent_line.as_str(),
            ThemeToken::AccentSoft,
            FontKind::Display,
            FONT_H2,
            TextAlign::Center,
            t.opacity,
        );
        let mut ly = ty + 2.0 * h2_lh + 24.0;
        for line in &blurb_lines {
            e.text(
                cx,
                ly + blurb_lh / 2.0,
                line.as_str(),
                ThemeToken::TextMuted,
                FontKind::Body,
                FONT_BODY,
                TextAlign::Center,
                t.opacity,
            );
            ly += blurb_lh;
        }
        y += heading_h;
    }

    // ── Outbound controls ──────────────────────────────────────────
    {
        let mw = text::text_width(&s.mail_label, FontKind::Body, FONT_BODY) + 72.0;
        let pw = text::text_width(&s.profile_label, FontKind::Body, FONT_BODY) + 72.0;
        let total = mw + 16.0 + pw;
        let block = Rect::new(cx - total / 2.0, y, total, BUTTON_H);
        let t = e.next_block(block, RevealConfig::slide_up(0.15));

        let mail = Rect::new(cx - total / 2.0 + t.dx, y + t.dy, mw, BUTTON_H);
        e.rect(mail, ThemeToken::ButtonPrimary, None, 12.0, t.opacity);
        e.text(
            mail.x + mw / 2.0,
            mail.y + BUTTON_H / 2.0,
            format!("✉ {}", s.mail_label),
            ThemeToken::ButtonPrimaryText,
            FontKind::Body,
            FONT_BODY,
            TextAlign::Center,
            t.opacity,
        );
        e.link(mail, spec.mailto(), s.mail_label.as_str());

        let profile = Rect::new(mail.right() + 16.0, y + t.dy, pw, BUTTON_H);
        e.rect(
            profile,
            ThemeToken::Surface,
            Some(ThemeToken::Border),
            12.0,
            t.opacity,
        );
        e.text(
            profile.x + pw / 2.0,
            profile.y + BUTTON_H / 2.0,
            s.profile_label.as_str(),
            ThemeToken::TextSecondary,
            FontKind::Body,
            FONT_BODY,
            TextAlign::Center,
            t.opacity,
        );
        e.link(profile, s.profile_url.as_str(), s.profile_label.as_str());

        y += BUTTON_H;
    }

    // ── Footer ─────────────────────────────────────────────────────
    y += 96.0;
    e.line(
        Point::new(frame.x + 32.0, y),
        Point::new(frame.x + w - 32.0, y),
        ThemeToken::Border,
        1.0,
        1.0,
    );
    y += 32.0;
    let foot_lh = text::line_height(FONT_MONO);
    e.text(
        frame.x + w / 2.0,
        y + foot_lh / 2.0,
        spec.meta.footer.as_str(),
        ThemeToken::TextMuted,
        FontKind::Mono,
        FONT_MONO,
        TextAlign::Center,
        1.0,
    );
    y += foot_lh;

    e.end_section();
    y + 48.0 - frame.y
}
