use unfold_protocol::page::{GroupTint, PageSpec, SkillGroup};
use unfold_protocol::{FontKind, Rect, TextAlign, ThemeToken};

use crate::anim::RevealConfig;
use crate::views::{
    CONTENT_MAX_W, Emit, FONT_MONO, FONT_SMALL, SECTION_PAD_Y, content_width, content_x,
    section_heading, text,
};

const GROUP_GAP: f64 = 32.0;
const GROUP_PAD: f64 = 24.0;
const PILL_H: f64 = 34.0;
const PILL_GAP: f64 = 8.0;
const BADGE_H: f64 = 56.0;
const BADGE_GAP: f64 = 16.0;

/// Skill groups in a card row, then the certification trust bar.
pub fn emit(spec: &PageSpec, frame: &Rect, e: &mut Emit<'_>) -> f64 {
    let s = &spec.skills;
    let w = frame.w;
    let cw = content_width(w, CONTENT_MAX_W);
    let x = frame.x + content_x(w, CONTENT_MAX_W);
    let mut y = frame.y + SECTION_PAD_Y;

    e.begin_section("skills", Some(&s.heading.eyebrow));
    y += section_heading(e, &s.heading, x, y, cw);

    // ── Group cards ────────────────────────────────────────────────
    if !s.groups.is_empty() {
        let n = s.groups.len() as f64;
        let col_w = (cw - GROUP_GAP * (n - 1.0)) / n;
        let heights: Vec<f64> = s.groups.iter().map(|g| group_height(g, col_w)).collect();
        let row_h = heights.iter().fold(0.0_f64, |a, b| a.max(*b));

        for (i, group) in s.groups.iter().enumerate() {
            let gx = x + i as f64 * (col_w + GROUP_GAP);
            let rect = Rect::new(gx, y, col_w, row_h);
            let t = e.next_block(rect, RevealConfig::slide_up(0.1 * (i + 1) as f64));
            let rect = rect.translated(t.dx, t.dy);

            e.rect(rect, ThemeToken::Surface, Some(ThemeToken::Border), 16.0, t.opacity);

            // Icon tile + group title.
            let tile = Rect::new(rect.x + GROUP_PAD, rect.y + GROUP_PAD, 40.0, 40.0);
            e.rect(
                tile,
                ThemeToken::ChipBackground,
                Some(ThemeToken::AccentBorder),
                10.0,
                t.opacity,
            );
            e.text(
                tile.x + 20.0,
                tile.y + 20.0,
                tint_glyph(group.tint),
                tint_token(group.tint),
                FontKind::Body,
                16.0,
                TextAlign::Center,
                t.opacity,
            );
            e.text(
                tile.right() + 12.0,
                tile.y + 20.0,
                group.title.as_str(),
                ThemeToken::TextPrimary,
                FontKind::Body,
                16.0,
                TextAlign::Left,
                t.opacity,
            );

            // Skill pills.
            let mut py = rect.y + GROUP_PAD + 40.0 + 20.0;
            for row in pill_rows(group, col_w - 2.0 * GROUP_PAD) {
                let mut px = rect.x + GROUP_PAD;
                for (skill, pw) in row {
                    let pill = Rect::new(px, py, pw, PILL_H);
                    e.rect(
                        pill,
                        ThemeToken::PillBackground,
                        Some(ThemeToken::Border),
                        10.0,
                        t.opacity,
                    );
                    e.text(
                        pill.x + 12.0,
                        pill.y + PILL_H / 2.0,
                        "▪",
                        ThemeToken::AccentSoft,
                        FontKind::Body,
                        FONT_SMALL,
                        TextAlign::Left,
                        t.opacity,
                    );
                    e.text(
                        pill.x + 26.0,
                        pill.y + PILL_H / 2.0,
                        skill.as_str(),
                        ThemeToken::PillText,
                        FontKind::Body,
                        FONT_SMALL,
                        TextAlign::Left,
                        t.opacity,
                    );
                    px += pw + PILL_GAP;
                }
                py += PILL_H + PILL_GAP;
            }
        }
        y += row_h + 48.0;
    }

    // ── Certification trust bar ────────────────────────────────────
    if !s.certifications.is_empty() {
        let widths: Vec<f64> = s
            .certifications
            .iter()
            .map(|c| badge_width(&c.title, &c.issuer))
            .collect();
        let total = widths.iter().sum::<f64>() + BADGE_GAP * (widths.len() - 1) as f64;
        let cx = x + cw / 2.0;
        let block = Rect::new(cx - total / 2.0, y, total, BADGE_H);
        let t = e.next_block(block, RevealConfig::slide_up(0.4));

        let mut bx = cx - total / 2.0 + t.dx;
        for (cert, bw) in s.certifications.iter().zip(&widths) {
            let badge = Rect::new(bx, y + t.dy, *bw, BADGE_H);
            e.rect(
                badge,
                ThemeToken::SurfaceRaised,
                Some(ThemeToken::AccentBorder),
                12.0,
                t.opacity,
            );
            e.text(
                badge.x + 18.0,
                badge.y + BADGE_H / 2.0,
                "✦",
                ThemeToken::AccentSoft,
                FontKind::Body,
                16.0,
                TextAlign::Left,
                t.opacity,
            );
            e.text(
                badge.x + 42.0,
                badge.y + 20.0,
                cert.title.as_str(),
                ThemeToken::TextPrimary,
                FontKind::Body,
                14.0,
                TextAlign::Left,
                t.opacity,
            );
            e.text(
                badge.x + 42.0,
                badge.y + 38.0,
                cert.issuer.as_str(),
                ThemeToken::TextMuted,
                FontKind::Body,
                FONT_MONO,
                TextAlign::Left,
                t.opacity,
            );
            bx += bw + BADGE_GAP;
        }
        y += BADGE_H;
    }

    e.end_section();
    y + SECTION_PAD_Y - frame.y
}

fn group_height(group: &SkillGroup, col_w: f64) -> f64 {
    let rows = pill_rows(group, col_w - 2.0 * GROUP_PAD).len() as f64;
    GROUP_PAD + 40.0 + 20.0 + rows * (PILL_H + PILL_GAP) - PILL_GAP + GROUP_PAD
}

fn pill_rows(group: &SkillGroup, avail: f64) -> Vec<Vec<(String, f64)>> {
    let mut rows: Vec<Vec<(String, f64)>> = Vec::new();
    let mut row: Vec<(String, f64)> = Vec::new();
    let mut used = 0.0;
    for skill in &group.skills {
        let w = (text::text_width(skill, FontKind::Body, FONT_SMALL) + 38.0).min(avail);
        let needed = if row.is_empty() { w } else { used + PILL_GAP + w };
        if !row.is_empty() && needed > avail {
            rows.push(std::mem::take(&mut row));
            used = 0.0;
        }
        used = if row.is_empty() { w } else { used + PILL_GAP + w };
        row.push((skill.clone(), w));
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

fn badge_width(title: &str, issuer: &str) -> f64 {
    let tw = text::text_width(title, FontKind::Body, 14.0);
    let iw = text::text_width(issuer, FontKind::Body, FONT_MONO);
    tw.max(iw) + 60.0
}

fn tint_token(tint: GroupTint) -> ThemeToken {
    match tint {
        GroupTint::Blue => ThemeToken::Accent,
        GroupTint::Violet => ThemeToken::AccentViolet,
        GroupTint::Green => ThemeToken::StatusLive,
    }
}

fn tint_glyph(tint: GroupTint) -> &'static str {
    match tint {
        GroupTint::Blue => "◈",
        GroupTint::Violet => "▤",
        GroupTint::Green => "↯",
    }
}

#[cfg(test)]
mod tests {
    use unfold_protocol::RenderCommand;

    use super::*;
    use crate::content;
    use crate::views::RevealSlot;

    #[test]
    fn groups_and_trust_bar_each_get_a_block() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 0.0);
        let mut slots: Vec<RevealSlot> = Vec::new();
        emit(&spec, &frame, &mut Emit::collect(&mut slots));
        // heading + 3 groups + certifications.
        assert_eq!(slots.len(), 2 + spec.skills.groups.len());
        assert!((slots[1].config.delay - 0.1).abs() < 1e-9);
    }

    #[test]
    fn every_skill_is_rendered() {
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
        for group in &spec.skills.groups {
            for skill in &group.skills {
                assert!(texts.contains(skill), "missing skill {skill}");
            }
        }
    }

    #[test]
    fn group_cards_share_a_row_height() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 0.0);
        let mut slots: Vec<RevealSlot> = Vec::new();
        emit(&spec, &frame, &mut Emit::collect(&mut slots));
        let group_slots = &slots[1..=spec.skills.groups.len()];
        let h0 = group_slots[0].rect.h;
        assert!(group_slots.iter().all(|s| (s.rect.h - h0).abs() < 1e-9));
    }
}
