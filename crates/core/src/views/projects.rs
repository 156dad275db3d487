use unfold_protocol::page::{ColumnTint, PageSpec, Project};
use unfold_protocol::{FontKind, Point, Rect, TextAlign, ThemeToken};

use crate::views::{
    CONTENT_MAX_W, Emit, FONT_BODY, FONT_H3, FONT_MONO, FONT_SMALL, FONT_TITLE, SECTION_PAD_Y,
    content_width, content_x, section_heading, text,
};

const CARD_PAD: f64 = 40.0;
const CARD_GAP: f64 = 32.0;
const COL_GAP: f64 = 24.0;
const CHIP_H: f64 = 28.0;
const CHIP_GAP: f64 = 12.0;
const METRIC_H: f64 = 96.0;
const METRIC_GAP: f64 = 16.0;

/// Featured projects: heading, then one reveal block per project card.
/// Metric cards inside a project reveal independently with their own
/// stagger, on top of the card's own transform.
pub fn emit(spec: &PageSpec, frame: &Rect, e: &mut Emit<'_>) -> f64 {
    let s = &spec.projects;
    let w = frame.w;
    let cw = content_width(w, CONTENT_MAX_W);
    let x = frame.x + content_x(w, CONTENT_MAX_W);
    let mut y = frame.y + SECTION_PAD_Y;

    e.begin_section("projects", Some(&s.heading.eyebrow));
    y += section_heading(e, &s.heading, x, y, cw);

    for (i, project) in s.projects.iter().enumerate() {
        let h = card(project, x, y, cw, 0.1 * (i + 1) as f64, e);
        y += h + CARD_GAP;
    }
    if !s.projects.is_empty() {
        y -= CARD_GAP;
    }
    e.end_section();

    y + SECTION_PAD_Y - frame.y
}

fn card(p: &Project, x: f64, y: f64, cw: f64, delay: f64, e: &mut Emit<'_>) -> f64 {
    let inner_x = x + CARD_PAD;
    let inner_w = cw - 2.0 * CARD_PAD;

    // Measure before declaring the block: the reveal rectangle needs the
    // finished height.
    let summary_lines = if p.summary.is_empty() {
        Vec::new()
    } else {
        text::wrap(
            &p.summary,
            text::max_chars(inner_w * 0.85, FontKind::Body, FONT_BODY),
        )
    };
    let columns = column_layout(p, inner_w);
    let tag_rows = chip_rows(&p.tags, inner_w);

    let mut content_h = 0.0;
    if p.status.is_some() || p.kicker.is_some() {
        content_h += 24.0 + 16.0;
    }
    content_h += text::line_height(FONT_H3) + 4.0;
    content_h += text::line_height(FONT_TITLE) + 24.0;
    if !summary_lines.is_empty() {
        content_h += summary_lines.len() as f64 * text::line_height(FONT_BODY) + 28.0;
    }
    if let Some((_, col_h)) = &columns {
        content_h += col_h + 32.0;
    }
    if !tag_rows.is_empty() {
        content_h += tag_rows.len() as f64 * (CHIP_H + CHIP_GAP) - CHIP_GAP + 8.0;
    }
    if !p.metrics.is_empty() {
        content_h += METRIC_H + 8.0;
    }
    let card_h = content_h + 2.0 * CARD_PAD;

    let ct = e.next_block(
        Rect::new(x, y, cw, card_h),
        crate::anim::RevealConfig::slide_up(delay),
    );
    let o = ct.opacity;
    let dy = ct.dy;

    let card_rect = Rect::new(x, y + dy, cw, card_h);
    e.rect(
        card_rect,
        ThemeToken::SurfaceRaised,
        Some(ThemeToken::AccentBorder),
        16.0,
        o,
    );
    if columns.is_some() {
        // Top accent rule on the case-study card.
        e.line(
            Point::new(x + 16.0, y + dy),
            Point::new(x + cw - 16.0, y + dy),
            ThemeToken::Accent,
            1.0,
            o * 0.5,
        );
    }

    let mut cy = y + dy + CARD_PAD;

    // ── Status row ─────────────────────────────────────────────────
    if p.status.is_some() || p.kicker.is_some() {
        let mut sx = inner_x;
        if let Some(status) = &p.status {
            let tw = text::text_width(&status.label, FontKind::Mono, FONT_MONO);
            let dot_w = if status.live { 14.0 } else { 0.0 };
            let pill_w = tw + 28.0 + dot_w;
            let pill = Rect::new(sx, cy, pill_w, 24.0);
            e.rect(
                pill,
                ThemeToken::ChipBackground,
                Some(ThemeToken::AccentBorder),
                12.0,
                o,
            );
            if status.live {
                e.rect(
                    Rect::new(pill.x + 12.0, pill.y + 9.0, 6.0, 6.0),
                    ThemeToken::StatusLive,
                    None,
                    3.0,
                    o * pulse(e.now),
                );
            }
            let color = if status.live {
                ThemeToken::StatusLive
            } else {
                ThemeToken::AccentSoft
            };
            e.text(
                pill.x + 14.0 + dot_w,
                pill.y + 12.0,
                status.label.as_str(),
                color,
                FontKind::Mono,
                FONT_MONO,
                TextAlign::Left,
                o,
            );
            sx += pill_w + 12.0;
        }
        if let Some(kicker) = &p.kicker {
            e.text(
                sx,
                cy + 12.0,
                kicker.as_str(),
                ThemeToken::TextMuted,
                FontKind::Mono,
                FONT_MONO,
                TextAlign::Left,
                o,
            );
        }
        cy += 40.0;
    }

    // ── Title + subtitle ───────────────────────────────────────────
    let title_lh = text::line_height(FONT_H3);
    e.text(
        inner_x,
        cy + title_lh / 2.0,
        p.title.as_str(),
        ThemeToken::TextPrimary,
        FontKind::Display,
        FONT_H3,
        TextAlign::Left,
        o,
    );
    cy += title_lh + 4.0;

    let sub_lh = text::line_height(FONT_TITLE);
    e.text(
        inner_x,
        cy + sub_lh / 2.0,
        p.subtitle.as_str(),
        ThemeToken::AccentSoft,
        FontKind::Body,
        FONT_TITLE,
        TextAlign::Left,
        o,
    );
    cy += sub_lh + 24.0;

    // ── Summary ────────────────────────────────────────────────────
    if !summary_lines.is_empty() {
        let lh = text::line_height(FONT_BODY);
        for line in &summary_lines {
            e.text(
                inner_x,
                cy + lh / 2.0,
                line.as_str(),
                ThemeToken::TextSecondary,
                FontKind::Body,
                FONT_BODY,
                TextAlign::Left,
                o,
            );
            cy += lh;
        }
        cy += 28.0;
    }

    // ── Case-study columns ─────────────────────────────────────────
    if let Some((cols, col_h)) = &columns {
        let n = cols.len() as f64;
        let col_w = (inner_w - COL_GAP * (n - 1.0)) / n;
        for (j, col) in cols.iter().enumerate() {
            let cx0 = inner_x + j as f64 * (col_w + COL_GAP);
            let rect = Rect::new(cx0, cy, col_w, *col_h);
            e.rect(rect, ThemeToken::Surface, Some(ThemeToken::Border), 12.0, o);
            e.text(
                cx0 + 20.0,
                cy + 28.0,
                col.title.to_uppercase(),
                tint_token(col.tint),
                FontKind::Mono,
                FONT_MONO,
                TextAlign::Left,
                o,
            );
            let lh = text::line_height(FONT_SMALL);
            let mut ly = cy + 46.0;
            for line in &col.body_lines {
                e.text(
                    cx0 + 20.0,
                    ly + lh / 2.0,
                    line.as_str(),
                    ThemeToken::TextSecondary,
                    FontKind::Body,
                    FONT_SMALL,
                    TextAlign::Left,
                    o,
                );
                ly += lh;
            }
        }
        cy += col_h + 32.0;
    }

    // ── Tag chips ──────────────────────────────────────────────────
    if !tag_rows.is_empty() {
        for row in &tag_rows {
            let mut tx = inner_x;
            for (tag, tag_w) in row {
                let chip = Rect::new(tx, cy, *tag_w, CHIP_H);
                e.rect(
                    chip,
                    ThemeToken::ChipBackground,
                    Some(ThemeToken::AccentBorder),
                    8.0,
                    o,
                );
                e.text(
                    chip.x + chip.w / 2.0,
                    chip.y + CHIP_H / 2.0,
                    tag.as_str(),
                    ThemeToken::TextSecondary,
                    FontKind::Mono,
                    FONT_MONO,
                    TextAlign::Center,
                    o,
                );
                tx += tag_w + CHIP_GAP;
            }
            cy += CHIP_H + CHIP_GAP;
        }
        cy = cy - CHIP_GAP + 8.0;
    }

    // ── Metric cards ───────────────────────────────────────────────
    if !p.metrics.is_empty() {
        let n = p.metrics.len() as f64;
        let m_w = (inner_w - METRIC_GAP * (n - 1.0)) / n;
        for (j, metric) in p.metrics.iter().enumerate() {
            let slot_rect = Rect::new(inner_x + j as f64 * (m_w + METRIC_GAP), cy - dy, m_w, METRIC_H);
            let mt = e.next_block(
                slot_rect,
                crate::anim::RevealConfig::rise_scale(0.1 * j as f64),
            );
            let mo = o * mt.opacity;
            let rect = scale_rect(
                Rect::new(slot_rect.x, slot_rect.y + dy + mt.dy, m_w, METRIC_H),
                mt.scale,
            );
            e.rect(rect, ThemeToken::Surface, Some(ThemeToken::Border), 16.0, mo);
            e.text(
                rect.x + 20.0,
                rect.y + 32.0,
                metric.value.as_str(),
                ThemeToken::AccentBright,
                FontKind::Display,
                28.0 * mt.scale,
                TextAlign::Left,
                mo,
            );
            let label_lines = text::wrap(
                &metric.label,
                text::max_chars(m_w - 40.0, FontKind::Body, FONT_SMALL),
            );
            let lh = text::line_height(FONT_SMALL);
            for (k, line) in label_lines.iter().take(2).enumerate() {
                e.text(
                    rect.x + 20.0,
                    rect.y + 58.0 + k as f64 * lh,
                    line.as_str(),
                    ThemeToken::TextSecondary,
                    FontKind::Body,
                    FONT_SMALL * mt.scale,
                    TextAlign::Left,
                    mo,
                );
            }
        }
    }

    card_h
}

/// Wrapped bodies and shared height of the case-study columns.
type Columns = (Vec<ColumnBody>, f64);

struct ColumnBody {
    title: String,
    body_lines: Vec<String>,
    tint: ColumnTint,
}

fn column_layout(p: &Project, inner_w: f64) -> Option<Columns> {
    if p.case_study.is_empty() {
        return None;
    }
    let n = p.case_study.len() as f64;
    let col_w = (inner_w - COL_GAP * (n - 1.0)) / n;
    let limit = text::max_chars(col_w - 40.0, FontKind::Body, FONT_SMALL);
    let cols: Vec<ColumnBody> = p
        .case_study
        .iter()
        .map(|c| ColumnBody {
            title: c.title.clone(),
            body_lines: text::wrap(&c.body, limit),
            tint: c.tint,
        })
        .collect();
    let max_lines = cols.iter().map(|c| c.body_lines.len()).max().unwrap_or(0);
    let col_h = 46.0 + max_lines as f64 * text::line_height(FONT_SMALL) + 20.0;
    Some((cols, col_h))
}

/// Pack tag chips into rows that fit `inner_w`.
fn chip_rows(tags: &[String], inner_w: f64) -> Vec<Vec<(String, f64)>> {
    let mut rows: Vec<Vec<(String, f64)>> = Vec::new();
    let mut row: Vec<(String, f64)> = Vec::new();
    let mut used = 0.0;
    for tag in tags {
        let w = text::text_width(tag, FontKind::Mono, FONT_MONO) + 24.0;
        let needed = if row.is_empty() { w } else { used + CHIP_GAP + w };
        if !row.is_empty() && needed > inner_w {
            rows.push(std::mem::take(&mut row));
            used = 0.0;
        }
        used = if row.is_empty() { w } else { used + CHIP_GAP + w };
        row.push((tag.clone(), w));
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

fn tint_token(tint: ColumnTint) -> ThemeToken {
    match tint {
        ColumnTint::Problem => ThemeToken::Danger,
        ColumnTint::Solution => ThemeToken::Accent,
        ColumnTint::Impact => ThemeToken::StatusLive,
    }
}

fn scale_rect(r: Rect, s: f64) -> Rect {
    let cx = r.x + r.w / 2.0;
    let cy = r.y + r.h / 2.0;
    Rect::new(cx - r.w * s / 2.0, cy - r.h * s / 2.0, r.w * s, r.h * s)
}

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
    fn slot_plan_covers_cards_and_metrics() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 0.0);
        let mut slots: Vec<RevealSlot> = Vec::new();
        emit(&spec, &frame, &mut Emit::collect(&mut slots));
        // heading + 2 cards + 3 metric cards.
        assert_eq!(slots.len(), 6);
        // Metric cards stagger by 0.1s.
        let metric_delays: Vec<f64> = slots[3..].iter().map(|s| s.config.delay).collect();
        assert_eq!(metric_delays, vec![0.0, 0.1, 0.2]);
    }

    #[test]
    fn renders_titles_and_metric_values() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 0.0);
        let mut out = Vec::new();
        let h = emit(&spec, &frame, &mut Emit::render(&mut out, &[], 0.0));
        assert!(h > 2.0 * SECTION_PAD_Y);
        let texts: Vec<String> = out
            .iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.to_string()),
                _ => None,
            })
            .collect();
        for project in &spec.projects.projects {
            assert!(texts.contains(&project.title));
            for metric in &project.metrics {
                assert!(texts.contains(&metric.value));
            }
        }
    }

    #[test]
    fn chip_rows_wrap_to_width() {
        let tags: Vec<String> = (0..8).map(|i| format!("tag-number-{i}")).collect();
        let rows = chip_rows(&tags, 300.0);
        assert!(rows.len() > 1);
        let total: usize = rows.iter().map(Vec::len).sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn measure_matches_render_height() {
        let spec = content::default_page();
        let frame = Rect::new(0.0, 0.0, 1200.0, 0.0);
        let measured = emit(&spec, &frame, &mut Emit::measure());
        let mut out = Vec::new();
        let rendered = emit(&spec, &frame, &mut Emit::render(&mut out, &[], 2.0));
        assert_eq!(measured, rendered);
    }
}
