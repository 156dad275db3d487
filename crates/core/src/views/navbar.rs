use unfold_protocol::page::{PageSpec, SectionId};
use unfold_protocol::{FontKind, Point, Rect, TextAlign, ThemeToken};

use crate::views::{Emit, FONT_MONO, FONT_SMALL, text};

/// Nav bar height in page units. The bar overlays the page in viewport
/// space; it is emitted after (on top of) the scrolled content.
pub const NAV_H: f64 = 56.0;

/// Fixed nav bar: brand on the left, section links on the right.
/// `elevated` switches between the transparent and the opaque+bordered
/// state; the threshold comparison itself lives in the scroll state.
pub fn emit(spec: &PageSpec, width: f64, elevated: bool, e: &mut Emit<'_>) {
    if elevated {
        e.rect(
            Rect::new(0.0, 0.0, width, NAV_H),
            ThemeToken::NavBackground,
            None,
            0.0,
            0.85,
        );
        e.line(
            Point::new(0.0, NAV_H),
            Point::new(width, NAV_H),
            ThemeToken::NavBorder,
            1.0,
            1.0,
        );
    }

    let cy = NAV_H / 2.0;
    e.text(
        32.0,
        cy,
        ">_",
        ThemeToken::Accent,
        FontKind::Mono,
        FONT_MONO,
        TextAlign::Left,
        1.0,
    );
    e.text(
        58.0,
        cy,
        spec.meta.brand.as_str(),
        ThemeToken::TextPrimary,
        FontKind::Body,
        FONT_SMALL,
        TextAlign::Left,
        1.0,
    );

    // Section links, right-aligned.
    let mut right = width - 32.0;
    for id in SectionId::nav_order().iter().rev() {
        let label = capitalize(id.anchor());
        let lw = text::text_width(&label, FontKind::Body, FONT_SMALL);
        let x = right - lw;
        e.text(
            x,
            cy,
            label.as_str(),
            ThemeToken::NavText,
            FontKind::Body,
            FONT_SMALL,
            TextAlign::Left,
            1.0,
        );
        e.link(
            Rect::new(x - 8.0, 0.0, lw + 16.0, NAV_H),
            format!("#{}", id.anchor()),
            label,
        );
        right = x - 32.0;
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use unfold_protocol::RenderCommand;

    use super::*;
    use crate::content;

    fn render(elevated: bool) -> Vec<RenderCommand> {
        let spec = content::default_page();
        let mut out = Vec::new();
        emit(&spec, 1200.0, elevated, &mut Emit::render(&mut out, &[], 0.0));
        out
    }

    #[test]
    fn transparent_until_elevated() {
        let flat = render(false);
        assert!(
            !flat
                .iter()
                .any(|c| matches!(c, RenderCommand::DrawRect { .. }))
        );
        let raised = render(true);
        let has_bg = raised.iter().any(|c| {
            matches!(
                c,
                RenderCommand::DrawRect {
                    fill: ThemeToken::NavBackground,
                    ..
                }
            )
        });
        assert!(has_bg);
        assert!(
            raised
                .iter()
                .any(|c| matches!(c, RenderCommand::DrawLine { .. }))
        );
    }

    #[test]
    fn links_every_nav_section() {
        let out = render(false);
        let hrefs: Vec<String> = out
            .iter()
            .filter_map(|c| match c {
                RenderCommand::LinkRegion { href, .. } => Some(href.to_string()),
                _ => None,
            })
            .collect();
        for id in SectionId::nav_order() {
            assert!(hrefs.contains(&format!("#{}", id.anchor())));
        }
    }

    #[test]
    fn capitalize_labels() {
        assert_eq!(capitalize("projects"), "Projects");
        assert_eq!(capitalize(""), "");
    }
}
