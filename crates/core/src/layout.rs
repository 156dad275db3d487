//! Vertical flow layout: assigns each section a rectangle in page units.

use unfold_protocol::Rect;
use unfold_protocol::page::{PageSpec, SectionId};

use crate::views::{self, Emit};

/// A laid-out section.
#[derive(Debug, Clone)]
pub struct SectionFrame {
    pub id: SectionId,
    pub frame: Rect,
}

/// The solved page geometry for one width/viewport pair.
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub width: f64,
    pub viewport_height: f64,
    pub height: f64,
    pub sections: Vec<SectionFrame>,
}

impl PageLayout {
    pub fn frame(&self, id: SectionId) -> Option<&Rect> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .map(|s| &s.frame)
    }

    /// Scroll offset that puts a section's top at the top of the
    /// viewport. `None` for a section the page does not carry.
    pub fn anchor_y(&self, id: SectionId) -> Option<f64> {
        self.frame(id).map(|f| f.y)
    }
}

/// Lay the page out top to bottom. The hero grows to fill the viewport;
/// every other section takes its measured height.
pub fn solve(spec: &PageSpec, width: f64, viewport_height: f64) -> PageLayout {
    let mut sections = Vec::with_capacity(5);
    let mut y = 0.0;

    let hero_frame = Rect::new(0.0, 0.0, width, viewport_height);
    let hero_h = views::hero::emit(spec, &hero_frame, None, &mut Emit::measure());
    sections.push(SectionFrame {
        id: SectionId::Hero,
        frame: Rect::new(0.0, 0.0, width, hero_h),
    });
    y += hero_h;

    for id in [SectionId::Projects, SectionId::Skills, SectionId::Journey, SectionId::Contact] {
        let probe = Rect::new(0.0, y, width, 0.0);
        let h = measure_section(spec, id, &probe);
        sections.push(SectionFrame {
            id,
            frame: Rect::new(0.0, y, width, h),
        });
        y += h;
    }

    PageLayout {
        width,
        viewport_height,
        height: y,
        sections,
    }
}

fn measure_section(spec: &PageSpec, id: SectionId, frame: &Rect) -> f64 {
    let mut e = Emit::measure();
    match id {
        SectionId::Hero => views::hero::emit(spec, frame, None, &mut e),
        SectionId::Projects => views::projects::emit(spec, frame, &mut e),
        SectionId::Skills => views::skills::emit(spec, frame, &mut e),
        SectionId::Journey => views::journey::emit(spec, frame, &mut e),
        SectionId::Contact => views::contact::emit(spec, frame, &mut e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn layout() -> PageLayout {
        solve(&content::default_page(), 1200.0, 800.0)
    }

    #[test]
    fn sections_tile_the_page() {
        let l = layout();
        assert_eq!(l.sections.len(), 5);
        let mut expected_y = 0.0;
        for s in &l.sections {
            assert!((s.frame.y - expected_y).abs() < 1e-9, "gap before {}", s.id);
            assert!(s.frame.h > 0.0);
            expected_y = s.frame.bottom();
        }
        assert!((l.height - expected_y).abs() < 1e-9);
    }

    #[test]
    fn hero_fills_the_viewport() {
        let l = layout();
        let hero = l.frame(SectionId::Hero).copied().unwrap_or(Rect::new(
            0.0, 0.0, 0.0, 0.0,
        ));
        assert!(hero.h >= 800.0);
    }

    #[test]
    fn anchors_exist_for_all_nav_sections() {
        let l = layout();
        for id in SectionId::nav_order() {
            assert!(l.anchor_y(id).is_some());
        }
        assert_eq!(l.anchor_y(SectionId::Hero), Some(0.0));
    }

    #[test]
    fn narrower_page_grows_taller() {
        let spec = content::default_page();
        let wide = solve(&spec, 1400.0, 800.0);
        let narrow = solve(&spec, 700.0, 800.0);
        assert!(narrow.height > wide.height);
    }
}
