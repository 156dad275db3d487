use eframe::egui;
use unfold_core::{PageEngine, content};
use unfold_protocol::ThemeToken;
use unfold_protocol::page::SectionId;

use crate::renderer;
use crate::theme::{self, ThemeMode};

/// Main application state: the page engine plus renderer-side chrome
/// (theme mode, hover, error line).
pub struct PortfolioApp {
    engine: PageEngine,
    theme_mode: ThemeMode,
    hovered: Option<String>,
    error: Option<String>,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(theme::midnight_visuals());
        Self {
            engine: PageEngine::new(content::default_page(), 1280.0, 720.0),
            theme_mode: ThemeMode::Dark,
            hovered: None,
            error: None,
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme_mode = match self.theme_mode {
            ThemeMode::Dark => {
                ctx.set_visuals(theme::daylight_visuals());
                ThemeMode::Light
            }
            ThemeMode::Light => {
                ctx.set_visuals(theme::midnight_visuals());
                ThemeMode::Dark
            }
        };
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_page_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Page", &["json"])
            .pick_file()
        else {
            return;
        };
        match std::fs::read(&path) {
            Ok(data) => match content::parse_page(&data) {
                Ok(page) => {
                    let vp = self.engine.viewport();
                    self.engine = PageEngine::new(page, vp.width, vp.height);
                    self.error = None;
                }
                Err(e) => self.error = Some(format!("Failed to parse page: {e}")),
            },
            Err(e) => self.error = Some(format!("Failed to read file: {e}")),
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(err) = self.error.clone() {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                });
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let now = ui.input(|i| i.time);
                let avail = ui.available_rect_before_wrap();
                self.engine
                    .resize(f64::from(avail.width()), f64::from(avail.height()));

                // ── Input ──────────────────────────────────────────
                let response = ui.allocate_rect(avail, egui::Sense::click_and_drag());

                if response.dragged() {
                    self.engine.scroll_by(-f64::from(response.drag_delta().y));
                }
                let wheel = ui.input(|i| i.smooth_scroll_delta);
                if wheel.y.abs() > 0.1 {
                    self.engine.scroll_by(-f64::from(wheel.y));
                }

                let page_step = self.engine.viewport().height - 100.0;
                let keys = ui.input(|i| {
                    (
                        i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::J),
                        i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::K),
                        i.key_pressed(egui::Key::PageDown) || i.key_pressed(egui::Key::Space),
                        i.key_pressed(egui::Key::PageUp),
                        i.key_pressed(egui::Key::Home),
                        i.key_pressed(egui::Key::End),
                        i.key_pressed(egui::Key::Num1),
                        i.key_pressed(egui::Key::Num2),
                        i.key_pressed(egui::Key::Num3),
                        i.key_pressed(egui::Key::Num4),
                        i.key_pressed(egui::Key::T),
                        i.key_pressed(egui::Key::O),
                    )
                });
                let (down, up, pgdn, pgup, home, end, n1, n2, n3, n4, toggle, open_key) = keys;
                if down {
                    self.engine.scroll_by(60.0);
                }
                if up {
                    self.engine.scroll_by(-60.0);
                }
                if pgdn {
                    self.engine.scroll_by(page_step);
                }
                if pgup {
                    self.engine.scroll_by(-page_step);
                }
                if home {
                    self.engine.scroll_to(0.0);
                }
                if end {
                    self.engine.scroll_to(f64::MAX);
                }
                if n1 {
                    self.engine.jump_to(SectionId::Projects);
                }
                if n2 {
                    self.engine.jump_to(SectionId::Skills);
                }
                if n3 {
                    self.engine.jump_to(SectionId::Journey);
                }
                if n4 {
                    self.engine.jump_to(SectionId::Contact);
                }
                if toggle {
                    self.toggle_theme(ctx);
                }
                #[cfg(not(target_arch = "wasm32"))]
                if open_key {
                    self.open_page_dialog();
                }
                #[cfg(target_arch = "wasm32")]
                let _ = open_key;

                // ── Render ─────────────────────────────────────────
                self.engine.advance(now);
                let cmds = self.engine.render(now);

                let painter = ui.painter_at(avail);
                painter.rect_filled(
                    avail,
                    egui::CornerRadius::ZERO,
                    theme::resolve(ThemeToken::Background, self.theme_mode),
                );
                let result = renderer::render_commands(&painter, &cmds, avail.left_top(), self.theme_mode);

                // ── Link hover + activation ────────────────────────
                self.hovered = None;
                if let Some(pos) = ui.input(|i| i.pointer.hover_pos()) {
                    if let Some(hit) = result.links.iter().find(|l| l.rect.contains(pos)) {
                        self.hovered = Some(hit.href.clone());
                        ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
                        painter.rect_stroke(
                            hit.rect.expand(2.0),
                            egui::CornerRadius::same(6),
                            egui::Stroke::new(
                                1.0,
                                theme::resolve(ThemeToken::AccentSoft, self.theme_mode),
                            ),
                            egui::StrokeKind::Outside,
                        );
                        response.clone().on_hover_text(&hit.label);
                    }
                }
                if response.clicked() {
                    if let Some(href) = self.hovered.clone() {
                        if !self.engine.activate_href(&href) && !href.starts_with('#') {
                            ctx.open_url(egui::OpenUrl::new_tab(href));
                        }
                    }
                }
            });

        // The page idles with a pulsing status dot and a floating scroll
        // cue; keep repainting at a relaxed cadence.
        ctx.request_repaint_after(std::time::Duration::from_millis(33));
    }
}
