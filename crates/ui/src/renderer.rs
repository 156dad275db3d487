use egui::{Align2, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind};
use unfold_protocol::{FontKind, RenderCommand, TextAlign};

use crate::theme::{self, ThemeMode};

/// An interactive region surfaced to the app for hover and click.
pub struct LinkHit {
    pub rect: Rect,
    pub href: String,
    pub label: String,
}

/// Result of rendering a command list.
pub struct RenderResult {
    pub links: Vec<LinkHit>,
}

/// Render a list of `RenderCommand` into an egui `Painter`.
///
/// `offset` is the top-left pixel of the rendering area; commands arrive
/// in viewport space, so this is a straight translation. Per-command
/// opacity multiplies into the resolved color.
pub fn render_commands(
    painter: &egui::Painter,
    commands: &[RenderCommand],
    offset: Pos2,
    mode: ThemeMode,
) -> RenderResult {
    let mut links = Vec::new();

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                fill,
                border,
                corner_radius,
                opacity,
            } => {
                let egui_rect = to_egui_rect(rect, offset);
                if !painter.clip_rect().intersects(egui_rect) {
                    continue;
                }
                let radius = CornerRadius::same((*corner_radius).clamp(0.0, 255.0) as u8);
                let fill_color = theme::resolve(*fill, mode).gamma_multiply(*opacity as f32);
                painter.rect_filled(egui_rect, radius, fill_color);
                if let Some(border) = border {
                    let stroke_color =
                        theme::resolve(*border, mode).gamma_multiply(*opacity as f32);
                    painter.rect_stroke(
                        egui_rect,
                        radius,
                        Stroke::new(1.0, stroke_color),
                        StrokeKind::Outside,
                    );
                }
            }

            RenderCommand::DrawText {
                position,
                text,
                color,
                font,
                size,
                align,
                opacity,
            } => {
                if *opacity <= 0.0 || *size < 1.0 {
                    continue;
                }
                let anchor = match align {
                    TextAlign::Left => Align2::LEFT_CENTER,
                    TextAlign::Center => Align2::CENTER_CENTER,
                    TextAlign::Right => Align2::RIGHT_CENTER,
                };
                let font_id = match font {
                    FontKind::Mono => FontId::monospace(*size as f32),
                    FontKind::Display | FontKind::Body => FontId::proportional(*size as f32),
                };
                let text_color = theme::resolve(*color, mode).gamma_multiply(*opacity as f32);
                painter.text(
                    Pos2::new(
                        position.x as f32 + offset.x,
                        position.y as f32 + offset.y,
                    ),
                    anchor,
                    text.as_ref(),
                    font_id,
                    text_color,
                );
            }

            RenderCommand::DrawLine {
                from,
                to,
                color,
                width,
                opacity,
            } => {
                let p1 = Pos2::new(from.x as f32 + offset.x, from.y as f32 + offset.y);
                let p2 = Pos2::new(to.x as f32 + offset.x, to.y as f32 + offset.y);
                let line_color = theme::resolve(*color, mode).gamma_multiply(*opacity as f32);
                painter.line_segment([p1, p2], Stroke::new(*width as f32, line_color));
            }

            RenderCommand::LinkRegion { rect, href, label } => {
                links.push(LinkHit {
                    rect: to_egui_rect(rect, offset),
                    href: href.to_string(),
                    label: label.to_string(),
                });
            }

            RenderCommand::BeginSection { .. } | RenderCommand::EndSection => {
                // Sections are semantic — no visual effect in egui.
            }
        }
    }

    RenderResult { links }
}

fn to_egui_rect(rect: &unfold_protocol::Rect, offset: Pos2) -> Rect {
    Rect::from_min_size(
        Pos2::new(rect.x as f32 + offset.x, rect.y as f32 + offset.y),
        egui::vec2(rect.w as f32, rect.h as f32),
    )
}
