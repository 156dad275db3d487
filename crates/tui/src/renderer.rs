use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use unfold_core::PageEngine;
use unfold_protocol::page::{PageSpec, SectionId};
use unfold_protocol::{FontKind, Point, Rect, RenderCommand, TextAlign, ThemeToken};

/// Page units per terminal cell. A 120×40 terminal maps to a
/// 1200×780-unit viewport, the scale the page layout is designed for.
const CELL_W: f64 = 10.0;
const CELL_H: f64 = 20.0;

const SCROLL_STEP: f64 = 60.0;
const WHEEL_STEP: f64 = 40.0;
const FRAME: Duration = Duration::from_millis(33);

pub fn run_tui(page: PageSpec, light: bool) -> Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut engine = PageEngine::new(
        page,
        f64::from(size.width) * CELL_W,
        f64::from(size.height.saturating_sub(1)) * CELL_H,
    );

    let started = Instant::now();
    let result = event_loop(&mut terminal, &mut engine, light, started);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    engine: &mut PageEngine,
    light: bool,
    started: Instant,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        engine.resize(
            f64::from(size.width) * CELL_W,
            f64::from(size.height.saturating_sub(1)) * CELL_H,
        );

        let now = started.elapsed().as_secs_f64();
        engine.advance(now);
        let cmds = engine.render(now);

        // Viewport-space link regions for mouse hits.
        let links: Vec<(Rect, String)> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::LinkRegion { rect, href, .. } => Some((*rect, href.to_string())),
                _ => None,
            })
            .collect();

        terminal.draw(|frame| {
            let area = frame.area();
            let content_rows = area.height.saturating_sub(1);
            let bg = token_color(ThemeToken::Background, light);

            let buf = frame.buffer_mut();
            for row in 0..content_rows {
                for col in 0..area.width {
                    buf[(col, row)].set_char(' ').set_bg(bg);
                }
            }

            for cmd in &cmds {
                draw_command(buf, cmd, area.width, content_rows, light);
            }

            // Key hints.
            let hints = Line::from(
                " q quit · ↑↓/wheel scroll · 1-4 sections · o email · l profile ",
            );
            let hint_style = Style::default()
                .fg(token_color(ThemeToken::TextMuted, light))
                .bg(token_color(ThemeToken::Surface, light));
            frame.render_widget(
                Paragraph::new(hints).style(hint_style),
                ratatui::layout::Rect::new(0, content_rows, area.width, 1),
            );
        })?;

        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Up | KeyCode::Char('k') => engine.scroll_by(-SCROLL_STEP),
                    KeyCode::Down | KeyCode::Char('j') => engine.scroll_by(SCROLL_STEP),
                    KeyCode::PageUp => {
                        engine.scroll_by(-(engine.viewport().height - 2.0 * CELL_H));
                    }
                    KeyCode::PageDown | KeyCode::Char(' ') => {
                        engine.scroll_by(engine.viewport().height - 2.0 * CELL_H);
                    }
                    KeyCode::Home | KeyCode::Char('g') => engine.scroll_to(0.0),
                    KeyCode::End | KeyCode::Char('G') => engine.scroll_to(f64::MAX),
                    KeyCode::Char('1') => {
                        engine.jump_to(SectionId::Projects);
                    }
                    KeyCode::Char('2') => {
                        engine.jump_to(SectionId::Skills);
                    }
                    KeyCode::Char('3') => {
                        engine.jump_to(SectionId::Journey);
                    }
                    KeyCode::Char('4') => {
                        engine.jump_to(SectionId::Contact);
                    }
                    KeyCode::Char('o') => open_external(&engine.links().0),
                    KeyCode::Char('l') => open_external(&engine.links().1),
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => engine.scroll_by(-WHEEL_STEP),
                    MouseEventKind::ScrollDown => engine.scroll_by(WHEEL_STEP),
                    MouseEventKind::Down(MouseButton::Left) => {
                        let p = Point::new(
                            (f64::from(mouse.column) + 0.5) * CELL_W,
                            (f64::from(mouse.row) + 0.5) * CELL_H,
                        );
                        if let Some((_, href)) = links.iter().find(|(r, _)| r.contains(p)) {
                            if !engine.activate_href(href) && !href.starts_with('#') {
                                open_external(href);
                            }
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }
    Ok(())
}

fn open_external(target: &str) {
    if let Err(err) = open::that(target) {
        tracing::warn!(%target, "failed to open: {err}");
    }
}

fn draw_command(
    buf: &mut ratatui::buffer::Buffer,
    cmd: &RenderCommand,
    cols: u16,
    rows: u16,
    light: bool,
) {
    let bg = token_color(ThemeToken::Background, light);
    match cmd {
        RenderCommand::DrawRect {
            rect,
            fill,
            opacity,
            ..
        } => {
            let color = blend(token_color(*fill, light), bg, *opacity);
            // Sub-cell rects (status dots, carets) become a single glyph.
            if rect.w <= CELL_W && rect.h <= CELL_H {
                let col = (rect.x / CELL_W) as i32;
                let row = (rect.y / CELL_H) as i32;
                if in_bounds(col, row, cols, rows) {
                    buf[(col as u16, row as u16)].set_char('●').set_fg(color);
                }
                return;
            }
            let col0 = (rect.x / CELL_W).floor().max(0.0) as u16;
            let row0 = (rect.y / CELL_H).floor().max(0.0) as u16;
            let col1 = ((rect.right() / CELL_W).ceil() as u16).min(cols);
            let row1 = ((rect.bottom() / CELL_H).ceil() as u16).min(rows);
            for row in row0..row1 {
                for col in col0..col1 {
                    buf[(col, row)].set_bg(color);
                }
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
            if *opacity <= 0.01 {
                return;
            }
            let fg = blend(token_color(*color, light), bg, *opacity);
            let len = text.chars().count() as i32;
            let mut col = (position.x / CELL_W).round() as i32;
            match align {
                TextAlign::Left => {}
                TextAlign::Center => col -= len / 2,
                TextAlign::Right => col -= len,
            }
            let row = (position.y / CELL_H) as i32;
            if row < 0 || row >= i32::from(rows) {
                return;
            }
            let mut style = Style::default().fg(fg);
            if *font == FontKind::Display && *size >= 28.0 {
                style = style.add_modifier(Modifier::BOLD);
            }
            for (i, ch) in text.chars().enumerate() {
                let x = col + i as i32;
                if x < 0 || x >= i32::from(cols) {
                    continue;
                }
                let cell = &mut buf[(x as u16, row as u16)];
                cell.set_char(ch);
                cell.set_style(style);
            }
        }

        RenderCommand::DrawLine {
            from,
            to,
            color,
            opacity,
            ..
        } => {
            let fg = blend(token_color(*color, light), bg, *opacity);
            if (from.x - to.x).abs() < f64::EPSILON {
                // Vertical.
                let col = (from.x / CELL_W) as i32;
                let r0 = (from.y.min(to.y) / CELL_H) as i32;
                let r1 = (from.y.max(to.y) / CELL_H) as i32;
                for row in r0..=r1 {
                    if in_bounds(col, row, cols, rows) {
                        buf[(col as u16, row as u16)].set_char('│').set_fg(fg);
                    }
                }
            } else {
                let row = (from.y / CELL_H) as i32;
                let c0 = (from.x.min(to.x) / CELL_W) as i32;
                let c1 = (from.x.max(to.x) / CELL_W) as i32;
                for col in c0..=c1 {
                    if in_bounds(col, row, cols, rows) {
                        buf[(col as u16, row as u16)].set_char('─').set_fg(fg);
                    }
                }
            }
        }

        // Link regions are hit targets, sections are semantic only.
        RenderCommand::LinkRegion { .. }
        | RenderCommand::BeginSection { .. }
        | RenderCommand::EndSection => {}
    }
}

fn in_bounds(col: i32, row: i32, cols: u16, rows: u16) -> bool {
    col >= 0 && row >= 0 && col < i32::from(cols) && row < i32::from(rows)
}

/// Blend a token color toward the page background by `opacity`.
fn blend(fg: Color, bg: Color, opacity: f64) -> Color {
    let a = opacity.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| -> u8 {
                (f64::from(b) + (f64::from(f) - f64::from(b)) * a).round() as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        (fg, _) => fg,
    }
}

fn token_color(token: ThemeToken, light: bool) -> Color {
    if light {
        return token_color_light(token);
    }
    match token {
        ThemeToken::Background => Color::Rgb(0x06, 0x0b, 0x18),
        ThemeToken::Surface => Color::Rgb(0x0f, 0x17, 0x2a),
        ThemeToken::SurfaceRaised => Color::Rgb(0x15, 0x1f, 0x38),
        ThemeToken::Border => Color::Rgb(0x27, 0x30, 0x45),
        ThemeToken::AccentBorder => Color::Rgb(0x2c, 0x3b, 0x63),
        ThemeToken::TextPrimary => Color::Rgb(0xf1, 0xf5, 0xf9),
        ThemeToken::TextSecondary => Color::Rgb(0xa5, 0xb1, 0xc5),
        ThemeToken::TextMuted => Color::Rgb(0x5c, 0x68, 0x80),
        ThemeToken::Accent => Color::Rgb(0x63, 0x91, 0xff),
        ThemeToken::AccentSoft => Color::Rgb(0x7d, 0xa6, 0xf7),
        ThemeToken::AccentBright => Color::Rgb(0x93, 0xbb, 0xff),
        ThemeToken::AccentViolet => Color::Rgb(0xa7, 0x8b, 0xfa),
        ThemeToken::StatusLive => Color::Rgb(0x34, 0xd3, 0x99),
        ThemeToken::Danger => Color::Rgb(0xef, 0x6a, 0x6a),
        ThemeToken::NavBackground => Color::Rgb(0x06, 0x0b, 0x18),
        ThemeToken::NavBorder => Color::Rgb(0x1c, 0x25, 0x38),
        ThemeToken::NavText => Color::Rgb(0x8a, 0x96, 0xaa),
        ThemeToken::PillBackground => Color::Rgb(0x0f, 0x17, 0x2a),
        ThemeToken::PillText => Color::Rgb(0xcb, 0xd5, 0xe1),
        ThemeToken::ChipBackground => Color::Rgb(0x10, 0x1c, 0x38),
        ThemeToken::ButtonPrimary => Color::Rgb(0x4a, 0x7c, 0xff),
        ThemeToken::ButtonPrimaryText => Color::Rgb(0xff, 0xff, 0xff),
        ThemeToken::TimelineDot => Color::Rgb(0x1d, 0x2c, 0x52),
        ThemeToken::TimelineLine => Color::Rgb(0x2c, 0x3b, 0x63),
    }
}

fn token_color_light(token: ThemeToken) -> Color {
    match token {
        ThemeToken::Background => Color::Rgb(0xfa, 0xfb, 0xfe),
        ThemeToken::Surface => Color::Rgb(0xf0, 0xf3, 0xf9),
        ThemeToken::SurfaceRaised => Color::Rgb(0xe8, 0xec, 0xf6),
        ThemeToken::Border => Color::Rgb(0xd4, 0xda, 0xe6),
        ThemeToken::AccentBorder => Color::Rgb(0xc0, 0xd0, 0xf2),
        ThemeToken::TextPrimary => Color::Rgb(0x13, 0x1a, 0x2a),
        ThemeToken::TextSecondary => Color::Rgb(0x44, 0x50, 0x66),
        ThemeToken::TextMuted => Color::Rgb(0x7a, 0x85, 0x99),
        ThemeToken::Accent => Color::Rgb(0x2f, 0x62, 0xd8),
        ThemeToken::AccentSoft => Color::Rgb(0x3f, 0x6f, 0xdd),
        ThemeToken::AccentBright => Color::Rgb(0x24, 0x54, 0xc4),
        ThemeToken::AccentViolet => Color::Rgb(0x7c, 0x5c, 0xd6),
        ThemeToken::StatusLive => Color::Rgb(0x13, 0x8a, 0x62),
        ThemeToken::Danger => Color::Rgb(0xc2, 0x41, 0x41),
        ThemeToken::NavBackground => Color::Rgb(0xfa, 0xfb, 0xfe),
        ThemeToken::NavBorder => Color::Rgb(0xdd, 0xe2, 0xee),
        ThemeToken::NavText => Color::Rgb(0x5a, 0x66, 0x7c),
        ThemeToken::PillBackground => Color::Rgb(0xee, 0xf1, 0xf8),
        ThemeToken::PillText => Color::Rgb(0x30, 0x3a, 0x4e),
        ThemeToken::ChipBackground => Color::Rgb(0xe4, 0xeb, 0xfa),
        ThemeToken::ButtonPrimary => Color::Rgb(0x2f, 0x62, 0xd8),
        ThemeToken::ButtonPrimaryText => Color::Rgb(0xff, 0xff, 0xff),
        ThemeToken::TimelineDot => Color::Rgb(0xd6, 0xe0, 0xf6),
        ThemeToken::TimelineLine => Color::Rgb(0xc0, 0xd0, 0xf2),
    }
}
