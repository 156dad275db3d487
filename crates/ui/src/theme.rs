use unfold_protocol::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Midnight-blue page palette.
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x06, 0x0b, 0x18),
        Surface => ResolvedColor::rgba(0x0f, 0x17, 0x2a, 220),
        SurfaceRaised => ResolvedColor::rgba(0x16, 0x20, 0x3a, 235),
        Border => ResolvedColor::rgba(0x94, 0xa3, 0xb8, 28),
        AccentBorder => ResolvedColor::rgba(0x63, 0x91, 0xff, 42),

        TextPrimary => ResolvedColor::rgb(0xf1, 0xf5, 0xf9),
        TextSecondary => ResolvedColor::rgba(0xa9, 0xb6, 0xca, 235),
        TextMuted => ResolvedColor::rgba(0x94, 0xa3, 0xb8, 120),

        Accent => ResolvedColor::rgb(0x63, 0x91, 0xff),
        AccentSoft => ResolvedColor::rgb(0x7d, 0xa6, 0xf7),
        AccentBright => ResolvedColor::rgb(0x93, 0xbb, 0xff),
        AccentViolet => ResolvedColor::rgb(0xa7, 0x8b, 0xfa),

        StatusLive => ResolvedColor::rgb(0x34, 0xd3, 0x99),
        Danger => ResolvedColor::rgba(0xef, 0x44, 0x44, 200),

        NavBackground => ResolvedColor::rgb(0x06, 0x0b, 0x18),
        NavBorder => ResolvedColor::rgba(0x94, 0xa3, 0xb8, 18),
        NavText => ResolvedColor::rgba(0x94, 0xa3, 0xb8, 160),

        PillBackground => ResolvedColor::rgba(0x0f, 0x17, 0x2a, 160),
        PillText => ResolvedColor::rgba(0xcb, 0xd5, 0xe1, 230),
        ChipBackground => ResolvedColor::rgba(0x63, 0x91, 0xff, 22),

        ButtonPrimary => ResolvedColor::rgb(0x4a, 0x7c, 0xff),
        ButtonPrimaryText => ResolvedColor::rgb(0xff, 0xff, 0xff),

        TimelineDot => ResolvedColor::rgba(0x63, 0x91, 0xff, 60),
        TimelineLine => ResolvedColor::rgba(0x63, 0x91, 0xff, 70),
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(250, 251, 254),
        Surface => ResolvedColor::rgb(240, 243, 249),
        SurfaceRaised => ResolvedColor::rgb(232, 236, 246),
        Border => ResolvedColor::rgb(212, 218, 230),
        AccentBorder => ResolvedColor::rgba(47, 98, 216, 70),

        TextPrimary => ResolvedColor::rgb(19, 26, 42),
        TextSecondary => ResolvedColor::rgb(68, 80, 102),
        TextMuted => ResolvedColor::rgb(122, 133, 153),

        Accent => ResolvedColor::rgb(47, 98, 216),
        AccentSoft => ResolvedColor::rgb(63, 111, 221),
        AccentBright => ResolvedColor::rgb(36, 84, 196),
        AccentViolet => ResolvedColor::rgb(124, 92, 214),

        StatusLive => ResolvedColor::rgb(19, 138, 98),
        Danger => ResolvedColor::rgb(194, 65, 65),

        NavBackground => ResolvedColor::rgb(250, 251, 254),
        NavBorder => ResolvedColor::rgb(221, 226, 238),
        NavText => ResolvedColor::rgb(90, 102, 124),

        PillBackground => ResolvedColor::rgb(238, 241, 248),
        PillText => ResolvedColor::rgb(48, 58, 78),
        ChipBackground => ResolvedColor::rgba(47, 98, 216, 26),

        ButtonPrimary => ResolvedColor::rgb(47, 98, 216),
        ButtonPrimaryText => ResolvedColor::rgb(255, 255, 255),

        TimelineDot => ResolvedColor::rgba(47, 98, 216, 60),
        TimelineLine => ResolvedColor::rgba(47, 98, 216, 70),
    }
}

// ── egui visual presets ────────────────────────────────────────────────

/// Midnight-blue dark visuals for egui widgets.
pub fn midnight_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = egui::Color32::from_rgb(0x06, 0x0b, 0x18);
    v.window_fill = egui::Color32::from_rgb(0x0f, 0x17, 0x2a);
    v.extreme_bg_color = egui::Color32::from_rgb(0x04, 0x08, 0x12);
    v.faint_bg_color = egui::Color32::from_rgb(0x0f, 0x17, 0x2a);
    v.hyperlink_color = egui::Color32::from_rgb(0x7d, 0xa6, 0xf7);
    v.warn_fg_color = egui::Color32::from_rgb(0xfa, 0xb3, 0x6b);
    v.error_fg_color = egui::Color32::from_rgb(0xef, 0x6a, 0x6a);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0x63, 0x91, 0xff, 70);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0x63, 0x91, 0xff));
    v
}

/// Light visuals for egui widgets.
pub fn daylight_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = egui::Color32::from_rgb(250, 251, 254);
    v.window_fill = egui::Color32::WHITE;
    v.hyperlink_color = egui::Color32::from_rgb(47, 98, 216);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(47, 98, 216, 50);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(47, 98, 216));
    v
}
