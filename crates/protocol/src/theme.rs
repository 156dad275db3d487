use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
///
/// Views never pick concrete colors; they tag commands with a token and
/// each renderer maps it through its palette (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    SurfaceRaised,
    Border,
    AccentBorder,

    TextPrimary,
    TextSecondary,
    TextMuted,

    Accent,
    AccentSoft,
    AccentBright,
    AccentViolet,

    StatusLive,
    Danger,

    // Navigation bar
    NavBackground,
    NavBorder,
    NavText,

    // Skill pills and tag chips
    PillBackground,
    PillText,
    ChipBackground,

    // Call-to-action buttons
    ButtonPrimary,
    ButtonPrimaryText,

    // Journey timeline
    TimelineDot,
    TimelineLine,
}
