use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::{Point, Rect};

/// A single, stateless render instruction.
///
/// The core emits a `Vec<RenderCommand>` per frame, already translated
/// into viewport space. Renderers consume the list sequentially — each
/// command carries all the data it needs, including the opacity the
/// reveal engine computed for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Draw a filled rectangle, optionally stroked.
    DrawRect {
        rect: Rect,
        fill: ThemeToken,
        border: Option<ThemeToken>,
        corner_radius: f64,
        opacity: f64,
    },

    /// Draw a text run at a position.
    DrawText {
        position: Point,
        text: SharedStr,
        color: ThemeToken,
        font: FontKind,
        size: f64,
        align: TextAlign,
        opacity: f64,
    },

    /// Draw a line segment.
    DrawLine {
        from: Point,
        to: Point,
        color: ThemeToken,
        width: f64,
        opacity: f64,
    },

    /// Begin a logical section (an anchor target). Renderers may use this
    /// for grouping or accessibility; tests use it to find section output.
    BeginSection {
        id: SharedStr,
        label: Option<SharedStr>,
    },

    /// End the current section.
    EndSection,

    /// An interactive region: a nav entry, button, or outbound link.
    /// `href` is either an in-page anchor (`#projects`) or an external
    /// target (`mailto:…`, `https://…`).
    LinkRegion {
        rect: Rect,
        href: SharedStr,
        label: SharedStr,
    },
}

impl RenderCommand {
    /// The opacity carried by a drawing command (1.0 for non-drawing ones).
    pub fn opacity(&self) -> f64 {
        match self {
            Self::DrawRect { opacity, .. }
            | Self::DrawText { opacity, .. }
            | Self::DrawLine { opacity, .. } => *opacity,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// The three text families of the page design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontKind {
    /// Serif display face for headlines and metric values.
    Display,
    /// Sans body face.
    Body,
    /// Monospace face for eyebrows, chips, and the footer.
    Mono,
}
