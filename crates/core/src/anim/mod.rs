pub mod reveal;
pub mod scroll;
pub mod typing;
pub mod visibility;

pub use reveal::{RevealConfig, RevealStyle, RevealTransform};
pub use scroll::{NAV_ELEVATION_THRESHOLD, ScrollState};
pub use typing::Typewriter;
pub use visibility::{DEFAULT_THRESHOLD, ViewportEntry};
