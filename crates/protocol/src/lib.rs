pub mod commands;
pub mod page;
pub mod shared_str;
pub mod theme;
pub mod types;

pub use commands::{FontKind, RenderCommand, TextAlign};
pub use page::{PageSpec, SectionId};
pub use shared_str::SharedStr;
pub use theme::ThemeToken;
pub use types::{Point, Rect, Viewport};
