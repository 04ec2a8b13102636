pub mod color;
pub mod commands;
pub mod types;

pub use color::{Color, ColorParseError};
pub use commands::{GradientStop, Paint, SceneCommand, SceneDocument, Stroke, TextAlign, TextStyle};
pub use types::{Point, Rect};
