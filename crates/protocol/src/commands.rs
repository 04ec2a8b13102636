use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::types::{Point, Rect};

/// A single, stateless drawing instruction.
///
/// The core emits these in paint order: later commands are drawn on top of
/// earlier ones. Each command carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneCommand {
    /// Draw a rectangle, optionally with rounded corners.
    DrawRect {
        rect: Rect,
        corner_radius: f64,
        fill: Paint,
        opacity: f64,
    },

    /// Draw a circle. A dot is either filled or stroked, never both.
    DrawCircle {
        center: Point,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },

    /// Draw a text string anchored at a position.
    DrawText {
        position: Point,
        text: String,
        color: Color,
        style: TextStyle,
        align: TextAlign,
    },

    /// Define a horizontal linear gradient that later commands may
    /// reference through [`Paint::Gradient`].
    DefineGradient { id: String, stops: Vec<GradientStop> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Paint {
    Solid(Color),
    /// Reference to a gradient defined earlier by id.
    Gradient(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient in percent (0–100).
    pub offset_percent: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_weight: u16,
    pub letter_spacing: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Center,
    Right,
}

/// The complete, ordered output of one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<SceneCommand>,
}

impl SceneDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: SceneCommand) {
        self.commands.push(command);
    }

    /// Iterate over every circle in paint order.
    pub fn circles(&self) -> impl Iterator<Item = &SceneCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, SceneCommand::DrawCircle { .. }))
    }
}
