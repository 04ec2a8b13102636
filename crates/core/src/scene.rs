use serde::{Deserialize, Serialize};
use yeardots_protocol::{
    Color, Paint, Point, Rect, SceneCommand, SceneDocument, Stroke, TextAlign, TextStyle,
};

use crate::calendar::{CalendarDate, YearProgress};
use crate::classify::Classifier;
use crate::layout::{Layout, MonthCell, ProgressBarSpec};
use crate::palette::Palette;

pub const SEASON_GRADIENT_ID: &str = "seasonGradient";

const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const MONTH_LABEL_STYLE: TextStyle = TextStyle {
    font_size: 32.0,
    font_weight: 600,
    letter_spacing: 2.0,
};

const PROGRESS_LABEL_STYLE: TextStyle = TextStyle {
    font_size: 24.0,
    font_weight: 500,
    letter_spacing: 0.0,
};

const PROGRESS_TRACK_OPACITY: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Monochrome,
    Colored,
}

impl From<bool> for Style {
    fn from(colored: bool) -> Self {
        if colored {
            Style::Colored
        } else {
            Style::Monochrome
        }
    }
}

/// How a dot is painted: completed days are filled, the rest outlined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DotPaint {
    Fill,
    Outline { width: f64 },
}

/// Resolved appearance of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotSpec {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
    pub paint: DotPaint,
}

impl DotSpec {
    fn into_command(self) -> SceneCommand {
        match self.paint {
            DotPaint::Fill => SceneCommand::DrawCircle {
                center: self.center,
                radius: self.radius,
                fill: Some(self.color),
                stroke: None,
            },
            DotPaint::Outline { width } => SceneCommand::DrawCircle {
                center: self.center,
                radius: self.radius,
                fill: None,
                stroke: Some(Stroke {
                    color: self.color,
                    width,
                }),
            },
        }
    }
}

/// Composes layout, classification and palette into a [`SceneDocument`].
///
/// Holds only immutable configuration, so one builder can serve any number
/// of renders.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    layout: Layout,
    palette: Palette,
    classifier: Classifier,
}

impl SceneBuilder {
    pub fn new(layout: Layout, palette: Palette, classifier: Classifier) -> Self {
        Self {
            layout,
            palette,
            classifier,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Build the full scene for `date`.
    ///
    /// Paint order: background, then per month its label followed by its
    /// dots, then the progress track, the gradient definition (colored
    /// only), the progress fill (only when wider than zero) and finally the
    /// percentage label.
    pub fn build(&self, date: &CalendarDate, style: Style) -> SceneDocument {
        let config = &self.layout.config;
        let progress = date.progress();
        let mut doc = SceneDocument::new(config.canvas_width, config.canvas_height);

        doc.push(SceneCommand::DrawRect {
            rect: Rect::new(0.0, 0.0, config.canvas_width, config.canvas_height),
            corner_radius: 0.0,
            fill: Paint::Solid(self.palette.background),
            opacity: 1.0,
        });

        let mut ordinal = 0;
        for cell in self.layout.month_cells(date.year()) {
            doc.push(SceneCommand::DrawText {
                position: self.layout.label_anchor(&cell),
                text: MONTH_NAMES[cell.index as usize].to_string(),
                color: self.palette.month_label,
                style: MONTH_LABEL_STYLE,
                align: TextAlign::Center,
            });
            for day_index in 0..cell.day_count {
                ordinal += 1;
                let dot = self.dot(&cell, day_index, progress.is_completed(ordinal), style);
                doc.push(dot.into_command());
            }
        }

        let mut bar = self.layout.progress_bar(&progress);
        if style == Style::Colored {
            bar.gradient_stops = Some(self.palette.season_gradient());
        }
        self.push_progress_bar(&mut doc, bar, &progress);

        tracing::debug!(
            year = date.year(),
            day_of_year = date.day_of_year(),
            ?style,
            commands = doc.commands.len(),
            "scene built"
        );
        doc
    }

    pub fn dot(&self, cell: &MonthCell, day_index: u32, completed: bool, style: Style) -> DotSpec {
        let center = self.layout.dot_center(cell, day_index);
        let category = match style {
            Style::Colored => Some(self.classifier.classify_on(
                cell.index,
                day_index + 1,
                cell.weekday_of(day_index),
            )),
            Style::Monochrome => None,
        };

        if completed {
            DotSpec {
                center,
                radius: self.layout.config.dot_radius,
                color: category.map_or(self.palette.completed_day, |c| self.palette.fill_for(c)),
                paint: DotPaint::Fill,
            }
        } else {
            DotSpec {
                center,
                radius: self.layout.config.dot_radius - self.layout.config.outline_inset,
                color: category.map_or(self.palette.incomplete_day_stroke, |c| {
                    self.palette.stroke_for(c)
                }),
                paint: DotPaint::Outline {
                    width: self.layout.config.outline_width,
                },
            }
        }
    }

    fn push_progress_bar(
        &self,
        doc: &mut SceneDocument,
        bar: ProgressBarSpec,
        progress: &YearProgress,
    ) {
        doc.push(SceneCommand::DrawRect {
            rect: bar.rect,
            corner_radius: bar.corner_radius,
            fill: Paint::Solid(self.palette.incomplete_day_stroke),
            opacity: PROGRESS_TRACK_OPACITY,
        });

        let fill = match bar.gradient_stops {
            Some(stops) => {
                doc.push(SceneCommand::DefineGradient {
                    id: SEASON_GRADIENT_ID.to_string(),
                    stops,
                });
                Paint::Gradient(SEASON_GRADIENT_ID.to_string())
            }
            None => Paint::Solid(self.palette.completed_day),
        };

        // Zero-width shapes are skipped rather than handed to the rasterizer.
        if bar.filled_width > 0.0 {
            doc.push(SceneCommand::DrawRect {
                rect: Rect::new(bar.rect.x, bar.rect.y, bar.filled_width, bar.rect.h),
                corner_radius: bar.corner_radius,
                fill,
                opacity: 1.0,
            });
        }

        doc.push(SceneCommand::DrawText {
            position: bar.label_anchor,
            text: format!("{}%", progress.percent()),
            color: self.palette.month_label,
            style: PROGRESS_LABEL_STYLE,
            align: TextAlign::Right,
        });
    }
}

/// Render `date` with the default layout, palette and holiday calendar.
pub fn render(date: &CalendarDate, colored: bool) -> SceneDocument {
    SceneBuilder::default().build(date, Style::from(colored))
}
