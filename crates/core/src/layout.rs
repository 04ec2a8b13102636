use serde::Deserialize;
use thiserror::Error;
use yeardots_protocol::{GradientStop, Point, Rect};

use crate::calendar::{
    DAYS_PER_WEEK, MONTHS_PER_YEAR, YearProgress, days_in_month, first_weekday_of_month,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("canvas must be positive, got {width}x{height}")]
    EmptyCanvas { width: f64, height: f64 },
    #[error("a {cols}x{rows} grid cannot hold twelve months")]
    GridTooSmall { cols: u32, rows: u32 },
    #[error("a month grid needs at least 6 week rows, got {0}")]
    TooFewWeekRows(u32),
    #[error("dot radius must be positive, got {0}")]
    BadDotRadius(f64),
    #[error("month width {month_width} cannot fit a row of dots of radius {dot_radius}")]
    MonthTooNarrow { month_width: f64, dot_radius: f64 },
    #[error("progress bar has no room next to its label (width {0})")]
    ProgressBarTooNarrow(f64),
    #[error("grid spans y {top}..{bottom}, outside the unreserved band {min}..{max}")]
    GridOverflowsPadding {
        top: f64,
        bottom: f64,
        min: f64,
        max: f64,
    },
}

/// Canvas and spacing constants. Every field is in canvas pixels.
///
/// The defaults target a 1179x2556 phone lock screen with room left for
/// the clock at the top and the home indicator at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub grid_cols: u32,
    pub grid_rows: u32,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub padding_horizontal: f64,
    pub month_gap_x: f64,
    pub month_gap_y: f64,
    pub dot_radius: f64,
    pub dot_gap: f64,
    pub label_height: f64,
    pub max_week_rows: u32,
    pub progress_bar_height: f64,
    pub progress_bar_gap: f64,
    pub progress_label_gap: f64,
    pub progress_label_width: f64,
    /// Radius reduction of an outlined dot so its stroke stays inside the
    /// filled footprint.
    pub outline_inset: f64,
    pub outline_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1179.0,
            canvas_height: 2556.0,
            grid_cols: 4,
            grid_rows: 3,
            padding_top: 450.0,
            padding_bottom: 200.0,
            padding_horizontal: 60.0,
            month_gap_x: 30.0,
            month_gap_y: 50.0,
            dot_radius: 12.0,
            dot_gap: 8.0,
            label_height: 45.0,
            max_week_rows: 6,
            progress_bar_height: 16.0,
            progress_bar_gap: 35.0,
            progress_label_gap: 20.0,
            progress_label_width: 60.0,
            outline_inset: 1.5,
            outline_width: 3.0,
        }
    }
}

impl LayoutConfig {
    fn float_fields(&self) -> [(&'static str, f64); 16] {
        [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("padding_top", self.padding_top),
            ("padding_bottom", self.padding_bottom),
            ("padding_horizontal", self.padding_horizontal),
            ("month_gap_x", self.month_gap_x),
            ("month_gap_y", self.month_gap_y),
            ("dot_radius", self.dot_radius),
            ("dot_gap", self.dot_gap),
            ("label_height", self.label_height),
            ("progress_bar_height", self.progress_bar_height),
            ("progress_bar_gap", self.progress_bar_gap),
            ("progress_label_gap", self.progress_label_gap),
            ("progress_label_width", self.progress_label_width),
            ("outline_inset", self.outline_inset),
            ("outline_width", self.outline_width),
        ]
    }
}

/// Placement of one month's mini calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthCell {
    pub index: u32,
    pub column: u32,
    pub row: u32,
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// Weekday of the 1st, Sunday = 0.
    pub first_weekday: u32,
    pub day_count: u32,
}

impl MonthCell {
    /// Weekday of the 0-based `day_index` within the month.
    pub fn weekday_of(&self, day_index: u32) -> u32 {
        (self.first_weekday + day_index) % DAYS_PER_WEEK
    }

    /// Calendar week row of the 0-based `day_index`.
    pub fn week_of(&self, day_index: u32) -> u32 {
        (self.first_weekday + day_index) / DAYS_PER_WEEK
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarSpec {
    pub rect: Rect,
    pub corner_radius: f64,
    pub filled_width: f64,
    /// Right edge the percentage label is anchored to.
    pub label_anchor: Point,
    pub gradient_stops: Option<Vec<GradientStop>>,
}

/// Geometry derived once from a [`LayoutConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub config: LayoutConfig,
    pub month_width: f64,
    pub month_height: f64,
    /// Horizontal distance between neighbouring weekday columns.
    pub dot_spacing: f64,
    /// Vertical distance between week rows.
    pub dot_pitch: f64,
    pub total_grid_height: f64,
    pub vertical_offset: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self::compute(LayoutConfig::default())
    }
}

impl Layout {
    /// Validate `config` and derive the grid geometry from it.
    pub fn new(config: LayoutConfig) -> Result<Self, ConfigError> {
        let c = &config;
        if let Some((field, value)) = c.float_fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field, value });
        }
        if !(positive(c.canvas_width) && positive(c.canvas_height)) {
            return Err(ConfigError::EmptyCanvas {
                width: c.canvas_width,
                height: c.canvas_height,
            });
        }
        let cells = c.grid_cols.checked_mul(c.grid_rows);
        if cells.is_none_or(|n| n < MONTHS_PER_YEAR) {
            return Err(ConfigError::GridTooSmall {
                cols: c.grid_cols,
                rows: c.grid_rows,
            });
        }
        if c.max_week_rows < 6 {
            return Err(ConfigError::TooFewWeekRows(c.max_week_rows));
        }
        if !positive(c.dot_radius) {
            return Err(ConfigError::BadDotRadius(c.dot_radius));
        }

        let layout = Self::compute(config);
        if !positive(layout.dot_spacing) {
            return Err(ConfigError::MonthTooNarrow {
                month_width: layout.month_width,
                dot_radius: c.dot_radius,
            });
        }
        let bar = layout.progress_bar_rect();
        if !positive(bar.w) {
            return Err(ConfigError::ProgressBarTooNarrow(bar.w));
        }
        let top = layout.vertical_offset;
        let bottom = top + layout.total_grid_height;
        let (min, max) = (c.padding_top, c.canvas_height - c.padding_bottom);
        if !(top.is_finite() && bottom.is_finite()) || top < min || bottom > max {
            return Err(ConfigError::GridOverflowsPadding {
                top,
                bottom,
                min,
                max,
            });
        }

        tracing::debug!(
            month_width = layout.month_width,
            month_height = layout.month_height,
            dot_spacing = layout.dot_spacing,
            vertical_offset = layout.vertical_offset,
            "layout computed"
        );
        Ok(layout)
    }

    fn compute(config: LayoutConfig) -> Self {
        let c = &config;
        let cols = f64::from(c.grid_cols);
        let rows = f64::from(c.grid_rows);

        let month_width =
            (c.canvas_width - 2.0 * c.padding_horizontal - (cols - 1.0) * c.month_gap_x) / cols;
        let dot_pitch = 2.0 * c.dot_radius + c.dot_gap;
        // Fixed height regardless of how many weeks a month spans, so rows align.
        let month_height = c.label_height + f64::from(c.max_week_rows) * dot_pitch;
        // First and last dot centers sit flush with the cell's inner edges.
        let dot_spacing = (month_width - 2.0 * c.dot_radius) / f64::from(DAYS_PER_WEEK - 1);

        let total_grid_height = rows * month_height
            + (rows - 1.0) * c.month_gap_y
            + c.progress_bar_gap
            + c.progress_bar_height;
        let vertical_offset = (c.canvas_height - total_grid_height) / 2.0;

        Self {
            config,
            month_width,
            month_height,
            dot_spacing,
            dot_pitch,
            total_grid_height,
            vertical_offset,
        }
    }

    pub fn month_cell(&self, year: i32, month: u32) -> MonthCell {
        let c = &self.config;
        let column = month % c.grid_cols;
        let row = month / c.grid_cols;
        let origin = Point::new(
            c.padding_horizontal + f64::from(column) * (self.month_width + c.month_gap_x),
            self.vertical_offset + f64::from(row) * (self.month_height + c.month_gap_y),
        );
        MonthCell {
            index: month,
            column,
            row,
            origin,
            width: self.month_width,
            height: self.month_height,
            first_weekday: first_weekday_of_month(year, month),
            day_count: days_in_month(year, month),
        }
    }

    pub fn month_cells(&self, year: i32) -> Vec<MonthCell> {
        (0..MONTHS_PER_YEAR)
            .map(|month| self.month_cell(year, month))
            .collect()
    }

    /// Anchor of the month label: horizontally centered on the cell, on its
    /// top edge.
    pub fn label_anchor(&self, cell: &MonthCell) -> Point {
        Point::new(cell.origin.x + cell.width / 2.0, cell.origin.y)
    }

    /// Center of the dot for the 0-based `day_index` of `cell`.
    pub fn dot_center(&self, cell: &MonthCell, day_index: u32) -> Point {
        let r = self.config.dot_radius;
        let dots_top = cell.origin.y + self.config.label_height;
        Point::new(
            cell.origin.x + r + f64::from(cell.weekday_of(day_index)) * self.dot_spacing,
            dots_top + f64::from(cell.week_of(day_index)) * self.dot_pitch + r,
        )
    }

    /// Right edge of the rightmost grid column.
    fn grid_right_edge(&self) -> f64 {
        let c = &self.config;
        c.padding_horizontal
            + f64::from(c.grid_cols - 1) * (self.month_width + c.month_gap_x)
            + self.month_width
    }

    fn progress_bar_rect(&self) -> Rect {
        let c = &self.config;
        let rows = f64::from(c.grid_rows);
        let y = self.vertical_offset
            + rows * self.month_height
            + (rows - 1.0) * c.month_gap_y
            + c.progress_bar_gap;
        let x = c.padding_horizontal;
        let width = (self.grid_right_edge() - x) - c.progress_label_width - c.progress_label_gap;
        Rect::new(x, y, width, c.progress_bar_height)
    }

    /// Progress bar geometry for `progress`. Gradient stops are left for the
    /// scene builder to attach.
    pub fn progress_bar(&self, progress: &YearProgress) -> ProgressBarSpec {
        let rect = self.progress_bar_rect();
        ProgressBarSpec {
            rect,
            corner_radius: rect.h / 2.0,
            filled_width: rect.w * progress.fraction_complete,
            label_anchor: Point::new(self.grid_right_edge(), rect.y + rect.h / 2.0 + 8.0),
            gradient_stops: None,
        }
    }
}

fn positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}
