//! Layout and rendering engine for the yearly progress calendar.
//!
//! ```text
//!   CalendarDate ─┬─▶ Layout ──▶ SceneBuilder ──▶ SceneDocument ──▶ svg / raster
//!   Classifier ───┘
//! ```

pub mod calendar;
pub mod classify;
pub mod layout;
pub mod palette;
pub mod scene;
pub mod svg;

pub use calendar::{CalendarDate, DateError, YearProgress};
pub use classify::{Classifier, HolidayCalendar, MonthDay, SeasonCategory};
pub use layout::{ConfigError, Layout, LayoutConfig};
pub use palette::Palette;
pub use scene::{SceneBuilder, Style, render};
