use serde::Deserialize;
use yeardots_protocol::{Color, GradientStop};

use crate::classify::SeasonCategory;

/// Colors used by the scene builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub background: Color,
    pub completed_day: Color,
    pub incomplete_day_stroke: Color,
    pub month_label: Color,
    pub summer: Color,
    pub spring: Color,
    pub winter: Color,
    /// Shared by holidays and weekends.
    pub holiday: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x1c, 0x1d, 0x17),
            completed_day: Color::rgb(0xd9, 0xd9, 0xda),
            incomplete_day_stroke: Color::rgb(0xa6, 0xa6, 0xa4),
            month_label: Color::rgb(0x89, 0x89, 0x89),
            summer: Color::rgb(0xe8, 0xd9, 0xa0),
            spring: Color::rgb(0xc5, 0xe0, 0xb4),
            winter: Color::rgb(0xd4, 0xc5, 0xe8),
            holiday: Color::rgb(0xb0, 0xb0, 0xb0),
        }
    }
}

/// Band of the progress bar gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Winter,
    Spring,
    Summer,
    Fall,
}

/// Hardcoded approximation of the season windows across the year. The
/// offsets intentionally do not track the classifier boundaries.
const SEASON_GRADIENT: [(f64, Band); 10] = [
    (0.0, Band::Winter),
    (9.0, Band::Winter),
    (10.0, Band::Spring),
    (35.0, Band::Spring),
    (42.0, Band::Summer),
    (61.0, Band::Summer),
    (62.0, Band::Fall),
    (86.0, Band::Fall),
    (87.0, Band::Winter),
    (100.0, Band::Winter),
];

impl Palette {
    /// Fill of a completed day in colored mode.
    pub fn fill_for(&self, category: SeasonCategory) -> Color {
        match category {
            SeasonCategory::Holiday | SeasonCategory::Weekend => self.holiday,
            SeasonCategory::Winter => self.winter,
            SeasonCategory::Spring => self.spring,
            SeasonCategory::Summer => self.summer,
            SeasonCategory::None => self.completed_day,
        }
    }

    /// Stroke of an upcoming day in colored mode: the muted fill color.
    ///
    /// Unclassified days use the muted completed-day color, not the
    /// monochrome incomplete stroke.
    pub fn stroke_for(&self, category: SeasonCategory) -> Color {
        self.fill_for(category).muted()
    }

    pub fn season_gradient(&self) -> Vec<GradientStop> {
        SEASON_GRADIENT
            .iter()
            .map(|&(offset_percent, band)| GradientStop {
                offset_percent,
                color: match band {
                    Band::Winter => self.winter,
                    Band::Spring => self.spring,
                    Band::Summer => self.summer,
                    Band::Fall => self.completed_day,
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_and_holiday_share_a_color() {
        let p = Palette::default();
        assert_eq!(p.fill_for(SeasonCategory::Weekend), p.fill_for(SeasonCategory::Holiday));
        assert_eq!(p.fill_for(SeasonCategory::None), p.completed_day);
    }

    #[test]
    fn unclassified_stroke_is_muted_completed_color() {
        let p = Palette::default();
        let stroke = p.stroke_for(SeasonCategory::None);
        assert_eq!(stroke.to_string(), "#D9D9DA80");
        assert_ne!(stroke, p.incomplete_day_stroke);
    }

    #[test]
    fn gradient_has_five_bands() {
        let stops = Palette::default().season_gradient();
        let offsets: Vec<f64> = stops.iter().map(|s| s.offset_percent).collect();
        assert_eq!(
            offsets,
            vec![0.0, 9.0, 10.0, 35.0, 42.0, 61.0, 62.0, 86.0, 87.0, 100.0]
        );
        for pair in stops.chunks(2) {
            assert_eq!(pair[0].color, pair[1].color);
        }
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let p: Palette = serde_json::from_str(r##"{"winter": "#112233"}"##).unwrap_or_default();
        assert_eq!(p.winter, Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(p.summer, Palette::default().summer);
    }
}
