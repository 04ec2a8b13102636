//! Season and holiday classification of individual calendar days.

use serde::{Deserialize, Serialize};

/// Semantic category of a day, used to pick its color in colored mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonCategory {
    None,
    Holiday,
    Weekend,
    Winter,
    Spring,
    Summer,
}

/// A (0-based month, 1-based day) pair independent of any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

const fn md(month: u32, day: u32) -> MonthDay {
    MonthDay::new(month, day)
}

/// School holiday calendar the default palette was designed around.
const SCHOOL_HOLIDAYS: &[MonthDay] = &[
    // New Year's, professional development, MLK Day
    md(0, 1),
    md(0, 2),
    md(0, 5),
    md(0, 6),
    md(0, 19),
    // Midwinter break
    md(1, 16),
    md(1, 17),
    md(1, 18),
    md(1, 19),
    md(1, 20),
    // Professional development
    md(2, 16),
    md(2, 20),
    // Spring break
    md(3, 6),
    md(3, 7),
    md(3, 8),
    md(3, 9),
    md(3, 10),
    // Memorial Day
    md(4, 25),
    // Pre-school days
    md(7, 11),
    md(7, 12),
    md(7, 13),
    // Labor Day, professional development
    md(8, 1),
    md(8, 29),
    // Indigenous Peoples' Day
    md(9, 13),
    // Veterans Day, Thanksgiving
    md(10, 11),
    md(10, 26),
    md(10, 27),
    md(10, 28),
    // Winter break
    md(11, 22),
    md(11, 23),
    md(11, 24),
    md(11, 25),
    md(11, 26),
    md(11, 29),
    md(11, 30),
    md(11, 31),
];

/// Immutable set of holiday dates, recurring every year.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HolidayCalendar {
    days: Vec<MonthDay>,
}

impl HolidayCalendar {
    pub fn new(mut days: Vec<MonthDay>) -> Self {
        days.sort_unstable();
        days.dedup();
        Self { days }
    }

    pub fn school_default() -> Self {
        Self::new(SCHOOL_HOLIDAYS.to_vec())
    }

    pub fn contains(&self, month: u32, day: u32) -> bool {
        self.days.binary_search(&MonthDay::new(month, day)).is_ok()
    }
}

/// Winter runs Nov 12 through Feb 2 and wraps the year boundary.
pub fn is_winter(month: u32, day: u32) -> bool {
    match month {
        10 => day >= 12,
        11 | 0 => true,
        1 => day <= 2,
        _ => false,
    }
}

/// Spring runs Feb 3 through May 7.
pub fn is_spring(month: u32, day: u32) -> bool {
    match month {
        1 => day >= 3,
        2 | 3 => true,
        4 => day <= 7,
        _ => false,
    }
}

/// Summer runs Jun 5 through Aug 13.
pub fn is_summer(month: u32, day: u32) -> bool {
    match month {
        5 => day >= 5,
        6 => true,
        7 => day <= 13,
        _ => false,
    }
}

pub fn is_weekend(weekday: u32) -> bool {
    weekday == 0 || weekday == 6
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    holidays: HolidayCalendar,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(HolidayCalendar::school_default())
    }
}

impl Classifier {
    pub fn new(holidays: HolidayCalendar) -> Self {
        Self { holidays }
    }

    pub fn is_holiday(&self, month: u32, day: u32) -> bool {
        self.holidays.contains(month, day)
    }

    /// Category of a (month, day) pair without weekday information.
    ///
    /// Precedence: Holiday > Winter > Spring > Summer > None.
    pub fn classify(&self, month: u32, day: u32) -> SeasonCategory {
        if self.is_holiday(month, day) {
            SeasonCategory::Holiday
        } else {
            season_of(month, day)
        }
    }

    /// Category of a concrete day whose weekday is known.
    ///
    /// Precedence: Holiday > Weekend > Winter > Spring > Summer > None.
    pub fn classify_on(&self, month: u32, day: u32, weekday: u32) -> SeasonCategory {
        if self.is_holiday(month, day) {
            SeasonCategory::Holiday
        } else if is_weekend(weekday) {
            SeasonCategory::Weekend
        } else {
            season_of(month, day)
        }
    }
}

fn season_of(month: u32, day: u32) -> SeasonCategory {
    if is_winter(month, day) {
        SeasonCategory::Winter
    } else if is_spring(month, day) {
        SeasonCategory::Spring
    } else if is_summer(month, day) {
        SeasonCategory::Summer
    } else {
        SeasonCategory::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_window_boundaries() {
        let c = Classifier::new(HolidayCalendar::default());
        assert_eq!(c.classify(1, 2), SeasonCategory::Winter);
        assert_eq!(c.classify(1, 3), SeasonCategory::Spring);
        assert_eq!(c.classify(4, 7), SeasonCategory::Spring);
        assert_eq!(c.classify(4, 8), SeasonCategory::None);
        assert_eq!(c.classify(5, 4), SeasonCategory::None);
        assert_eq!(c.classify(5, 5), SeasonCategory::Summer);
        assert_eq!(c.classify(7, 13), SeasonCategory::Summer);
        assert_eq!(c.classify(7, 14), SeasonCategory::None);
        assert_eq!(c.classify(10, 11), SeasonCategory::None);
        assert_eq!(c.classify(10, 12), SeasonCategory::Winter);
        assert_eq!(c.classify(11, 31), SeasonCategory::Winter);
        assert_eq!(c.classify(0, 15), SeasonCategory::Winter);
    }

    #[test]
    fn holiday_beats_season() {
        let c = Classifier::default();
        assert_eq!(c.classify(11, 25), SeasonCategory::Holiday);
        assert_eq!(c.classify(7, 13), SeasonCategory::Holiday);
        assert_eq!(c.classify(11, 27), SeasonCategory::Winter);
    }

    #[test]
    fn weekend_sits_between_holiday_and_season() {
        let c = Classifier::default();
        // Holiday on a Saturday stays a holiday.
        assert_eq!(c.classify_on(11, 25, 6), SeasonCategory::Holiday);
        // Winter Sunday becomes a weekend.
        assert_eq!(c.classify_on(11, 27, 0), SeasonCategory::Weekend);
        assert_eq!(c.classify_on(11, 27, 3), SeasonCategory::Winter);
        // Fall Saturday.
        assert_eq!(c.classify_on(9, 4, 6), SeasonCategory::Weekend);
        assert_eq!(c.classify_on(9, 8, 3), SeasonCategory::None);
    }

    #[test]
    fn default_table_is_complete() {
        let holidays = HolidayCalendar::school_default();
        assert_eq!(SCHOOL_HOLIDAYS.len(), 36);
        assert!(SCHOOL_HOLIDAYS.iter().all(|d| holidays.contains(d.month, d.day)));
        assert!(holidays.contains(0, 1));
        assert!(holidays.contains(8, 1));
        assert!(!holidays.contains(11, 27));
    }

    #[test]
    fn custom_calendar_is_deduplicated() {
        let holidays = HolidayCalendar::new(vec![md(6, 4), md(6, 4), md(0, 1)]);
        assert_eq!(holidays, HolidayCalendar::new(vec![md(0, 1), md(6, 4)]));
        let c = Classifier::new(holidays);
        assert!(c.is_holiday(6, 4));
        assert!(!c.is_holiday(11, 25));
    }
}
