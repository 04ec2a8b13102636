//! Proleptic Gregorian date math.
//!
//! Months are 0-based (`0` = January) throughout the engine, weekdays are
//! `0` = Sunday through `6` = Saturday.

use serde::Serialize;
use thiserror::Error;

pub const MONTHS_PER_YEAR: u32 = 12;
pub const DAYS_PER_WEEK: u32 = 7;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("month index {0} is out of range (expected 0..=11)")]
    InvalidMonth(u32),
    #[error("day {day} does not exist in month {month} of {year}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    #[error("day-of-year {ordinal} does not exist in {year}")]
    InvalidOrdinal { year: i32, ordinal: u32 },
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Number of days in `month` (0-based) of `year`, including Feb 29 on leap
/// years. `month` must be below 12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let days = DAYS_IN_MONTH[month as usize];
    if month == 1 && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

/// 1-based ordinal of (`month`, `day`) within `year`.
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    let before: u32 = (0..month).map(|m| days_in_month(year, m)).sum();
    before + day
}

/// Weekday (Sunday = 0) of the first day of `month` in `year`.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    weekday(year, month, 1)
}

/// Weekday (Sunday = 0) of an arbitrary date.
pub fn weekday(year: i32, month: u32, day: u32) -> u32 {
    // 1970-01-01 was a Thursday.
    (days_from_civil(year, month, day) + 4).rem_euclid(7) as u32
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let m = i64::from(month) + 1;
    let y = i64::from(year) - i64::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// A validated calendar date, fixed for the duration of one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
    day_of_year: u32,
}

impl CalendarDate {
    /// Build a date from a year, a 0-based month and a 1-based day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if month >= MONTHS_PER_YEAR {
            return Err(DateError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            day_of_year: day_of_year(year, month, day),
        })
    }

    /// Build a date from its 1-based position within `year`.
    pub fn from_ordinal(year: i32, ordinal: u32) -> Result<Self, DateError> {
        if ordinal == 0 || ordinal > days_in_year(year) {
            return Err(DateError::InvalidOrdinal { year, ordinal });
        }
        let mut remaining = ordinal;
        for month in 0..MONTHS_PER_YEAR {
            let len = days_in_month(year, month);
            if remaining <= len {
                return Self::new(year, month, remaining);
            }
            remaining -= len;
        }
        Err(DateError::InvalidOrdinal { year, ordinal })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    pub fn weekday(&self) -> u32 {
        weekday(self.year, self.month, self.day)
    }

    pub fn progress(&self) -> YearProgress {
        YearProgress::of(self)
    }
}

/// How much of the date's year is behind it.
///
/// The date itself never counts as complete: on January 1st the year is 0%
/// done, on December 31st one day is still outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearProgress {
    pub total_days: u32,
    pub completed_days: u32,
    pub fraction_complete: f64,
}

impl YearProgress {
    pub fn of(date: &CalendarDate) -> Self {
        let total_days = days_in_year(date.year());
        let completed_days = date.day_of_year() - 1;
        Self {
            total_days,
            completed_days,
            fraction_complete: f64::from(completed_days) / f64::from(total_days),
        }
    }

    /// Whether the day at 1-based `ordinal` is already over.
    pub fn is_completed(&self, ordinal: u32) -> bool {
        ordinal <= self.completed_days
    }

    /// Completion rounded to a whole percent.
    pub fn percent(&self) -> u32 {
        (self.fraction_complete * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2025), 365);
    }

    #[test]
    fn february_length() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2100, 1), 28);
        assert_eq!(days_in_month(2023, 11), 31);
    }

    #[test]
    fn first_weekdays() {
        assert_eq!(first_weekday_of_month(2024, 0), 1); // Monday
        assert_eq!(first_weekday_of_month(2025, 0), 3); // Wednesday
        assert_eq!(first_weekday_of_month(2025, 5), 0); // Sunday
        assert_eq!(first_weekday_of_month(2000, 0), 6); // Saturday
        assert_eq!(first_weekday_of_month(1, 0), 1); // Monday
        assert_eq!(first_weekday_of_month(1970, 0), 4); // Thursday
    }

    #[test]
    fn ordinals() {
        assert_eq!(day_of_year(2025, 0, 1), 1);
        assert_eq!(day_of_year(2024, 2, 1), 61);
        assert_eq!(day_of_year(2025, 2, 1), 60);
        assert_eq!(day_of_year(2024, 11, 31), 366);
    }

    #[test]
    fn validates_construction() {
        assert_eq!(CalendarDate::new(2025, 12, 1), Err(DateError::InvalidMonth(12)));
        assert!(matches!(
            CalendarDate::new(2023, 1, 29),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(CalendarDate::new(2024, 1, 29).is_ok());
        assert!(matches!(
            CalendarDate::new(2024, 0, 0),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn from_ordinal_inverts_day_of_year() {
        let Ok(date) = CalendarDate::from_ordinal(2024, 100) else {
            panic!("ordinal 100 exists in 2024");
        };
        assert_eq!((date.month(), date.day()), (3, 9));
        assert_eq!(date.day_of_year(), 100);
        assert!(CalendarDate::from_ordinal(2025, 366).is_err());
        assert!(CalendarDate::from_ordinal(2024, 366).is_ok());
    }

    #[test]
    fn progress_excludes_today() {
        let Ok(new_year) = CalendarDate::new(2025, 0, 1) else {
            panic!("valid date");
        };
        let p = new_year.progress();
        assert_eq!(p.completed_days, 0);
        assert_eq!(p.fraction_complete, 0.0);
        assert_eq!(p.percent(), 0);

        let Ok(eve) = CalendarDate::new(2024, 11, 31) else {
            panic!("valid date");
        };
        let p = eve.progress();
        assert_eq!(p.total_days, 366);
        assert_eq!(p.completed_days, 365);
        assert!(p.fraction_complete < 1.0);
        assert_eq!(p.percent(), 100);
        assert!(p.is_completed(365));
        assert!(!p.is_completed(366));
    }
}
