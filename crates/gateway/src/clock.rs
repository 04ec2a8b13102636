//! Resolution of the calendar date a render is made for.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use yeardots_core::{CalendarDate, DateError};

use crate::request::RenderRequest;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Pick the date to render for `request`.
///
/// An override that parses as `YYYY-MM-DD` or an RFC 3339 timestamp wins.
/// An unparseable override falls back to today in UTC; no override means
/// today in the requested timezone (UTC when absent or unknown).
pub fn resolve_date(request: &RenderRequest, clock: &dyn Clock) -> Result<CalendarDate, DateError> {
    let now = clock.now();

    let date = match request.date.as_deref() {
        Some(raw) => parse_override(raw).unwrap_or_else(|| {
            tracing::warn!(date = raw, "unparseable date override, using today (UTC)");
            now.date_naive()
        }),
        None => now.with_timezone(&timezone(request.timezone.as_deref())).date_naive(),
    };

    tracing::debug!(%date, "resolved render date");
    CalendarDate::new(date.year(), date.month0(), date.day())
}

fn parse_override(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn timezone(name: Option<&str>) -> Tz {
    match name.map(str::parse::<Tz>) {
        Some(Ok(tz)) => tz,
        Some(Err(_)) => {
            tracing::warn!(timezone = name, "unknown timezone, using UTC");
            Tz::UTC
        }
        None => Tz::UTC,
    }
}
