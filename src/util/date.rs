// src/util/date.rs
use crate::constants::{DUE_DATE_FORMAT, INVALID_DATE_PLACEHOLDER, NO_DATE_PLACEHOLDER};
use chrono::{Days, NaiveDate, Weekday};
use regex::Regex;
use std::sync::LazyLock;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Year, then an ordinal day, a month with optional day, a week with optional
/// weekday, or nothing. Separating dashes are optional.
static CALENDAR_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-?(?:(\d{3})|(\d{2})(?:-?(\d{2}))?|W(\d{2})(?:-?(\d))?|)$")
        .expect("valid date regex")
});

static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}(?:[.,]\d*)?)(?::?(\d{2}(?:[.,]\d*)?))?(?::?(\d{2}(?:[.,]\d*)?))?$")
        .expect("valid time regex")
});

static UTC_OFFSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:Z|[+-]\d{2}(?::?(\d{2}))?)$").expect("valid offset regex"));

/// Render a stored due date for display.
///
/// # Examples
///
/// ```
/// use notelist::util::date::format_due_date;
///
/// assert_eq!(format_due_date(""), "No Date!");
/// assert_eq!(format_due_date("not-a-date"), "Invalid Date!");
/// assert_eq!(format_due_date("2025-04-25"), "Fri, Apr 25");
/// ```
pub fn format_due_date(due_date: &str) -> String {
    if due_date.is_empty() {
        return NO_DATE_PLACEHOLDER.to_string();
    }
    match parse_due_date(due_date) {
        Some(date) => date.format(DUE_DATE_FORMAT).to_string(),
        None => INVALID_DATE_PLACEHOLDER.to_string(),
    }
}

/// Parse the calendar date out of an ISO-8601 date or date-time string.
///
/// Calendar (`2025-04-25`, `20250425`, `2025-04`), ordinal (`2025-115`) and
/// week (`2025-W17-5`) dates are accepted; missing parts default to the first
/// month, day or weekday. A time after `T` or a space must be a valid time of
/// day. It only moves the date when it reaches `24:00`; UTC offsets are
/// validated but never shift the written date.
pub fn parse_due_date(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split(['T', ' ']);
    let date = parse_calendar_date(parts.next()?)?;
    let time = parts.next().unwrap_or_default();
    if parts.next().is_some() {
        return None;
    }

    if time.is_empty() {
        return Some(date);
    }
    if seconds_into_day(time)? >= SECONDS_PER_DAY {
        date.succ_opt()
    } else {
        Some(date)
    }
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let caps = CALENDAR_DATE.captures(input)?;
    let year: i32 = caps[1].parse().ok()?;
    let unit = |idx: usize| -> Option<u32> {
        caps.get(idx).map_or(Some(1), |m| m.as_str().parse().ok())
    };

    if let Some(ordinal) = caps.get(2) {
        return NaiveDate::from_yo_opt(year, ordinal.as_str().parse().ok()?);
    }
    if caps.get(5).is_some() {
        let (week, weekday) = (unit(5)?, unit(6)?);
        if !(1..=53).contains(&week) || !(1..=7).contains(&weekday) {
            return None;
        }
        // Week 53 of a 52-week year rolls over into the next year.
        let first_monday = NaiveDate::from_isoywd_opt(year, 1, Weekday::Mon)?;
        return first_monday.checked_add_days(Days::new(u64::from((week - 1) * 7 + weekday - 1)));
    }
    NaiveDate::from_ymd_opt(year, unit(3)?, unit(4)?)
}

/// Seconds since midnight of `HH[:MM[:SS]]` with an optional fraction on the
/// last part and an optional UTC offset.
fn seconds_into_day(input: &str) -> Option<f64> {
    let (time, offset) = input.split_at(input.find(['Z', '+', '-']).unwrap_or(input.len()));
    if !offset.is_empty() {
        let caps = UTC_OFFSET.captures(offset)?;
        let offset_minutes: u32 = caps.get(1).map_or(Ok(0), |m| m.as_str().parse()).ok()?;
        if offset_minutes > 59 {
            return None;
        }
    }

    let caps = TIME_OF_DAY.captures(time)?;
    let unit = |idx: usize| -> Option<f64> {
        caps.get(idx)
            .map_or(Some(0.0), |m| m.as_str().replace(',', ".").parse().ok())
    };
    let (hours, minutes, seconds) = (unit(1)?, unit(2)?, unit(3)?);

    let valid = if hours == 24.0 {
        minutes == 0.0 && seconds == 0.0
    } else {
        hours < 25.0 && minutes < 60.0 && seconds < 60.0
    };
    valid.then_some(hours * 3600.0 + minutes * 60.0 + seconds)
}
