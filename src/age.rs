//! age.rs
//!
//! Calendar-aware age breakdown:
//!     "X years, Y months, Z days" plus a countdown to the next birthday.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so the decomposition is done here step by step: whole
//! years first, then whole months from the last anniversary, then the
//! remaining days from that month anchor.
//!
//! A Feb 29 birthday falls on Mar 1 in non-leap years, for both the elapsed
//! age and the countdown. Month steps clamp to the end of the month
//! (Jan 31 + 1 month = Feb 28/29).

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Elapsed age and time left until the next birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeResult {
    pub years: u32,
    /// Always in `0..=11`.
    pub months: u32,
    /// Always in `0..=30`.
    pub days: u32,
    pub next_birthday: NextBirthday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextBirthday {
    pub months: u32,
    pub days: u32,
    pub is_today: bool,
    /// The anniversary being counted down to.
    #[serde(skip)]
    pub date: NaiveDate,
}

/// Computes the age breakdown of `birthdate` as seen on `today`.
///
/// `birthdate` is expected to be on or before `today`; a later birthdate
/// yields a zero elapsed age rather than panicking.
pub fn breakdown(birthdate: NaiveDate, today: NaiveDate) -> AgeResult {
    let next_birthday = next_birthday(birthdate, today);
    if birthdate > today {
        return AgeResult {
            years: 0,
            months: 0,
            days: 0,
            next_birthday,
        };
    }

    let mut years = today.year() - birthdate.year();
    if anniversary(birthdate, today.year()) > today {
        years -= 1;
    }
    let reference = anniversary(birthdate, birthdate.year() + years);

    // From a Feb 29 reference, twelve months later is Feb 28, the day before
    // the Mar 1 anniversary. That day still counts as 11 months.
    let months = complete_months(reference, today).min(11);
    let days = (today - add_months(reference, months)).num_days().max(0) as u32;

    AgeResult {
        years: years.max(0) as u32,
        months,
        days,
        next_birthday,
    }
}

/// Countdown from `today` to the nearest anniversary of `birthdate` that is
/// on or after `today`.
pub fn next_birthday(birthdate: NaiveDate, today: NaiveDate) -> NextBirthday {
    let mut date = anniversary(birthdate, today.year());
    if date < today {
        date = anniversary(birthdate, today.year() + 1);
    }

    let months = complete_months(today, date);
    let days = (date - add_months(today, months)).num_days().max(0) as u32;

    NextBirthday {
        months,
        days,
        is_today: date == today,
        date,
    }
}

impl AgeResult {
    /// Elapsed age as "X years, Y months, Z days".
    pub fn summary(&self) -> String {
        format!(
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `birthdate`'s month/day in `year`; Feb 29 becomes Mar 1 in non-leap years.
pub fn anniversary(birthdate: NaiveDate, year: i32) -> NaiveDate {
    let (month, day) = match (birthdate.month(), birthdate.day()) {
        (2, 29) if !is_leap_year(year) => (3, 1),
        md => md,
    };

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(if year < birthdate.year() {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

/// Advances `date` by `months` calendar months, clamping the day to the end of
/// the target month. Saturates at `NaiveDate::MAX`.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(NaiveDate::MAX)
}

/// Largest `n` such that `add_months(start, n) <= end`; zero when `end` is
/// before `start`.
pub fn complete_months(start: NaiveDate, end: NaiveDate) -> u32 {
    if end <= start {
        return 0;
    }

    let span = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let span = span.max(0) as u32;

    // The estimate lands in `end`'s month; only the day can overshoot.
    if add_months(start, span) > end {
        span.saturating_sub(1)
    } else {
        span
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
