//! Date validation and the pure lookups built on top of it.
//!
//! Everything in here is range-agnostic except the explicit supported-range
//! policy ([`year_in_supported_range`], [`check_supported_year`]), which is
//! only applied by the presentation layer.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use derive_more::Display;
use num_traits::FromPrimitive;
use std::convert::TryFrom;
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{Error, ErrorKind, Result};

pub const SUPPORTED_YEARS: RangeInclusive<i32> = 2019..=2068;

pub fn year_in_supported_range(year: i32) -> bool {
    SUPPORTED_YEARS.contains(&year)
}

pub fn check_supported_year(year: i32) -> Result<i32> {
    if year_in_supported_range(year) {
        Ok(year)
    } else {
        Err(out_of_supported_range())
    }
}

pub fn out_of_supported_range() -> Error {
    Error::new(
        ErrorKind::OutOfSupportedRange,
        &format!(
            "Year must be between {} and {}.",
            SUPPORTED_YEARS.start(),
            SUPPORTED_YEARS.end()
        ),
    )
}

/// Gregorian leap year rule, valid for any year including negative ones.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_of_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };

    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn month_name(month: u32) -> Option<&'static str> {
    Month::from_u32(month).map(|m| m.name())
}

/// Look up the English weekday name of a date.
///
/// Returns `None` if the triple does not form a legal proleptic Gregorian
/// date. Years before 1 are not constructible.
pub fn resolve_weekday(year: i32, month: i32, day: i32) -> Option<&'static str> {
    CalendarDate::new(year, month, day)
        .ok()
        .map(|date| date.weekday_name())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    date: NaiveDate,
}

impl CalendarDate {
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self> {
        let invalid = || {
            log::debug!("rejected calendar date {}-{}-{}", year, month, day);
            Error::new(
                ErrorKind::InvalidCalendarDate,
                "The entered date is not valid.",
            )
        };

        if year < 1 {
            return Err(invalid());
        }

        let month = u32::try_from(month).map_err(|_| invalid())?;
        let day = u32::try_from(day).map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| CalendarDate { date })
            .ok_or_else(invalid)
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday())
    }

    pub fn naive(&self) -> NaiveDate {
        self.date
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.date
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // A constructed date always has a month in 1-12.
        write!(
            f,
            "{} {}, {}",
            month_name(self.month()).unwrap_or("?"),
            self.day(),
            self.year()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LeapStatus {
    #[display(fmt = "Leap Year")]
    Leap,
    #[display(fmt = "Not a Leap Year")]
    Common,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearPeriod {
    pub year: i32,
}

impl YearPeriod {
    pub fn new(year: i32) -> Self {
        YearPeriod { year }
    }

    pub fn is_leap(&self) -> bool {
        is_leap_year(self.year)
    }

    pub fn leap_status(&self) -> LeapStatus {
        if self.is_leap() {
            LeapStatus::Leap
        } else {
            LeapStatus::Common
        }
    }
}

impl fmt::Display for YearPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {}", self.leap_status(), self.year)
    }
}
