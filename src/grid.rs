//! Structured month grids.
//!
//! A [`MonthGrid`] knows which weekday column every day of a month falls in
//! and which cell is today, so callers can style cells by position instead
//! of searching rendered text.

use chrono::{Datelike, Month, NaiveDate, Weekday};
use itertools::Itertools;
use num_traits::FromPrimitive;

use crate::date::{days_of_month, weekday_name, CalendarDate};
use crate::error::{Error, ErrorKind, Result};

pub const COLUMN_WIDTH: usize = 2;
pub const WEEK_WIDTH: usize = 7 * (COLUMN_WIDTH + 1) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub weekday: Weekday,
    /// Column in the week row, 0 is the configured week start.
    pub slot: usize,
    pub is_today: bool,
}

pub type Week = [Option<DayCell>; 7];

/// Hooks for styling the parts of a rendered grid.
///
/// Each hook receives the bare text of the element (no alignment padding)
/// and returns what should be written in its place.
pub trait Decorator {
    fn title(&self, text: &str) -> String {
        text.to_owned()
    }

    fn header(&self, text: &str) -> String {
        text.to_owned()
    }

    fn day(&self, _cell: &DayCell, text: &str) -> String {
        text.to_owned()
    }
}

pub struct Plain;

impl Decorator for Plain {}

pub fn slot_of(weekday: Weekday, week_start: Weekday) -> usize {
    ((7 + weekday.num_days_from_monday() - week_start.num_days_from_monday()) % 7) as usize
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    year: i32,
    month: Month,
    week_start: Weekday,
    weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32, week_start: Weekday, today: Option<NaiveDate>) -> Result<Self> {
        let invalid = || {
            Error::new(
                ErrorKind::InvalidCalendarDate,
                &format!("no such month: {}-{}", year, month),
            )
        };

        let month_value = Month::from_u32(month).ok_or_else(invalid)?;
        let first = CalendarDate::new(year, month as i32, 1).map_err(|_| invalid())?;
        let num_days = days_of_month(year, month).ok_or_else(invalid)?;

        let mut weeks = Vec::with_capacity(6);
        let mut week: Week = [None; 7];

        for date in first.naive().iter_days().take(num_days as usize) {
            let slot = slot_of(date.weekday(), week_start);
            if slot == 0 && date.day() > 1 {
                weeks.push(week);
                week = [None; 7];
            }

            week[slot] = Some(DayCell {
                day: date.day(),
                weekday: date.weekday(),
                slot,
                is_today: today == Some(date),
            });
        }
        weeks.push(week);

        Ok(MonthGrid {
            year,
            month: month_value,
            week_start,
            weeks,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month.number_from_month()
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.weeks.iter().flat_map(|week| week.iter().flatten())
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.cells().find(|cell| cell.is_today)
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }

    /// Two letter weekday abbreviations, starting at the week start.
    pub fn weekday_header(&self) -> Vec<&'static str> {
        std::iter::successors(Some(self.week_start), |wd| Some(wd.succ()))
            .take(7)
            .map(|wd| &weekday_name(wd)[..COLUMN_WIDTH])
            .collect()
    }

    pub fn render<D: Decorator>(&self, decorator: &D) -> String {
        let mut out = String::new();

        let title = self.title();
        let pad = WEEK_WIDTH.saturating_sub(title.chars().count()) / 2;
        out.push_str(&" ".repeat(pad));
        out.push_str(&decorator.title(&title));
        out.push('\n');

        let header = self
            .weekday_header()
            .iter()
            .map(|head| format!("{:^width$}", head, width = COLUMN_WIDTH))
            .join(" ");
        out.push_str(&decorator.header(header.trim_end()));
        out.push('\n');

        for week in &self.weeks {
            let line = week
                .iter()
                .map(|slot| match slot {
                    Some(cell) => {
                        let digits = cell.day.to_string();
                        format!(
                            "{}{}",
                            " ".repeat(COLUMN_WIDTH.saturating_sub(digits.len())),
                            decorator.day(cell, &digits)
                        )
                    }
                    None => " ".repeat(COLUMN_WIDTH),
                })
                .join(" ");
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

impl std::fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&Plain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Brackets;

    impl Decorator for Brackets {
        fn day(&self, cell: &DayCell, text: &str) -> String {
            if cell.is_today {
                format!("[{}]", text)
            } else {
                text.to_owned()
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn october_2023_sunday_start() {
        let grid = MonthGrid::new(2023, 10, Weekday::Sun, None).unwrap();
        let expected = concat!(
            "    October 2023\n",
            "Su Mo Tu We Th Fr Sa\n",
            " 1  2  3  4  5  6  7\n",
            " 8  9 10 11 12 13 14\n",
            "15 16 17 18 19 20 21\n",
            "22 23 24 25 26 27 28\n",
            "29 30 31\n",
        );
        assert_eq!(grid.to_string(), expected);
    }

    #[test]
    fn february_2024_monday_start() {
        let grid = MonthGrid::new(2024, 2, Weekday::Mon, None).unwrap();
        let expected = concat!(
            "   February 2024\n",
            "Mo Tu We Th Fr Sa Su\n",
            "          1  2  3  4\n",
            " 5  6  7  8  9 10 11\n",
            "12 13 14 15 16 17 18\n",
            "19 20 21 22 23 24 25\n",
            "26 27 28 29\n",
        );
        assert_eq!(grid.to_string(), expected);
        assert_eq!(grid.cells().count(), 29);
    }

    #[test]
    fn cells_carry_weekday_and_slot() {
        let grid = MonthGrid::new(2023, 10, Weekday::Sun, None).unwrap();
        assert_eq!(grid.weeks().len(), 5);

        let tuesday = grid.cells().find(|c| c.day == 24).unwrap();
        assert_eq!(tuesday.weekday, Weekday::Tue);
        assert_eq!(tuesday.slot, 2);

        for cell in grid.cells() {
            assert_eq!(cell.slot, slot_of(cell.weekday, Weekday::Sun));
        }
    }

    #[test]
    fn exactly_one_today_cell() {
        let grid = MonthGrid::new(2023, 11, Weekday::Sun, Some(date(2023, 11, 2))).unwrap();
        assert_eq!(grid.cells().filter(|c| c.is_today).count(), 1);
        assert_eq!(grid.today().map(|c| c.day), Some(2));

        let other = MonthGrid::new(2023, 12, Weekday::Sun, Some(date(2023, 11, 2))).unwrap();
        assert!(other.today().is_none());

        let other_year = MonthGrid::new(2024, 11, Weekday::Sun, Some(date(2023, 11, 2))).unwrap();
        assert!(other_year.today().is_none());
    }

    #[test]
    fn highlight_does_not_match_other_digits() {
        let grid = MonthGrid::new(2023, 11, Weekday::Sun, Some(date(2023, 11, 2))).unwrap();
        let text = grid.render(&Brackets);

        assert_eq!(text.matches('[').count(), 1);
        assert!(text.contains(" 1  [2]  3"));
        assert!(text.starts_with("   November 2023\n"));
        assert!(text.contains("12 13"));
    }

    #[test]
    fn six_week_month() {
        // September 2024 starts on a Sunday, so with a Monday start it spans six rows.
        let grid = MonthGrid::new(2024, 9, Weekday::Mon, None).unwrap();
        assert_eq!(grid.weeks().len(), 6);
        assert_eq!(grid.weeks()[0][6].map(|c| c.day), Some(1));
    }

    #[test]
    fn invalid_months_are_rejected() {
        assert!(MonthGrid::new(2023, 13, Weekday::Sun, None).is_err());
        assert!(MonthGrid::new(2023, 0, Weekday::Sun, None).is_err());
        assert!(MonthGrid::new(-5, 1, Weekday::Sun, None).is_err());
    }

    #[test]
    fn header_follows_week_start() {
        let grid = MonthGrid::new(2023, 10, Weekday::Wed, None).unwrap();
        assert_eq!(
            grid.weekday_header(),
            vec!["We", "Th", "Fr", "Sa", "Su", "Mo", "Tu"]
        );
    }
}
