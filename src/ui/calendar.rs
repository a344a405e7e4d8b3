use chrono::{Datelike, Month};
use num_traits::FromPrimitive;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use termion::{color, style};

use super::{Context, Theme, TodayStyle};
use crate::grid::{DayCell, Decorator, MonthGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthIndex {
    index: Month,
    year: i32,
}

impl MonthIndex {
    pub fn new(month: u32, year: i32) -> Option<Self> {
        Month::from_u32(month).map(|index| MonthIndex::from_month(index, year))
    }

    pub fn from_month(index: Month, year: i32) -> Self {
        MonthIndex { index, year }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.index.number_from_month()
    }

    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.index.number_from_month() - 1)
    }

    fn from_ordinal(ordinal: i64) -> Option<Self> {
        let year = i32::try_from(ordinal.div_euclid(12)).ok()?;
        let month = Month::from_i64(ordinal.rem_euclid(12) + 1)?;
        Some(MonthIndex::from_month(month, year))
    }

    /// Shift by `months`, crossing year boundaries as needed.
    pub fn offset(&self, months: i32) -> Option<Self> {
        MonthIndex::from_ordinal(self.ordinal() + i64::from(months))
    }

    pub fn next(&self) -> Option<Self> {
        self.offset(1)
    }

    pub fn prev(&self) -> Option<Self> {
        self.offset(-1)
    }
}

impl<T: Datelike> From<T> for MonthIndex {
    fn from(m: T) -> Self {
        // Datelike::month is always 1-12, the fallback is never taken.
        MonthIndex::new(m.month(), m.year()).unwrap_or(MonthIndex {
            index: Month::January,
            year: m.year(),
        })
    }
}

impl PartialOrd for MonthIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MonthIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

/// A month grid styled with the terminal theme.
pub struct MonthView<'a> {
    grid: &'a MonthGrid,
    theme: &'a Theme,
    styled: bool,
}

impl<'a> MonthView<'a> {
    pub fn new(grid: &'a MonthGrid, context: &'a Context) -> Self {
        MonthView {
            grid,
            theme: &context.theme,
            styled: context.styled,
        }
    }

    fn colored(&self, text: &str, color_index: Option<u8>) -> String {
        match color_index {
            Some(c) if self.styled => format!(
                "{}{}{}",
                color::Fg(color::AnsiValue(c)),
                text,
                color::Fg(color::Reset)
            ),
            _ => text.to_owned(),
        }
    }
}

impl Decorator for MonthView<'_> {
    fn title(&self, text: &str) -> String {
        self.colored(text, self.theme.title_color)
    }

    fn header(&self, text: &str) -> String {
        self.colored(text, self.theme.header_color)
    }

    fn day(&self, cell: &DayCell, text: &str) -> String {
        if !(cell.is_today && self.styled) {
            return text.to_owned();
        }

        match self.theme.today_style {
            TodayStyle::Invert => format!("{}{}{}", style::Invert, text, style::Reset),
            TodayStyle::Bold => format!("{}{}{}", style::Bold, text, style::Reset),
            TodayStyle::Underline => format!("{}{}{}", style::Underline, text, style::Reset),
            TodayStyle::NoHighlight => text.to_owned(),
        }
    }
}

impl fmt::Display for MonthView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grid.render(self))
    }
}
