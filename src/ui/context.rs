use chrono::{NaiveDate, Weekday};
use serde::Deserialize;

use super::calendar::MonthIndex;
use super::input;
use crate::config::Config;
use crate::date::{check_supported_year, CalendarDate};
use crate::error::{Error, Result};
use crate::grid::MonthGrid;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TodayStyle {
    Invert,
    Bold,
    Underline,
    #[serde(rename = "none")]
    NoHighlight,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Theme {
    pub today_style: TodayStyle,
    /// ANSI 256 colour index of the month title.
    pub title_color: Option<u8>,
    /// ANSI 256 colour index of the weekday header.
    pub header_color: Option<u8>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            today_style: TodayStyle::Invert,
            title_color: Some(3),
            header_color: None,
        }
    }
}

pub struct Context {
    pub theme: Theme,
    pub week_start: Weekday,
    /// Emit terminal escape sequences when drawing.
    pub styled: bool,
    pub quit: bool,
    pub last_message: Option<String>,
    pub last_error_message: Option<String>,
    selection: MonthIndex,
    today: NaiveDate,
}

impl Context {
    pub fn new(config: &Config, today: NaiveDate) -> Self {
        Context {
            theme: config.theme.clone(),
            week_start: config.week_start,
            styled: false,
            quit: false,
            last_message: None,
            last_error_message: None,
            selection: MonthIndex::from(today),
            today,
        }
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn update(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn selection(&self) -> MonthIndex {
        self.selection
    }

    pub fn selected_year(&self) -> i32 {
        self.selection.year()
    }

    pub fn selected_month(&self) -> u32 {
        self.selection.month()
    }

    /// Move the selection, refusing months outside the supported years.
    pub fn select(&mut self, idx: MonthIndex) -> Result<()> {
        check_supported_year(idx.year())?;
        self.selection = idx;
        Ok(())
    }

    pub fn select_today(&mut self) -> Result<()> {
        self.select(MonthIndex::from(self.today))
    }

    pub fn grid(&self) -> Result<MonthGrid> {
        let year = check_supported_year(self.selected_year())?;
        MonthGrid::new(year, self.selected_month(), self.week_start, Some(self.today))
    }

    /// Resolve a day typed by the user within the selected month.
    pub fn lookup_day(&self, day: &str) -> Result<CalendarDate> {
        let day = input::parse_day(day)?;
        let year = check_supported_year(self.selected_year())?;
        CalendarDate::new(year, self.selected_month() as i32, day)
    }

    /// Like [`Context::lookup_day`], leaving the weekday as the status message.
    pub fn lookup_and_report(&mut self, day: &str) -> Result<CalendarDate> {
        let date = self.lookup_day(day)?;
        self.report(format!("{} → {}", date, date.weekday_name()));
        Ok(date)
    }

    pub fn report(&mut self, message: String) {
        self.last_message = Some(message);
    }

    pub fn report_error(&mut self, error: &Error) {
        log::debug!("{}", error);
        self.last_error_message = Some(format!("{}: {}", error.title(), error.user_message()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn context_at(y: i32, m: u32, d: u32) -> Context {
        Context::new(
            &Config::default(),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn starts_at_todays_month() {
        let ctx = context_at(2026, 10, 17);
        assert_eq!(ctx.selected_year(), 2026);
        assert_eq!(ctx.selected_month(), 10);
        assert_eq!(ctx.grid().unwrap().today().map(|c| c.day), Some(17));
    }

    #[test]
    fn select_refuses_unsupported_years() {
        let mut ctx = context_at(2026, 10, 17);
        let err = ctx.select(MonthIndex::new(1, 2069).unwrap()).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::OutOfSupportedRange));
        assert_eq!(ctx.selected_year(), 2026);

        ctx.select(MonthIndex::new(2, 2068).unwrap()).unwrap();
        assert_eq!(ctx.selected_year(), 2068);
        assert_eq!(ctx.selected_month(), 2);
    }

    #[test]
    fn grid_outside_range_is_an_error() {
        let ctx = context_at(2070, 1, 1);
        let err = ctx.grid().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::OutOfSupportedRange));
    }

    #[test]
    fn lookup_day_validates_input() {
        let mut ctx = context_at(2026, 10, 17);
        ctx.select(MonthIndex::new(10, 2023).unwrap()).unwrap();

        let date = ctx.lookup_day(" 24 ").unwrap();
        assert_eq!(date.weekday_name(), "Tuesday");

        let err = ctx.lookup_day("abc").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MalformedNumericInput));
        assert_eq!(err.user_message(), "Please enter a valid numeric day.");

        let err = ctx.lookup_day("32").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidCalendarDate));
    }

    #[test]
    fn error_report_uses_title() {
        let mut ctx = context_at(2026, 10, 17);
        let err = ctx.select(MonthIndex::new(1, 2018).unwrap()).unwrap_err();
        ctx.report_error(&err);
        assert_eq!(
            ctx.last_error_message.as_deref(),
            Some("Out of Range: Year must be between 2019 and 2068.")
        );
    }
}
