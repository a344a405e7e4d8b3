use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};

use super::command::CommandParser;
use super::{input, Context, MonthIndex, MonthView};
use crate::config::Config;
use crate::date::YearPeriod;
use crate::error::{Error, ErrorKind, Result};

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct App {
    context: Context,
    clock: fn() -> NaiveDate,
}

impl App {
    pub fn new(config: &Config) -> App {
        App::with_clock(config, local_today)
    }

    pub fn with_clock(config: &Config, clock: fn() -> NaiveDate) -> App {
        App {
            context: Context::new(config, clock()),
            clock,
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    fn draw_calendar<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let grid = self.context.grid()?;
        write!(out, "{}", MonthView::new(&grid, &self.context))?;
        writeln!(out, "{}", YearPeriod::new(grid.year()))?;
        Ok(())
    }

    fn draw_messages<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if let Some(msg) = self.context.last_message.take() {
            writeln!(out, "{}", msg)?;
        }
        if let Some(msg) = self.context.last_error_message.take() {
            writeln!(out, "{}", msg)?;
        }
        Ok(())
    }

    /// Draw the selected month once. Errors are returned, not reported.
    pub fn show<W: Write>(&mut self, mut out: W) -> Result<()> {
        self.context.update((self.clock)());
        self.draw_calendar(&mut out)?;
        self.draw_messages(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Apply the month, year and day given on the command line.
    pub fn select_initial(
        &mut self,
        year: Option<&str>,
        month: Option<&str>,
        day: Option<&str>,
    ) -> Result<()> {
        let year = match year {
            Some(year) => input::parse_year(year)?,
            None => self.context.selected_year(),
        };
        let month = match month {
            Some(month) => input::parse_month(month)?,
            None => self.context.selected_month(),
        };

        let idx =
            MonthIndex::new(month, year).ok_or_else(|| Error::from(ErrorKind::UnknownMonth))?;
        self.context.select(idx)?;

        if let Some(day) = day {
            self.context.lookup_and_report(day)?;
        }

        Ok(())
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        let mut buf = Vec::new();

        while !self.context.quit {
            self.context.update((self.clock)());

            if let Err(e) = self.draw_calendar(&mut out) {
                let e = if matches!(e.kind, ErrorKind::IOError(_)) {
                    log::error!("Failed to draw calendar: {}", e);
                    Error::new(
                        ErrorKind::Presentation,
                        &format!("An error occurred: {}", e),
                    )
                } else {
                    e
                };
                self.context.report_error(&e);
            }
            self.draw_messages(&mut out)?;

            write!(out, ":")?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            match std::str::from_utf8(&buf) {
                Ok(line) => {
                    log::debug!("command '{}'", line.trim_end());
                    CommandParser::new(&mut self.context).handle(line);
                }
                Err(e) => {
                    log::warn!("Discarding input line: {}", e);
                    self.context.report_error(&Error::new(
                        ErrorKind::UnknownCommand,
                        "input is not valid UTF-8",
                    ));
                }
            }
        }

        Ok(())
    }
}
