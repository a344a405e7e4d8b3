use nom::{
    character::complete::{alpha1, digit0, space1},
    combinator::{all_consuming, map_opt, opt, rest},
    sequence::{preceded, tuple},
    IResult,
};

use super::calendar::MonthIndex;
use super::context::Context;
use super::input;
use crate::date::{out_of_supported_range, YearPeriod};
use crate::error::{Error, ErrorKind, Result};

pub const HELP: &str = "\
commands:
  [N]n, [N]next     show the next (N-th) month
  [N]p, [N]prev     show the previous (N-th) month
  y, year <year>    select a year (2019-2068)
  m, month <month>  select a month by name or number
  d, day <day>      look up the weekday of a day in the shown month
  t, today          jump to the current month
  l, leap           report whether the shown year is a leap year
  h, help           show this help
  q, quit           exit";

pub struct CommandParser<'a> {
    context: &'a mut Context,
}

fn action_name(input: &str) -> IResult<&str, &'static Action> {
    map_opt(alpha1, |name: &str| {
        COMMANDS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, act)| act)
    })(input)
}

fn parse_command(cmd: &str) -> IResult<&str, (&str, &'static Action, Option<&str>)> {
    all_consuming(tuple((digit0, action_name, opt(preceded(space1, rest)))))(cmd)
}

fn unknown_command(cmd: &str) -> Error {
    Error::new(
        ErrorKind::UnknownCommand,
        &format!("'{}' (type 'help' for a list of commands)", cmd),
    )
}

impl<'a> CommandParser<'a> {
    pub fn new(context: &'a mut Context) -> Self {
        CommandParser { context }
    }

    pub fn run_command(&mut self, cmd: &str) -> ActionResult {
        let cmd = cmd.trim();
        if cmd.is_empty() {
            return Ok(());
        }

        let (_, (repeat, act, arg)) = parse_command(cmd).map_err(|_| unknown_command(cmd))?;

        match (act, arg) {
            (Action::Repeatable(a), None) => {
                let repeats = if repeat.is_empty() {
                    1
                } else {
                    repeat.parse::<i32>()?
                };
                a(self.context, repeats)
            }
            (Action::Arg(a), Some(arg)) if repeat.is_empty() => a(self.context, arg),
            (Action::NoArg(a), None) if repeat.is_empty() => a(self.context),
            _ => Err(unknown_command(cmd)),
        }
    }

    /// Run `cmd`, leaving any failure as the context's error message.
    pub fn handle(mut self, cmd: &str) {
        if let Err(e) = self.run_command(cmd) {
            self.context.report_error(&e);
        }
    }
}

pub type ActionResult = Result<()>;

pub enum Action {
    Arg(fn(&mut Context, &str) -> ActionResult),
    NoArg(fn(&mut Context) -> ActionResult),
    Repeatable(fn(&mut Context, i32) -> ActionResult),
}

fn shift_month(c: &mut Context, months: i32) -> ActionResult {
    let idx = c
        .selection()
        .offset(months)
        .ok_or_else(out_of_supported_range)?;
    c.select(idx)
}

fn next_month(c: &mut Context, n: i32) -> ActionResult {
    shift_month(c, n)
}

fn prev_month(c: &mut Context, n: i32) -> ActionResult {
    shift_month(c, -n)
}

fn select_year(c: &mut Context, arg: &str) -> ActionResult {
    let year = input::parse_year(arg)?;
    let idx = MonthIndex::new(c.selected_month(), year).ok_or_else(out_of_supported_range)?;
    c.select(idx)
}

fn select_month(c: &mut Context, arg: &str) -> ActionResult {
    let month = input::parse_month(arg)?;
    let idx = MonthIndex::new(month, c.selected_year())
        .ok_or_else(|| Error::from(ErrorKind::UnknownMonth))?;
    c.select(idx)
}

fn lookup_day(c: &mut Context, arg: &str) -> ActionResult {
    c.lookup_and_report(arg).map(|_| ())
}

fn select_today(c: &mut Context) -> ActionResult {
    c.select_today()
}

fn leap_status(c: &mut Context) -> ActionResult {
    c.report(YearPeriod::new(c.selected_year()).to_string());
    Ok(())
}

fn help(c: &mut Context) -> ActionResult {
    c.report(HELP.to_owned());
    Ok(())
}

fn quit(c: &mut Context) -> ActionResult {
    c.quit = true;
    Ok(())
}

const COMMANDS: &[(&str, Action)] = &[
    ("n", Action::Repeatable(next_month)),
    ("next", Action::Repeatable(next_month)),
    ("p", Action::Repeatable(prev_month)),
    ("prev", Action::Repeatable(prev_month)),
    ("y", Action::Arg(select_year)),
    ("year", Action::Arg(select_year)),
    ("m", Action::Arg(select_month)),
    ("month", Action::Arg(select_month)),
    ("d", Action::Arg(lookup_day)),
    ("day", Action::Arg(lookup_day)),
    ("t", Action::NoArg(select_today)),
    ("today", Action::NoArg(select_today)),
    ("l", Action::NoArg(leap_status)),
    ("leap", Action::NoArg(leap_status)),
    ("h", Action::NoArg(help)),
    ("help", Action::NoArg(help)),
    ("q", Action::NoArg(quit)),
    ("quit", Action::NoArg(quit)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::NaiveDate;

    fn context() -> Context {
        Context::new(
            &Config::default(),
            NaiveDate::from_ymd_opt(2023, 10, 24).unwrap(),
        )
    }

    fn run(ctx: &mut Context, cmd: &str) -> ActionResult {
        CommandParser::new(ctx).run_command(cmd)
    }

    #[test]
    fn repeatable_navigation() {
        let mut ctx = context();
        run(&mut ctx, "n").unwrap();
        assert_eq!((ctx.selected_year(), ctx.selected_month()), (2023, 11));

        run(&mut ctx, "3next").unwrap();
        assert_eq!((ctx.selected_year(), ctx.selected_month()), (2024, 2));

        run(&mut ctx, "14p").unwrap();
        assert_eq!((ctx.selected_year(), ctx.selected_month()), (2022, 12));
    }

    #[test]
    fn navigation_stops_at_range_bounds() {
        let mut ctx = context();
        run(&mut ctx, "y 2068").unwrap();
        run(&mut ctx, "m dec").unwrap();

        let err = run(&mut ctx, "n").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::OutOfSupportedRange));
        assert_eq!((ctx.selected_year(), ctx.selected_month()), (2068, 12));

        let err = run(&mut ctx, "y 2018").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::OutOfSupportedRange));
    }

    #[test]
    fn day_lookup_reports_weekday() {
        let mut ctx = context();
        run(&mut ctx, "day 24").unwrap();
        assert_eq!(
            ctx.last_message.as_deref(),
            Some("October 24, 2023 → Tuesday")
        );

        run(&mut ctx, "y 2024").unwrap();
        run(&mut ctx, "month February").unwrap();
        run(&mut ctx, "d 29").unwrap();
        assert_eq!(
            ctx.last_message.as_deref(),
            Some("February 29, 2024 → Thursday")
        );
    }

    #[test]
    fn invalid_day_lookups() {
        let mut ctx = context();
        run(&mut ctx, "m 2").unwrap();

        let err = run(&mut ctx, "d 29").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidCalendarDate));

        let err = run(&mut ctx, "d x").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MalformedNumericInput));
    }

    #[test]
    fn leap_and_quit() {
        let mut ctx = context();
        run(&mut ctx, "leap").unwrap();
        assert_eq!(ctx.last_message.as_deref(), Some("Not a Leap Year — 2023"));

        run(&mut ctx, "q").unwrap();
        assert!(ctx.quit);
    }

    #[test]
    fn malformed_commands() {
        let mut ctx = context();
        for cmd in &["bogus", "d", "q now", "2q", "y2024", "n 3", "3"] {
            let err = run(&mut ctx, cmd).unwrap_err();
            assert!(
                matches!(err.kind, ErrorKind::UnknownCommand),
                "'{}' should be rejected",
                cmd
            );
        }
        assert!(run(&mut ctx, "   ").is_ok());
    }

    #[test]
    fn handle_reports_errors() {
        let mut ctx = context();
        CommandParser::new(&mut ctx).handle("y 1999");
        assert_eq!(
            ctx.last_error_message.as_deref(),
            Some("Out of Range: Year must be between 2019 and 2068.")
        );
    }
}
