//! A terminal perpetual calendar for the years 2019 to 2068.
//!
//! The [`date`] and [`grid`] modules hold the pure calendar logic; [`ui`]
//! is the interactive front-end built on top of them.

pub mod config;
pub mod date;
pub mod error;
pub mod grid;
pub mod ui;

pub use date::{is_leap_year, resolve_weekday, year_in_supported_range, CalendarDate, YearPeriod};
pub use error::{Error, ErrorKind, Result};
pub use grid::MonthGrid;
