pub mod app;
pub mod calendar;
pub mod command;
pub mod context;
pub mod input;

pub use app::App;
pub use calendar::{MonthIndex, MonthView};
pub use context::{Context, Theme, TodayStyle};
