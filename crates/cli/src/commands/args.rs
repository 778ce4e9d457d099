//! Arguments shared by several commands.

use chrono::{Local, NaiveDate};
use clap::Args;
use ganttline_layout::{
    CalendarWindow, DEFAULT_DAYS_BEFORE, DEFAULT_WINDOW_DAYS, LayoutResult, generate_window,
};

/// Date format accepted on the command line
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, or `today` for the local date
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    if s.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| format!("invalid date '{}'. Expected YYYY-MM-DD or 'today'", s))
}

/// Window shape options
#[derive(Debug, Clone, Args)]
pub struct WindowArgs {
    /// Anchor date (YYYY-MM-DD or 'today')
    #[arg(short, long, value_parser = parse_date)]
    pub anchor: NaiveDate,

    /// Days shown before the anchor
    #[arg(short, long, default_value_t = DEFAULT_DAYS_BEFORE)]
    pub before: u32,

    /// Total days in the window
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_DAYS)]
    pub days: u32,
}

impl WindowArgs {
    /// Generate the calendar window these options describe.
    pub fn window(&self) -> LayoutResult<CalendarWindow> {
        generate_window(self.anchor, self.before, self.days)
    }
}

/// Project and status selection options
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Project ID to show, or 'all'
    #[arg(short, long, default_value = "all")]
    pub project: String,

    /// Status to show, or 'all'
    #[arg(short, long, default_value = "all")]
    pub status: String,
}
