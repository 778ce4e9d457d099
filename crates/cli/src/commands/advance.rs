//! Advance command for stepping the calendar anchor
//!
//! Implements the `gantt advance` command, printing the anchor date one
//! navigation step away.

use chrono::NaiveDate;
use clap::Args;
use ganttline_layout::{Direction, Granularity, advance};

use super::args::parse_date;

/// Move an anchor date one navigation step
#[derive(Debug, Args)]
pub struct AdvanceCommand {
    /// Current anchor date (YYYY-MM-DD or 'today')
    #[arg(short, long, value_parser = parse_date)]
    pub anchor: NaiveDate,

    /// Direction to move (forward, backward)
    #[arg(long, value_parser = parse_direction)]
    pub direction: Direction,

    /// Step unit (days = 7, weeks = 14, months = 30 days)
    #[arg(short, long, value_parser = parse_granularity, default_value = "weeks")]
    pub granularity: Granularity,
}

/// Parse a direction string into a Direction enum
fn parse_direction(s: &str) -> Result<Direction, String> {
    Direction::parse(&s.to_lowercase()).ok_or_else(|| {
        format!(
            "invalid direction '{}'. Valid values: forward, backward",
            s
        )
    })
}

/// Parse a granularity string into a Granularity enum
fn parse_granularity(s: &str) -> Result<Granularity, String> {
    Granularity::parse(&s.to_lowercase()).ok_or_else(|| {
        format!(
            "invalid granularity '{}'. Valid values: days, weeks, months",
            s
        )
    })
}

impl AdvanceCommand {
    /// Execute the advance command, returning the new anchor as text.
    pub fn execute(&self) -> String {
        advance(self.anchor, self.direction, self.granularity).to_string()
    }
}
