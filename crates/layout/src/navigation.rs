//! Calendar navigation.
//!
//! Moves the anchor date by a fixed number of days per step. The month
//! step is a flat 30 days rather than calendar-month arithmetic so that
//! every step at a given granularity moves the view by the same amount.

use chrono::{Days, NaiveDate};

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Returns the string representation accepted by [`Direction::parse`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }

    /// Parse a direction; `next`/`prev` are accepted as aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "forward" | "next" => Some(Direction::Forward),
            "backward" | "prev" => Some(Direction::Backward),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Navigation step unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Granularity {
    Days,
    #[default]
    Weeks,
    Months,
}

impl Granularity {
    /// Returns the string representation accepted by [`Granularity::parse`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Days => "days",
            Granularity::Weeks => "weeks",
            Granularity::Months => "months",
        }
    }

    /// Parse a granularity name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "days" => Some(Granularity::Days),
            "weeks" => Some(Granularity::Weeks),
            "months" => Some(Granularity::Months),
            _ => None,
        }
    }

    /// Calendar days moved by one navigation step.
    pub fn step_days(&self) -> u64 {
        match self {
            Granularity::Days => 7,
            Granularity::Weeks => 14,
            Granularity::Months => 30,
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Move `anchor` one step in `direction`.
///
/// Saturates at `NaiveDate::MIN`/`NaiveDate::MAX` instead of failing.
pub fn advance(anchor: NaiveDate, direction: Direction, granularity: Granularity) -> NaiveDate {
    let step = Days::new(granularity.step_days());
    match direction {
        Direction::Forward => anchor.checked_add_days(step).unwrap_or(NaiveDate::MAX),
        Direction::Backward => anchor.checked_sub_days(step).unwrap_or(NaiveDate::MIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRANULARITIES: [Granularity; 3] =
        [Granularity::Days, Granularity::Weeks, Granularity::Months];

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_step_sizes() {
        assert_eq!(Granularity::Days.step_days(), 7);
        assert_eq!(Granularity::Weeks.step_days(), 14);
        assert_eq!(Granularity::Months.step_days(), 30);
    }

    #[test]
    fn test_default_granularity_is_weeks() {
        assert_eq!(Granularity::default(), Granularity::Weeks);
    }

    #[test]
    fn test_advance_forward() {
        let anchor = date(2024, 10, 1);
        assert_eq!(
            advance(anchor, Direction::Forward, Granularity::Days),
            date(2024, 10, 8)
        );
        assert_eq!(
            advance(anchor, Direction::Forward, Granularity::Weeks),
            date(2024, 10, 15)
        );
        assert_eq!(
            advance(anchor, Direction::Forward, Granularity::Months),
            date(2024, 10, 31)
        );
    }

    #[test]
    fn test_advance_backward() {
        let anchor = date(2024, 10, 1);
        assert_eq!(
            advance(anchor, Direction::Backward, Granularity::Days),
            date(2024, 9, 24)
        );
        assert_eq!(
            advance(anchor, Direction::Backward, Granularity::Weeks),
            date(2024, 9, 17)
        );
        assert_eq!(
            advance(anchor, Direction::Backward, Granularity::Months),
            date(2024, 9, 1)
        );
    }

    #[test]
    fn test_month_step_is_thirty_days_not_a_calendar_month() {
        assert_eq!(
            advance(date(2024, 1, 31), Direction::Forward, Granularity::Months),
            date(2024, 3, 1)
        );
        assert_eq!(
            advance(date(2023, 2, 15), Direction::Forward, Granularity::Months),
            date(2023, 3, 17)
        );
    }

    #[test]
    fn test_round_trip_returns_to_anchor() {
        let anchors = [
            date(2024, 10, 1),
            date(2024, 2, 29),
            date(2023, 12, 31),
            date(2000, 1, 1),
        ];
        for anchor in anchors {
            for granularity in GRANULARITIES {
                let there = advance(anchor, Direction::Forward, granularity);
                assert_eq!(advance(there, Direction::Backward, granularity), anchor);
                let back = advance(anchor, Direction::Backward, granularity);
                assert_eq!(advance(back, Direction::Forward, granularity), anchor);
            }
        }
    }

    #[test]
    fn test_advance_saturates_at_range_edges() {
        assert_eq!(
            advance(NaiveDate::MAX, Direction::Forward, Granularity::Days),
            NaiveDate::MAX
        );
        assert_eq!(
            advance(NaiveDate::MIN, Direction::Backward, Granularity::Months),
            NaiveDate::MIN
        );
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(Direction::parse("forward"), Some(Direction::Forward));
        assert_eq!(Direction::parse("next"), Some(Direction::Forward));
        assert_eq!(Direction::parse("backward"), Some(Direction::Backward));
        assert_eq!(Direction::parse("prev"), Some(Direction::Backward));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn test_parse_granularity_round_trips() {
        for granularity in GRANULARITIES {
            assert_eq!(Granularity::parse(granularity.as_str()), Some(granularity));
            assert_eq!(format!("{}", granularity), granularity.as_str());
        }
        assert_eq!(Granularity::parse("years"), None);
    }
}
