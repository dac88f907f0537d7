//! Time bucketer
//!
//! Produces the ascending boundary instants that delimit balance-history
//! buckets. Month and year steps are calendar-aware: stepping back a month
//! from March 31 lands on February 28/29, so bucket widths are not uniform in
//! elapsed seconds.

use chrono::{DateTime, Duration, Months, Utc};
use std::fmt;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};

/// Recognized bucketing units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    Hour,
    Day,
    Week,
    #[default]
    Month,
    Year,
}

/// Default bucket count when the caller does not specify one
pub const DEFAULT_BUCKET_COUNT: usize = 24;

impl Interval {
    /// The anchor instant shifted back by `steps` of this unit
    fn back(&self, anchor: DateTime<Utc>, steps: usize) -> DateTime<Utc> {
        match self {
            Interval::Hour => anchor - Duration::hours(steps as i64),
            Interval::Day => anchor - Duration::days(steps as i64),
            Interval::Week => anchor - Duration::weeks(steps as i64),
            Interval::Month => anchor
                .checked_sub_months(Months::new(steps as u32))
                .unwrap_or(anchor),
            Interval::Year => anchor
                .checked_sub_months(Months::new(steps as u32 * 12))
                .unwrap_or(anchor),
        }
    }
}

impl FromStr for Interval {
    type Err = LedgerError;

    fn from_str(s: &str) -> LedgerResult<Self> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(Interval::Hour),
            "day" => Ok(Interval::Day),
            "week" => Ok(Interval::Week),
            "month" => Ok(Interval::Month),
            "year" => Ok(Interval::Year),
            other => Err(LedgerError::InvalidInterval(other.to_string())),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Interval::Hour => "hour",
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
            Interval::Year => "year",
        };
        write!(f, "{}", name)
    }
}

/// Produce the `count + 1` ascending bucket boundaries ending at `anchor`:
/// `anchor - count*unit, …, anchor - unit, anchor`.
pub fn boundaries(anchor: DateTime<Utc>, interval: Interval, count: usize) -> Vec<DateTime<Utc>> {
    (0..=count)
        .rev()
        .map(|steps| interval.back(anchor, steps))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("MONTH".parse::<Interval>().unwrap(), Interval::Month);
        assert_eq!("Week".parse::<Interval>().unwrap(), Interval::Week);
    }

    #[test]
    fn test_parse_rejects_unknown_unit() {
        let err = "fortnight".parse::<Interval>().unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInterval(_)));
    }

    #[test]
    fn test_default_unit_is_month() {
        assert_eq!(Interval::default(), Interval::Month);
    }

    #[test]
    fn test_month_boundaries_are_calendar_aware() {
        let anchor = Utc.with_ymd_and_hms(2018, 4, 15, 10, 30, 0).unwrap();
        let bounds = boundaries(anchor, Interval::Month, 3);

        assert_eq!(bounds.len(), 4);
        assert_eq!(bounds[0], Utc.with_ymd_and_hms(2018, 1, 15, 10, 30, 0).unwrap());
        assert_eq!(bounds[1], Utc.with_ymd_and_hms(2018, 2, 15, 10, 30, 0).unwrap());
        assert_eq!(bounds[2], Utc.with_ymd_and_hms(2018, 3, 15, 10, 30, 0).unwrap());
        assert_eq!(bounds[3], anchor);
    }

    #[test]
    fn test_month_step_clamps_short_months() {
        // One month before March 31 is February 28 (2018 is not a leap year).
        let anchor = Utc.with_ymd_and_hms(2018, 3, 31, 0, 0, 0).unwrap();
        let bounds = boundaries(anchor, Interval::Month, 1);
        assert_eq!(bounds[0], Utc.with_ymd_and_hms(2018, 2, 28, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_hour_boundaries_ascend_to_anchor() {
        let anchor = Utc.with_ymd_and_hms(2018, 4, 15, 10, 0, 0).unwrap();
        let bounds = boundaries(anchor, Interval::Hour, 2);
        assert_eq!(
            bounds,
            vec![
                Utc.with_ymd_and_hms(2018, 4, 15, 8, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2018, 4, 15, 9, 0, 0).unwrap(),
                anchor,
            ]
        );
    }

    #[test]
    fn test_zero_count_yields_only_anchor() {
        let anchor = Utc.with_ymd_and_hms(2018, 4, 15, 10, 0, 0).unwrap();
        assert_eq!(boundaries(anchor, Interval::Year, 0), vec![anchor]);
    }
}
