use core::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use gudang_core::DomainError;

/// Reporting window anchored to "now".
///
/// Intervals are half-open `[start, end)` in UTC; weeks start on Monday.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl ReportPeriod {
    pub fn interval(self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let today = now.date_naive();
        match self {
            ReportPeriod::Day => (start_of(today), start_of(today + Duration::days(1))),
            ReportPeriod::Week => {
                let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                (start_of(monday), start_of(monday + Duration::days(7)))
            }
            ReportPeriod::Month => {
                let (year, month) = (today.year(), today.month());
                (start_of(month_start(year, month)), start_of(next_month(year, month)))
            }
            ReportPeriod::Quarter => {
                let first_month = (today.month0() / 3) * 3 + 1;
                let start = month_start(today.year(), first_month);
                let end = if first_month + 3 > 12 {
                    month_start(today.year() + 1, first_month + 3 - 12)
                } else {
                    month_start(today.year(), first_month + 3)
                };
                (start_of(start), start_of(end))
            }
            ReportPeriod::Year => (
                start_of(month_start(today.year(), 1)),
                start_of(month_start(today.year() + 1, 1)),
            ),
        }
    }

    pub fn contains(self, now: DateTime<Utc>, instant: DateTime<Utc>) -> bool {
        let (start, end) = self.interval(now);
        start <= instant && instant < end
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Day => "day",
            ReportPeriod::Week => "week",
            ReportPeriod::Month => "month",
            ReportPeriod::Quarter => "quarter",
            ReportPeriod::Year => "year",
        }
    }
}

impl core::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportPeriod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(ReportPeriod::Day),
            "week" => Ok(ReportPeriod::Week),
            "month" => Ok(ReportPeriod::Month),
            "quarter" => Ok(ReportPeriod::Quarter),
            "year" => Ok(ReportPeriod::Year),
            _ => Err(DomainError::validation(format!("unknown report period '{s}'"))),
        }
    }
}

fn start_of(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn month_start(year: i32, month: u32) -> NaiveDate {
    // month is always 1..=12 here.
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month")
}

fn next_month(year: i32, month: u32) -> NaiveDate {
    if month == 12 {
        month_start(year + 1, 1)
    } else {
        month_start(year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 30, 0).unwrap()
    }

    #[test]
    fn day_covers_midnight_to_midnight() {
        let now = at(2024, 3, 15, 14);
        let (start, end) = ReportPeriod::Day.interval(now);
        assert_eq!(start, at(2024, 3, 15, 0) - Duration::minutes(30));
        assert_eq!(end - start, Duration::days(1));
        assert!(ReportPeriod::Day.contains(now, now));
        assert!(!ReportPeriod::Day.contains(now, end));
    }

    #[test]
    fn week_starts_on_monday() {
        // 2024-03-15 is a Friday; the week began Monday the 11th.
        let now = at(2024, 3, 15, 9);
        let (start, end) = ReportPeriod::Week.interval(now);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(end - start, Duration::days(7));
    }

    #[test]
    fn quarter_interval_spans_three_months() {
        let now = at(2024, 11, 2, 9);
        let (start, end) = ReportPeriod::Quarter.interval(now);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
        assert_eq!(end.date_naive(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn year_interval_wraps_to_january() {
        let now = at(2024, 12, 31, 23);
        let (start, end) = ReportPeriod::Year.interval(now);
        assert_eq!(start.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end.date_naive(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn parse_accepts_the_five_filter_values() {
        for (s, p) in [
            ("day", ReportPeriod::Day),
            ("week", ReportPeriod::Week),
            ("month", ReportPeriod::Month),
            ("quarter", ReportPeriod::Quarter),
            ("year", ReportPeriod::Year),
        ] {
            assert_eq!(s.parse::<ReportPeriod>().unwrap(), p);
        }
        assert!("fortnight".parse::<ReportPeriod>().is_err());
    }
}
