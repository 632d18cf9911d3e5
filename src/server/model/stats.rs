//! Calendar periods and growth math for statistics.

use chrono::{DateTime, Datelike, Days, Months, NaiveTime, TimeDelta, Utc};

/// Half-open time range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    /// The calendar month (UTC) containing `at`.
    pub fn month_of(at: DateTime<Utc>) -> Self {
        let date = at.date_naive();
        let first = date - Days::new(u64::from(date.day0()));
        let start = first.and_time(NaiveTime::MIN).and_utc();
        let end = start
            .checked_add_months(Months::new(1))
            .unwrap_or(start + TimeDelta::days(31));

        Self { start, end }
    }

    /// The calendar month before this one.
    pub fn previous_month(&self) -> Self {
        Self::month_of(self.start - TimeDelta::days(1))
    }

    /// `YYYY-MM` label of the month the period starts in.
    pub fn month_label(&self) -> String {
        self.start.format("%Y-%m").to_string()
    }
}

/// The last `count` calendar months up to and including the one containing `now`,
/// oldest first.
pub fn recent_months(now: DateTime<Utc>, count: usize) -> Vec<Period> {
    let mut months = Vec::with_capacity(count);
    let mut month = Period::month_of(now);
    for _ in 0..count {
        months.push(month);
        month = month.previous_month();
    }
    months.reverse();
    months
}

/// Month-over-month growth in percent.
///
/// A zero baseline counts as 100% growth when anything happened this month.
pub fn growth_rate(this_month: i64, last_month: i64) -> f64 {
    if last_month == 0 {
        return if this_month > 0 { 100.0 } else { 0.0 };
    }

    (this_month - last_month) as f64 / last_month as f64 * 100.0
}

/// Share of `part` in `total` in percent; zero when `total` is zero.
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    part as f64 / total as f64 * 100.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyMetric {
    pub this_month: i64,
    pub last_month: i64,
}

impl MonthlyMetric {
    pub fn growth_rate(&self) -> f64 {
        growth_rate(self.this_month, self.last_month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn computes_growth_rate() {
        assert_eq!(growth_rate(15, 10), 50.0);
        assert_eq!(growth_rate(5, 10), -50.0);
        assert_eq!(growth_rate(3, 0), 100.0);
        assert_eq!(growth_rate(0, 0), 0.0);
    }

    #[test]
    fn computes_percentage_with_zero_total() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn builds_calendar_months() {
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 10, 30, 0).unwrap();
        let month = Period::month_of(now);

        assert_eq!(month.start, Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(month.end, Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap());
        assert_eq!(
            month.previous_month().start,
            Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn lists_recent_months_across_year_boundary() {
        let now = Utc.with_ymd_and_hms(2026, 2, 10, 0, 0, 0).unwrap();
        let labels: Vec<String> = recent_months(now, 6).iter().map(Period::month_label).collect();

        assert_eq!(
            labels,
            vec!["2025-09", "2025-10", "2025-11", "2025-12", "2026-01", "2026-02"]
        );
    }
}
