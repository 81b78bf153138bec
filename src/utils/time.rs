use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn to_rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

pub fn from_rfc3339(s: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

/// Whole calendar months from `start` to `end`, clamped at zero.
/// A partial trailing month does not count.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        return 0;
    }
    let mut months =
        (end.year() as i64 - start.year() as i64) * 12 + (end.month() as i64 - start.month() as i64);
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0)
}

/// Month span expressed in years, rounded to one decimal.
pub fn months_to_years(months: i64) -> f64 {
    ((months as f64 / 12.0) * 10.0).round() / 10.0
}

/// True when `date` falls inside `reference ± tolerance_days`, or earlier
/// than the reference itself.
pub fn joined_from_start(date: NaiveDate, reference: NaiveDate, tolerance_days: i64) -> bool {
    date <= reference + Duration::days(tolerance_days)
}

/// Overlap test between two half-open date ranges (`None` end = ongoing),
/// with each end of `b` stretched by `tolerance_months`.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: Option<NaiveDate>,
    b_start: NaiveDate,
    b_end: Option<NaiveDate>,
    tolerance_months: u32,
) -> bool {
    let far_future = NaiveDate::MAX;
    let a_end = a_end.unwrap_or(far_future);
    let b_start = b_start
        .checked_sub_months(Months::new(tolerance_months))
        .unwrap_or(b_start);
    let b_end = b_end
        .map(|d| d.checked_add_months(Months::new(tolerance_months)).unwrap_or(d))
        .unwrap_or(far_future);
    a_start <= b_end && b_start <= a_end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn months_between_counts_whole_months() {
        assert_eq!(months_between(d(2023, 1, 15), d(2023, 4, 15)), 3);
        assert_eq!(months_between(d(2023, 1, 15), d(2023, 4, 14)), 2);
        assert_eq!(months_between(d(2023, 4, 1), d(2023, 1, 1)), 0);
    }

    #[test]
    fn months_to_years_rounds_one_decimal() {
        assert_eq!(months_to_years(30), 2.5);
        assert_eq!(months_to_years(13), 1.1);
        assert_eq!(months_to_years(0), 0.0);
    }

    #[test]
    fn overlap_respects_month_tolerance() {
        // Gap of two months closes under a two-month stretch.
        assert!(!ranges_overlap(d(2020, 1, 1), Some(d(2020, 3, 1)), d(2020, 5, 1), None, 0));
        assert!(ranges_overlap(d(2020, 1, 1), Some(d(2020, 3, 1)), d(2020, 5, 1), None, 2));
    }
}
