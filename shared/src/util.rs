use chrono::{Duration, NaiveDate, Utc};

/// Current UTC timestamp in RFC 3339 (row audit columns)
pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

/// First and last calendar day of a `(year, month)` pair.
///
/// Month is 1-indexed. Returns `None` for an out-of-range month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next_start - Duration::days(1)))
}
