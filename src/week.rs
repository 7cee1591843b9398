//! The week shown on the schedule page.

use time::{Date, Duration, OffsetDateTime, Weekday};

/// Monday and Friday of the school week for `today`.
///
/// On weekends the upcoming week is shown: Saturday and Sunday both move to the next Monday.
pub fn school_week(today: Date) -> (Date, Date) {
    let to_monday = match today.weekday() {
        Weekday::Saturday => 2,
        Weekday::Sunday => 1,
        weekday => -i64::from(weekday.number_days_from_monday()),
    };
    let monday = today.saturating_add(Duration::days(to_monday));
    let friday = monday.saturating_add(Duration::days(4));
    (monday, friday)
}

/// `"<Month>, <Monday> - <Friday>"`, named after Monday's month even when Friday falls in
/// the next one.
pub fn week_title(today: Date) -> String {
    let (monday, friday) = school_week(today);
    format!("{}, {} - {}", monday.month(), monday.day(), friday.day())
}

pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
