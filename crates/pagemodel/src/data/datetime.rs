// Date and time representations for test data
//
// Formatting and offset helpers over chrono. Callers supply the base date,
// so everything stays deterministic under test; `today()` is the one
// ambient entry point.

use chrono::{Duration, Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// The current local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// ISO form, `2026-08-06`.
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// US form, `08/06/2026`.
pub fn us(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Long human form, `August 6, 2026`.
pub fn long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Full weekday name, `Thursday`.
pub fn weekday(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Full month name, `August`.
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// 24-hour clock form, `14:05`.
pub fn clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// The date `days` away from `base` (negative for the past).
pub fn days_from(base: NaiveDate, days: i64) -> NaiveDate {
    base + Duration::days(days)
}

pub fn yesterday(base: NaiveDate) -> NaiveDate {
    days_from(base, -1)
}

pub fn tomorrow(base: NaiveDate) -> NaiveDate {
    days_from(base, 1)
}

/// Every formatted representation of one date, for populating a record's
/// date fields in a single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateForms {
    pub iso: String,
    pub us: String,
    pub long: String,
    pub weekday: String,
    pub month: String,
}

pub fn forms(date: NaiveDate) -> DateForms {
    DateForms {
        iso: iso(date),
        us: us(date),
        long: long(date),
        weekday: weekday(date),
        month: month_name(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date")
    }

    #[test]
    fn test_formats() {
        let date = base();
        assert_eq!(iso(date), "2026-08-06");
        assert_eq!(us(date), "08/06/2026");
        assert_eq!(long(date), "August 6, 2026");
        assert_eq!(weekday(date), "Thursday");
        assert_eq!(month_name(date), "August");
    }

    #[test]
    fn test_clock() {
        let time = NaiveTime::from_hms_opt(14, 5, 0).expect("valid time");
        assert_eq!(clock(time), "14:05");
    }

    #[test]
    fn test_offsets() {
        let date = base();
        assert_eq!(iso(yesterday(date)), "2026-08-05");
        assert_eq!(iso(tomorrow(date)), "2026-08-07");
        assert_eq!(iso(days_from(date, 30)), "2026-09-05");
        assert_eq!(iso(days_from(date, -37)), "2026-06-30");
    }

    #[test]
    fn test_forms_bundle() {
        let forms = forms(base());
        assert_eq!(forms.iso, "2026-08-06");
        assert_eq!(forms.weekday, "Thursday");
        assert_eq!(forms.month, "August");
    }
}
