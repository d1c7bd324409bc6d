//! Tests for the wall-clock ↔ minute-offset helpers.

use bridgebook::errors::AppError;
use bridgebook::utils::time::{format_time_display, minutes_to_time, to_minutes};
use chrono::NaiveDate;

#[test]
fn round_trips_on_the_quarter_hour_grid() {
    for minutes in (0..1440).step_by(15) {
        let text = minutes_to_time(minutes as i64);
        assert_eq!(to_minutes(&text).unwrap(), minutes as i64);
        assert_eq!(minutes_to_time(to_minutes(&text).unwrap()), text);
    }
}

#[test]
fn converts_known_offsets() {
    assert_eq!(to_minutes("00:00").unwrap(), 0);
    assert_eq!(to_minutes("09:30").unwrap(), 570);
    assert_eq!(to_minutes("13:45").unwrap(), 825);
    assert_eq!(to_minutes("23:59").unwrap(), 1439);
}

#[test]
fn pads_both_components() {
    assert_eq!(minutes_to_time(5), "00:05");
    assert_eq!(minutes_to_time(60), "01:00");
    assert_eq!(minutes_to_time(825), "13:45");
}

#[test]
fn rejects_non_canonical_time_strings() {
    for bad in ["9:00", "09:0", "0900", "09.00", "ab:cd", "25:00", "09:60", "", "09:00:00"] {
        let result = to_minutes(bad);
        assert!(
            matches!(result, Err(AppError::InvalidTime(_))),
            "'{}' should be rejected",
            bad
        );
    }
}

#[test]
fn formats_twelve_hour_display() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();

    assert_eq!(format_time_display(date, "13:45").unwrap(), "1:45 PM");
    assert_eq!(format_time_display(date, "09:05").unwrap(), "9:05 AM");
    assert_eq!(format_time_display(date, "00:05").unwrap(), "12:05 AM");
    assert_eq!(format_time_display(date, "12:00").unwrap(), "12:00 PM");
}

#[test]
fn display_formatting_rejects_malformed_input() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();

    assert!(matches!(
        format_time_display(date, "1:45"),
        Err(AppError::InvalidTime(_))
    ));
}
