//! Tests for weekly-schedule lookups and schedule validation.

use bridgebook::core::schedule::{schedule_for_date, stylist_works_on_date};
use bridgebook::errors::AppError;
use bridgebook::models::stylist::{ScheduleBlock, ScheduleBreak, Stylist, StylistScheduleEntry};
use chrono::{NaiveDate, NaiveTime};

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("fixture time")
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date")
}

fn entry(day: u8, blocks: &[(&str, &str)]) -> StylistScheduleEntry {
    StylistScheduleEntry {
        day,
        blocks: blocks
            .iter()
            .map(|(s, e)| ScheduleBlock {
                start: t(s),
                end: t(e),
            })
            .collect(),
        breaks: vec![],
    }
}

fn stylist(schedule: Vec<StylistScheduleEntry>) -> Stylist {
    Stylist {
        id: "leon".to_string(),
        name: "Leon Chambers".to_string(),
        title: "Master Barber".to_string(),
        bio: "Detail-focused".to_string(),
        years_experience: 12,
        rating: 4.9,
        specialties: vec!["signature-cut".to_string()],
        schedule,
    }
}

#[test]
fn works_on_date_matches_weekday_number() {
    // 2030-03-05 is a Tuesday (day 2), 2030-03-04 a Monday (day 1).
    let s = stylist(vec![entry(2, &[("09:00", "17:00")])]);

    assert!(stylist_works_on_date(&s, d("2030-03-05")));
    assert!(!stylist_works_on_date(&s, d("2030-03-04")));
}

#[test]
fn sunday_is_day_zero() {
    let s = stylist(vec![entry(0, &[("11:00", "16:00")])]);

    // 2030-03-10 is a Sunday.
    assert!(stylist_works_on_date(&s, d("2030-03-10")));
    assert!(!stylist_works_on_date(&s, d("2030-03-09")));
}

#[test]
fn schedule_for_date_returns_matching_entry() {
    let s = stylist(vec![
        entry(2, &[("09:00", "17:00")]),
        entry(6, &[("10:00", "16:00")]),
    ]);

    let found = schedule_for_date(&s, d("2030-03-09")).expect("saturday entry");
    assert_eq!(found.day, 6);

    assert!(schedule_for_date(&s, d("2030-03-04")).is_none());
}

#[test]
fn duplicate_days_resolve_to_first_entry() {
    let s = stylist(vec![
        entry(2, &[("09:00", "12:00")]),
        entry(2, &[("14:00", "18:00")]),
    ]);

    let found = schedule_for_date(&s, d("2030-03-05")).expect("tuesday entry");
    assert_eq!(found.blocks[0].start, t("09:00"));
}

#[test]
fn validate_accepts_disjoint_blocks() {
    let mut e = entry(2, &[("09:00", "12:00"), ("14:00", "18:00")]);
    e.breaks.push(ScheduleBreak {
        start: t("10:00"),
        end: t("10:30"),
    });

    assert!(e.validate().is_ok());
}

#[test]
fn validate_accepts_touching_blocks() {
    let e = entry(2, &[("09:00", "12:00"), ("12:00", "15:00")]);

    assert!(e.validate().is_ok());
}

#[test]
fn validate_rejects_inverted_block() {
    let e = entry(2, &[("12:00", "09:00")]);

    assert!(matches!(e.validate(), Err(AppError::InvalidSchedule(_))));
}

#[test]
fn validate_rejects_overlapping_blocks() {
    let e = entry(2, &[("09:00", "13:00"), ("12:00", "18:00")]);

    assert!(matches!(e.validate(), Err(AppError::InvalidSchedule(_))));
}

#[test]
fn validate_rejects_inverted_break() {
    let mut e = entry(2, &[("09:00", "17:00")]);
    e.breaks.push(ScheduleBreak {
        start: t("13:00"),
        end: t("12:00"),
    });

    assert!(matches!(e.validate(), Err(AppError::InvalidSchedule(_))));
}

#[test]
fn validate_rejects_out_of_range_day() {
    let e = entry(7, &[("09:00", "17:00")]);

    assert!(matches!(e.validate(), Err(AppError::InvalidSchedule(_))));
}
