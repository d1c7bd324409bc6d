//! Weekly-schedule lookups for a concrete calendar date.

use crate::models::stylist::{Stylist, StylistScheduleEntry};
use crate::utils::date::weekday_number;
use chrono::NaiveDate;

/// True iff some schedule entry's `day` matches the date's weekday
/// (0 = Sunday). Date and schedule share a civil-calendar frame; no
/// timezone conversion happens here.
pub fn stylist_works_on_date(stylist: &Stylist, date: NaiveDate) -> bool {
    let day = weekday_number(date);
    stylist.schedule.iter().any(|entry| entry.day == day)
}

/// The recurring entry for the date's weekday, if any. Takes the first
/// match should a malformed schedule carry duplicate days.
pub fn schedule_for_date(stylist: &Stylist, date: NaiveDate) -> Option<&StylistScheduleEntry> {
    let day = weekday_number(date);
    stylist.schedule.iter().find(|entry| entry.day == day)
}
