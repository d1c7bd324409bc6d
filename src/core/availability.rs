//! Slot-generation engine: composes a stylist's recurring schedule for one
//! calendar date, subtracts breaks and already-confirmed bookings, and
//! enumerates the bookable start times for a requested total duration.

use crate::errors::{AppError, AppResult};
use crate::models::booking::BookingRecord;
use crate::models::stylist::StylistScheduleEntry;
use crate::utils::time::{minute_of_day, minutes_to_time};
use chrono::{NaiveDate, NaiveDateTime};

/// Candidate start times land on a fixed 15-minute grid regardless of the
/// requested duration, so slots stay predictable across services.
pub const SLOT_STEP_MIN: i64 = 15;

/// Half-open `[start, end)` span of occupied minutes within the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedInterval {
    pub start: i64,
    pub end: i64,
}

impl BlockedInterval {
    /// Standard half-open intersection test; touching endpoints do not
    /// count as overlap, so a booking ending at 09:30 leaves 09:30 free.
    pub fn overlaps(&self, start: i64, end: i64) -> bool {
        start < self.end && end > self.start
    }
}

/// Lower every break and every existing booking into minute offsets.
/// `existing` must already be filtered to the target stylist and date.
pub fn blocked_intervals(
    schedule: &StylistScheduleEntry,
    existing: &[BookingRecord],
) -> Vec<BlockedInterval> {
    let mut blocked: Vec<BlockedInterval> = schedule
        .breaks
        .iter()
        .map(|brk| BlockedInterval {
            start: minute_of_day(brk.start),
            end: minute_of_day(brk.end),
        })
        .collect();

    blocked.extend(existing.iter().map(|booking| BlockedInterval {
        start: booking.start_minutes(),
        end: booking.end_minutes(),
    }));

    blocked
}

/// Enumerate valid `"HH:MM"` start times for `requested_duration` minutes
/// on `date`, in block order and ascending within each block.
///
/// `now` drives the today-filter only: when `date` is the same calendar
/// day, candidates at or before the current instant are dropped. Passing
/// it explicitly keeps the function referentially transparent.
///
/// An empty result is a normal outcome ("no availability this day"),
/// never an error.
pub fn generate_slots(
    schedule: &StylistScheduleEntry,
    date: NaiveDate,
    requested_duration: i64,
    existing: &[BookingRecord],
    now: NaiveDateTime,
) -> AppResult<Vec<String>> {
    if requested_duration <= 0 {
        return Err(AppError::InvalidDuration(requested_duration));
    }

    let blocked = blocked_intervals(schedule, existing);

    // The candidate grid has minute precision, so "strictly after now"
    // reduces to a minute comparison on matching days.
    let day_is_today = date == now.date();
    let now_minutes = minute_of_day(now.time());

    let mut slots = Vec::new();

    for block in &schedule.blocks {
        let mut cursor = block.start_minutes();
        let block_end = block.end_minutes();

        while cursor + requested_duration <= block_end {
            let slot_end = cursor + requested_duration;
            let conflicts = blocked.iter().any(|b| b.overlaps(cursor, slot_end));

            if !conflicts && (!day_is_today || cursor > now_minutes) {
                slots.push(minutes_to_time(cursor));
            }

            cursor += SLOT_STEP_MIN;
        }
    }

    Ok(slots)
}
