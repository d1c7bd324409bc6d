use crate::errors::{AppError, AppResult};
use crate::utils::time::minute_of_day;
use chrono::NaiveTime;
use serde::Serialize;

/// A contiguous span of availability within one day.
/// Invariant: `start < end`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScheduleBlock {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ScheduleBlock {
    pub fn start_minutes(&self) -> i64 {
        minute_of_day(self.start)
    }

    pub fn end_minutes(&self) -> i64 {
        minute_of_day(self.end)
    }
}

/// A span during which the stylist is unavailable (e.g. lunch). Not
/// required to sit inside a block; lowered to an independent blocked
/// interval during slot generation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScheduleBreak {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One weekday's recurring schedule for one stylist.
/// `day` uses 0 = Sunday .. 6 = Saturday, matching `Date.getDay()`-style
/// weekday numbers in the booking data.
#[derive(Debug, Clone, Serialize)]
pub struct StylistScheduleEntry {
    pub day: u8,
    pub blocks: Vec<ScheduleBlock>,
    pub breaks: Vec<ScheduleBreak>,
}

impl StylistScheduleEntry {
    /// Reject inverted spans and mutually overlapping blocks. A schedule
    /// that fails here never reaches the slot engine, so the engine can
    /// assume blocks are disjoint and never emits duplicate slots.
    pub fn validate(&self) -> AppResult<()> {
        if self.day > 6 {
            return Err(AppError::InvalidSchedule(format!(
                "day_of_week {} out of range",
                self.day
            )));
        }

        for block in &self.blocks {
            if block.start >= block.end {
                return Err(AppError::InvalidSchedule(format!(
                    "inverted block {}-{} on day {}",
                    block.start.format("%H:%M"),
                    block.end.format("%H:%M"),
                    self.day
                )));
            }
        }

        for brk in &self.breaks {
            if brk.start >= brk.end {
                return Err(AppError::InvalidSchedule(format!(
                    "inverted break {}-{} on day {}",
                    brk.start.format("%H:%M"),
                    brk.end.format("%H:%M"),
                    self.day
                )));
            }
        }

        let mut spans: Vec<(i64, i64)> = self
            .blocks
            .iter()
            .map(|b| (b.start_minutes(), b.end_minutes()))
            .collect();
        spans.sort_unstable();

        for pair in spans.windows(2) {
            if pair[1].0 < pair[0].1 {
                return Err(AppError::InvalidSchedule(format!(
                    "overlapping blocks on day {}",
                    self.day
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Stylist {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub years_experience: i32,
    pub rating: f64,
    pub specialties: Vec<String>, // service ids
    pub schedule: Vec<StylistScheduleEntry>,
}

impl Stylist {
    pub fn offers(&self, service_id: &str) -> bool {
        self.specialties.iter().any(|id| id == service_id)
    }
}
