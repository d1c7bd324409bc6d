use crate::utils::time::minute_of_day;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A confirmed reservation as stored in the `bookings` table. The slot
/// engine only reads it as an occupied interval; creation and deletion
/// go through `db::bookings`.
#[derive(Debug, Clone, Serialize)]
pub struct BookingRecord {
    pub id: String,
    pub service_id: String,         // ⇔ bookings.service_id
    pub stylist_id: String,         // ⇔ bookings.stylist_id
    pub date: NaiveDate,            // ⇔ bookings.appointment_date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime,            // ⇔ bookings.start_time (TEXT "HH:MM")
    pub duration: i64,              // ⇔ bookings.duration_minutes
    pub add_on_ids: Vec<String>,    // ⇔ booking_add_ons
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub notes: Option<String>,
    pub marketing_consent: bool,
    pub created_at: String,         // ISO8601
}

impl BookingRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn start_minutes(&self) -> i64 {
        minute_of_day(self.time)
    }

    pub fn end_minutes(&self) -> i64 {
        self.start_minutes() + self.duration
    }
}
