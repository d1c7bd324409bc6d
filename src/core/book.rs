//! Booking submission: validate the request, re-check availability against
//! fresh booking state, then hand the insert to the atomic create path in
//! the db layer. The slot list computed client-side is an optimistic hint;
//! the transaction in `db::bookings::create_booking` is the source of
//! truth for conflict-freedom.

use crate::core::availability::generate_slots;
use crate::core::quote::{Quote, build_quote};
use crate::core::schedule::schedule_for_date;
use crate::db::bookings::{self, NewBooking};
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::add_on::AddOn;
use crate::models::booking::BookingRecord;
use crate::models::service::Service;
use crate::models::stylist::Stylist;
use chrono::{Local, NaiveDate, NaiveTime};
use regex::Regex;
use uuid::Uuid;

/// Client contact details collected at booking time. Mirrors the intake
/// form rules: full name, plausible email, phone digits/symbols only,
/// notes capped at 500 characters.
#[derive(Debug, Clone)]
pub struct ClientDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: Option<String>,
    pub marketing_consent: bool,
}

impl ClientDetails {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().len() < 2 {
            return Err(AppError::InvalidClient(
                "name must be at least 2 characters".to_string(),
            ));
        }

        let email_re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .map_err(|e| AppError::Other(e.to_string()))?;
        if !email_re.is_match(self.email.trim()) {
            return Err(AppError::InvalidClient(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }

        let phone_re =
            Regex::new(r"^[+()0-9\s-]+$").map_err(|e| AppError::Other(e.to_string()))?;
        if self.phone.trim().len() < 7 || !phone_re.is_match(self.phone.trim()) {
            return Err(AppError::InvalidClient(format!(
                "'{}' is not a valid phone number (use digits and + - ( ) only)",
                self.phone
            )));
        }

        if let Some(notes) = &self.notes
            && notes.len() > 500
        {
            return Err(AppError::InvalidClient(
                "notes must be 500 characters or fewer".to_string(),
            ));
        }

        Ok(())
    }
}

/// Outcome of a confirmed submission.
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub booking: BookingRecord,
    pub code: String,
    pub quote: Quote,
}

pub struct BookLogic;

impl BookLogic {
    /// Confirmation code in the shop's format, e.g. "BRG-4F7A2C".
    pub fn confirmation_code(prefix: &str) -> String {
        let tail: String = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(6)
            .collect();
        format!("{}-{}", prefix, tail.to_uppercase())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn submit(
        pool: &mut DbPool,
        service: &Service,
        add_ons: &[AddOn],
        stylist: &Stylist,
        date: NaiveDate,
        time: NaiveTime,
        client: &ClientDetails,
        confirmation_prefix: &str,
    ) -> AppResult<Confirmation> {
        client.validate()?;

        let quote = build_quote(service, add_ons);
        let time_str = time.format("%H:%M").to_string();
        let date_str = date.format("%Y-%m-%d").to_string();

        write_log(
            &pool.conn,
            "booking_attempt",
            &format!("{}/{}", stylist.id, date_str),
            &format!("{} at {} for {}", service.id, time_str, client.name),
        )?;

        let result = Self::try_submit(pool, service, add_ons, stylist, date, time, client, quote);

        match &result {
            Ok(booking) => write_log(
                &pool.conn,
                "booking_success",
                &booking.id,
                &format!("{} on {} at {}", stylist.id, date_str, time_str),
            )?,
            Err(err) => write_log(
                &pool.conn,
                "booking_failure",
                &format!("{}/{}", stylist.id, date_str),
                &err.to_string(),
            )?,
        }

        let booking = result?;
        let code = Self::confirmation_code(confirmation_prefix);

        Ok(Confirmation {
            booking,
            code,
            quote,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn try_submit(
        pool: &mut DbPool,
        service: &Service,
        add_ons: &[AddOn],
        stylist: &Stylist,
        date: NaiveDate,
        time: NaiveTime,
        client: &ClientDetails,
        quote: Quote,
    ) -> AppResult<BookingRecord> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let time_str = time.format("%H:%M").to_string();

        let schedule =
            schedule_for_date(stylist, date).ok_or_else(|| AppError::StylistOffDuty {
                stylist: stylist.name.clone(),
                date: date_str.clone(),
            })?;

        // Optimistic pre-check against a fresh snapshot; the transaction in
        // create_booking repeats the overlap test.
        let existing = bookings::load_for_stylist_date(&pool.conn, &stylist.id, date)?;
        let now = Local::now().naive_local();
        let slots = generate_slots(schedule, date, quote.total_duration, &existing, now)?;

        if !slots.iter().any(|slot| slot == &time_str) {
            return Err(AppError::SlotConflict {
                date: date_str,
                time: time_str,
            });
        }

        bookings::create_booking(
            pool,
            &NewBooking {
                service_id: service.id.clone(),
                stylist_id: stylist.id.clone(),
                date,
                time,
                duration: quote.total_duration,
                add_on_ids: add_ons.iter().map(|a| a.id.clone()).collect(),
                client_name: client.name.trim().to_string(),
                client_email: client.email.trim().to_string(),
                client_phone: client.phone.trim().to_string(),
                notes: client
                    .notes
                    .as_ref()
                    .map(|n| n.trim().to_string())
                    .filter(|n| !n.is_empty()),
                marketing_consent: client.marketing_consent,
            },
        )
    }
}
