//! Booking storage. `create_booking` is the single write path for new
//! reservations and owns the server-side conflict check: the overlap test
//! is repeated inside an exclusive transaction so that of two concurrent
//! submissions for the same slot exactly one wins.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::booking::BookingRecord;
use crate::utils::time::{minute_of_day, parse_time};
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, Row, TransactionBehavior, params};
use uuid::Uuid;

fn map_booking_row(row: &Row) -> rusqlite::Result<BookingRecord> {
    let date_str: String = row.get("appointment_date")?;
    let time_str: String = row.get("start_time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time = parse_time(&time_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    Ok(BookingRecord {
        id: row.get("id")?,
        service_id: row.get("service_id")?,
        stylist_id: row.get("stylist_id")?,
        date,
        time,
        duration: row.get("duration_minutes")?,
        add_on_ids: Vec::new(), // filled by attach_add_ons
        client_name: row.get("client_name")?,
        client_email: row.get("client_email")?,
        client_phone: row.get("client_phone")?,
        notes: row.get("notes")?,
        marketing_consent: row.get::<_, i64>("marketing_consent")? != 0,
        created_at: row.get("created_at")?,
    })
}

fn attach_add_ons(conn: &Connection, bookings: &mut [BookingRecord]) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "SELECT add_on_id FROM booking_add_ons WHERE booking_id = ?1 ORDER BY add_on_id",
    )?;

    for booking in bookings.iter_mut() {
        let rows = stmt.query_map([&booking.id], |row| row.get::<_, String>(0))?;
        for r in rows {
            booking.add_on_ids.push(r?);
        }
    }

    Ok(())
}

const BOOKING_COLUMNS: &str = "id, service_id, stylist_id, appointment_date, start_time, \
     duration_minutes, client_name, client_email, client_phone, notes, \
     marketing_consent, created_at";

/// All confirmed bookings for one (stylist, date) pair, ordered by start
/// time. This is the snapshot the slot engine subtracts.
pub fn load_for_stylist_date(
    conn: &Connection,
    stylist_id: &str,
    date: NaiveDate,
) -> AppResult<Vec<BookingRecord>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings
         WHERE stylist_id = ?1 AND appointment_date = ?2
         ORDER BY start_time ASC"
    ))?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map(params![stylist_id, date_str], map_booking_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    attach_add_ons(conn, &mut out)?;
    Ok(out)
}

/// Bookings for listings/exports, optionally bounded by date and stylist.
pub fn load_bookings(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
    stylist_id: Option<&str>,
) -> AppResult<Vec<BookingRecord>> {
    let mut sql = format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE 1=1"
    );
    let mut args: Vec<String> = Vec::new();

    if let Some((start, end)) = bounds {
        sql.push_str(&format!(
            " AND appointment_date BETWEEN ?{} AND ?{}",
            args.len() + 1,
            args.len() + 2
        ));
        args.push(start.format("%Y-%m-%d").to_string());
        args.push(end.format("%Y-%m-%d").to_string());
    }

    if let Some(stylist) = stylist_id {
        sql.push_str(&format!(" AND stylist_id = ?{}", args.len() + 1));
        args.push(stylist.to_string());
    }

    sql.push_str(" ORDER BY appointment_date ASC, start_time ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(args.iter()), map_booking_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    attach_add_ons(conn, &mut out)?;
    Ok(out)
}

/// Insert shape for `create_booking`.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub service_id: String,
    pub stylist_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: i64,
    pub add_on_ids: Vec<String>,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub notes: Option<String>,
    pub marketing_consent: bool,
}

/// Atomically insert a booking, rejecting any `(stylist, date, time-range)`
/// overlap with a confirmed booking. The IMMEDIATE transaction takes the
/// write lock before the re-check, so the check-then-insert pair cannot
/// interleave with another writer.
pub fn create_booking(pool: &mut DbPool, new: &NewBooking) -> AppResult<BookingRecord> {
    if new.duration <= 0 {
        return Err(AppError::InvalidDuration(new.duration));
    }

    let date_str = new.date.format("%Y-%m-%d").to_string();
    let time_str = new.time.format("%H:%M").to_string();

    let tx = pool
        .conn
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let start = minute_of_day(new.time);
    let end = start + new.duration;

    {
        let mut stmt = tx.prepare(
            "SELECT start_time, duration_minutes FROM bookings
             WHERE stylist_id = ?1 AND appointment_date = ?2",
        )?;

        let rows = stmt.query_map(params![new.stylist_id, date_str], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        for r in rows {
            let (existing_time, existing_duration) = r?;
            let existing_start = parse_time(&existing_time)
                .map(minute_of_day)
                .ok_or_else(|| AppError::InvalidTime(existing_time.clone()))?;
            let existing_end = existing_start + existing_duration;

            if start < existing_end && end > existing_start {
                return Err(AppError::SlotConflict {
                    date: date_str,
                    time: time_str,
                });
            }
        }
    }

    let id = Uuid::new_v4().to_string();
    let created_at = Local::now().to_rfc3339();

    tx.execute(
        "INSERT INTO bookings (id, service_id, stylist_id, appointment_date, start_time,
             duration_minutes, client_name, client_email, client_phone, notes,
             marketing_consent, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            id,
            new.service_id,
            new.stylist_id,
            date_str,
            time_str,
            new.duration,
            new.client_name,
            new.client_email,
            new.client_phone,
            new.notes,
            if new.marketing_consent { 1 } else { 0 },
            created_at,
        ],
    )?;

    for add_on_id in &new.add_on_ids {
        tx.execute(
            "INSERT INTO booking_add_ons (booking_id, add_on_id) VALUES (?1, ?2)",
            params![id, add_on_id],
        )?;
    }

    tx.commit()?;

    Ok(BookingRecord {
        id,
        service_id: new.service_id.clone(),
        stylist_id: new.stylist_id.clone(),
        date: new.date,
        time: new.time,
        duration: new.duration,
        add_on_ids: new.add_on_ids.clone(),
        client_name: new.client_name.clone(),
        client_email: new.client_email.clone(),
        client_phone: new.client_phone.clone(),
        notes: new.notes.clone(),
        marketing_consent: new.marketing_consent,
        created_at,
    })
}

/// Delete a booking and its add-on links. Unknown ids are an error so the
/// CLI can tell "cancelled" apart from "never existed".
pub fn delete_booking(conn: &Connection, id: &str) -> AppResult<()> {
    conn.execute("DELETE FROM booking_add_ons WHERE booking_id = ?1", [id])?;
    let deleted = conn.execute("DELETE FROM bookings WHERE id = ?1", [id])?;

    if deleted == 0 {
        return Err(AppError::UnknownBooking(id.to_string()));
    }

    Ok(())
}
