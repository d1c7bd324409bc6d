//! Catalog queries: services, add-ons, stylists and their weekly
//! schedules. One canonical row→domain mapping per entity; a malformed
//! row surfaces as an error instead of being defaulted away.

use crate::errors::{AppError, AppResult};
use crate::models::add_on::AddOn;
use crate::models::service::{Service, ServiceCategory};
use crate::models::stylist::{ScheduleBlock, ScheduleBreak, Stylist, StylistScheduleEntry};
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::BTreeMap;

/// Strict `"HH:MM"` column parse, carrying the column name in the error.
fn row_time(column: &str, text: &str) -> AppResult<NaiveTime> {
    parse_time(text).ok_or_else(|| AppError::InvalidTime(format!("{}: '{}'", column, text)))
}

/// JSON-array TEXT columns (`includes`, `recommended_for`).
fn row_string_list(column: &str, text: &str) -> AppResult<Vec<String>> {
    serde_json::from_str(text).map_err(|e| AppError::Mapping(format!("{}: {}", column, e)))
}

// ---------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------

fn map_service(row: &Row) -> rusqlite::Result<Service> {
    let category_str: String = row.get("category")?;
    let category = ServiceCategory::from_db_str(&category_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Mapping(format!(
                "Invalid category: {}",
                category_str
            ))),
        )
    })?;

    let includes_str: String = row.get("includes")?;
    let includes = row_string_list("includes", &includes_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Service {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        duration: row.get("duration_minutes")?,
        price_cents: row.get("price_cents")?,
        category,
        includes,
    })
}

pub fn load_services(conn: &Connection) -> AppResult<Vec<Service>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, duration_minutes, price_cents, category, includes
         FROM services ORDER BY name ASC",
    )?;

    let rows = stmt.query_map([], map_service)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_service(conn: &Connection, id: &str) -> AppResult<Service> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, duration_minutes, price_cents, category, includes
         FROM services WHERE id = ?1",
    )?;

    stmt.query_row([id], map_service)
        .optional()?
        .ok_or_else(|| AppError::UnknownService(id.to_string()))
}

// ---------------------------------------------------------------------
// Add-ons
// ---------------------------------------------------------------------

fn map_add_on(row: &Row) -> rusqlite::Result<AddOn> {
    let recommended_str: String = row.get("recommended_for")?;
    let recommended_for = row_string_list("recommended_for", &recommended_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(AddOn {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        duration: row.get("duration_minutes")?,
        price_cents: row.get("price_cents")?,
        recommended_for,
    })
}

pub fn load_add_ons(conn: &Connection) -> AppResult<Vec<AddOn>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, duration_minutes, price_cents, recommended_for
         FROM add_ons ORDER BY name ASC",
    )?;

    let rows = stmt.query_map([], map_add_on)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Resolve a list of add-on ids, rejecting unknowns and duplicates.
pub fn get_add_ons(conn: &Connection, ids: &[String]) -> AppResult<Vec<AddOn>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, description, duration_minutes, price_cents, recommended_for
         FROM add_ons WHERE id = ?1",
    )?;

    let mut out: Vec<AddOn> = Vec::with_capacity(ids.len());
    for id in ids {
        if out.iter().any(|a| &a.id == id) {
            return Err(AppError::InvalidClient(format!(
                "add-on '{}' selected twice",
                id
            )));
        }

        let add_on = stmt
            .query_row([id], map_add_on)
            .optional()?
            .ok_or_else(|| AppError::UnknownAddOn(id.to_string()))?;
        out.push(add_on);
    }

    Ok(out)
}

// ---------------------------------------------------------------------
// Stylists
// ---------------------------------------------------------------------

fn load_specialties(conn: &Connection, stylist_id: &str) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT service_id FROM stylist_specialties WHERE stylist_id = ?1 ORDER BY service_id",
    )?;

    let rows = stmt.query_map([stylist_id], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Aggregate schedule rows (one block per row, breaks per row) into at
/// most one validated entry per weekday.
fn load_schedule(conn: &Connection, stylist_id: &str) -> AppResult<Vec<StylistScheduleEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, day_of_week, block_start, block_end
         FROM stylist_schedules
         WHERE stylist_id = ?1
         ORDER BY day_of_week ASC, block_start ASC",
    )?;

    let rows = stmt.query_map([stylist_id], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
        ))
    })?;

    let mut break_stmt = conn.prepare(
        "SELECT break_start, break_end FROM stylist_schedule_breaks
         WHERE schedule_id = ?1 ORDER BY break_start ASC",
    )?;

    let mut days: BTreeMap<u8, StylistScheduleEntry> = BTreeMap::new();

    for r in rows {
        let (schedule_id, day_raw, start_str, end_str) = r?;

        let day = u8::try_from(day_raw)
            .ok()
            .filter(|d| *d <= 6)
            .ok_or_else(|| AppError::InvalidSchedule(format!("day_of_week {}", day_raw)))?;

        let block = ScheduleBlock {
            start: row_time("block_start", &start_str)?,
            end: row_time("block_end", &end_str)?,
        };

        let entry = days.entry(day).or_insert_with(|| StylistScheduleEntry {
            day,
            blocks: Vec::new(),
            breaks: Vec::new(),
        });
        entry.blocks.push(block);

        let break_rows = break_stmt.query_map(params![schedule_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        for br in break_rows {
            let (bs, be) = br?;
            entry.breaks.push(ScheduleBreak {
                start: row_time("break_start", &bs)?,
                end: row_time("break_end", &be)?,
            });
        }
    }

    let entries: Vec<StylistScheduleEntry> = days.into_values().collect();
    for entry in &entries {
        entry.validate()?;
    }

    Ok(entries)
}

pub fn load_stylists(conn: &Connection) -> AppResult<Vec<Stylist>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, title, bio, years_experience, rating
         FROM stylists ORDER BY name ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>("id")?,
            row.get::<_, String>("name")?,
            row.get::<_, String>("title")?,
            row.get::<_, String>("bio")?,
            row.get::<_, i32>("years_experience")?,
            row.get::<_, f64>("rating")?,
        ))
    })?;

    let mut raw = Vec::new();
    for r in rows {
        raw.push(r?);
    }

    let mut out = Vec::new();
    for (id, name, title, bio, years_experience, rating) in raw {
        out.push(Stylist {
            specialties: load_specialties(conn, &id)?,
            schedule: load_schedule(conn, &id)?,
            id,
            name,
            title,
            bio,
            years_experience,
            rating,
        });
    }

    Ok(out)
}

pub fn get_stylist(conn: &Connection, id: &str) -> AppResult<Stylist> {
    let mut stmt = conn.prepare(
        "SELECT id, name, title, bio, years_experience, rating
         FROM stylists WHERE id = ?1",
    )?;

    let row = stmt
        .query_row([id], |row| {
            Ok((
                row.get::<_, String>("name")?,
                row.get::<_, String>("title")?,
                row.get::<_, String>("bio")?,
                row.get::<_, i32>("years_experience")?,
                row.get::<_, f64>("rating")?,
            ))
        })
        .optional()?;

    let (name, title, bio, years_experience, rating) =
        row.ok_or_else(|| AppError::UnknownStylist(id.to_string()))?;

    Ok(Stylist {
        specialties: load_specialties(conn, id)?,
        schedule: load_schedule(conn, id)?,
        id: id.to_string(),
        name,
        title,
        bio,
        years_experience,
        rating,
    })
}
