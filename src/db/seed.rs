//! Demo catalog for a fresh install: the shop's service menu, add-ons and
//! three stylists with their weekly schedules. Idempotent — rows are
//! replaced by id, so re-running `seed` refreshes the catalog without
//! touching bookings.

use crate::errors::AppResult;
use rusqlite::{Connection, params};

struct ServiceRow(&'static str, &'static str, &'static str, i64, i64, &'static str, &'static str);

const SERVICES: &[ServiceRow] = &[
    ServiceRow(
        "signature-cut",
        "Signature Cut",
        "Precision haircut with consultation, wash and style",
        45,
        6500,
        "cut",
        r#"["Consultation","Shampoo & condition","Style finish"]"#,
    ),
    ServiceRow(
        "traditional-shave",
        "Traditional Shave",
        "Hot towel straight-razor shave",
        30,
        5500,
        "shave",
        r#"["Hot towel prep","Straight razor","Aftershave balm"]"#,
    ),
    ServiceRow(
        "cut-and-shave",
        "Cut & Shave",
        "Signature cut paired with a traditional shave",
        75,
        11000,
        "package",
        r#"["Consultation","Hot towel shave","Style finish"]"#,
    ),
    ServiceRow(
        "beard-sculpting",
        "Beard Sculpting",
        "Shape, trim and line-up with oil finish",
        30,
        4500,
        "beard",
        r#"["Shape consultation","Line-up","Beard oil"]"#,
    ),
    ServiceRow(
        "grey-blending",
        "Grey Blending",
        "Subtle colour work that keeps it natural",
        60,
        8500,
        "color",
        r#"["Colour consultation","Blend application","Rinse & style"]"#,
    ),
    ServiceRow(
        "executive-package",
        "Executive Package",
        "The full treatment: cut, shave, scalp massage and more",
        120,
        19500,
        "package",
        r#"["Signature cut","Traditional shave","Scalp massage","Express facial"]"#,
    ),
];

struct AddOnRow(&'static str, &'static str, &'static str, i64, i64, &'static str);

const ADD_ONS: &[AddOnRow] = &[
    AddOnRow(
        "scalp-massage",
        "Scalp Massage",
        "Relaxing finish to any appointment",
        15,
        2000,
        r#"["signature-cut","cut-and-shave"]"#,
    ),
    AddOnRow(
        "beard-oil-finish",
        "Beard Oil Finish",
        "Conditioning oil treatment and comb-through",
        10,
        1500,
        r#"["beard-sculpting","traditional-shave"]"#,
    ),
    AddOnRow(
        "express-facial",
        "Express Facial",
        "Cleanse and cold towel refresh",
        15,
        2500,
        r#"["signature-cut","grey-blending"]"#,
    ),
];

struct StylistRow(&'static str, &'static str, &'static str, &'static str, i32, f64);

const STYLISTS: &[StylistRow] = &[
    StylistRow(
        "leon",
        "Leon Chambers",
        "Master Barber",
        "Detail-focused veteran of the classic cut",
        12,
        4.9,
    ),
    StylistRow(
        "maya",
        "Maya Reyes",
        "Fade Specialist",
        "Sharp fades and modern texture work",
        7,
        4.8,
    ),
    StylistRow(
        "omar",
        "Omar Haddad",
        "Colour & Beard Expert",
        "Grey blending and beard architecture",
        9,
        4.7,
    ),
];

struct SpecialtyRow(&'static str, &'static str);

const SPECIALTIES: &[SpecialtyRow] = &[
    SpecialtyRow("leon", "signature-cut"),
    SpecialtyRow("leon", "cut-and-shave"),
    SpecialtyRow("leon", "traditional-shave"),
    SpecialtyRow("leon", "executive-package"),
    SpecialtyRow("maya", "signature-cut"),
    SpecialtyRow("maya", "cut-and-shave"),
    SpecialtyRow("omar", "beard-sculpting"),
    SpecialtyRow("omar", "grey-blending"),
    SpecialtyRow("omar", "traditional-shave"),
];

/// (stylist, day_of_week 0=Sun, block_start, block_end, breaks)
struct ScheduleRow(
    &'static str,
    i64,
    &'static str,
    &'static str,
    &'static [(&'static str, &'static str)],
);

const SCHEDULES: &[ScheduleRow] = &[
    // Leon: Tuesday..Saturday, lunch break on weekdays
    ScheduleRow("leon", 2, "09:00", "17:00", &[("12:00", "12:30")]),
    ScheduleRow("leon", 3, "09:00", "16:00", &[("12:00", "12:30")]),
    ScheduleRow("leon", 4, "09:00", "17:00", &[("12:00", "12:30")]),
    ScheduleRow("leon", 5, "09:00", "18:00", &[("13:00", "13:45")]),
    ScheduleRow("leon", 6, "10:00", "16:00", &[]),
    // Maya: Wednesday..Saturday, split Saturday
    ScheduleRow("maya", 3, "10:00", "18:00", &[("13:30", "14:00")]),
    ScheduleRow("maya", 4, "10:00", "18:00", &[("13:30", "14:00")]),
    ScheduleRow("maya", 5, "11:00", "19:00", &[]),
    ScheduleRow("maya", 6, "09:00", "12:00", &[]),
    ScheduleRow("maya", 6, "14:00", "18:00", &[]),
    // Omar: Sunday, Monday, Thursday, Friday
    ScheduleRow("omar", 0, "11:00", "16:00", &[]),
    ScheduleRow("omar", 1, "09:00", "17:00", &[("12:30", "13:00")]),
    ScheduleRow("omar", 4, "12:00", "20:00", &[("16:00", "16:30")]),
    ScheduleRow("omar", 5, "09:00", "15:00", &[]),
];

pub fn seed_catalog(conn: &Connection) -> AppResult<()> {
    // Upserts rather than REPLACE: catalog rows may already be referenced
    // by bookings, and REPLACE would delete the parent row under them.
    for ServiceRow(id, name, description, duration, price, category, includes) in SERVICES {
        conn.execute(
            "INSERT INTO services
                 (id, name, description, duration_minutes, price_cents, category, includes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO UPDATE SET
                 name = excluded.name,
                 description = excluded.description,
                 duration_minutes = excluded.duration_minutes,
                 price_cents = excluded.price_cents,
                 category = excluded.category,
                 includes = excluded.includes",
            params![id, name, description, duration, price, category, includes],
        )?;
    }

    for AddOnRow(id, name, description, duration, price, recommended) in ADD_ONS {
        conn.execute(
            "INSERT INTO add_ons
                 (id, name, description, duration_minutes, price_cents, recommended_for)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET
                 name = excluded.name,
                 description = excluded.description,
                 duration_minutes = excluded.duration_minutes,
                 price_cents = excluded.price_cents,
                 recommended_for = excluded.recommended_for",
            params![id, name, description, duration, price, recommended],
        )?;
    }

    for StylistRow(id, name, title, bio, years, rating) in STYLISTS {
        conn.execute(
            "INSERT INTO stylists
                 (id, name, title, bio, years_experience, rating)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET
                 name = excluded.name,
                 title = excluded.title,
                 bio = excluded.bio,
                 years_experience = excluded.years_experience,
                 rating = excluded.rating",
            params![id, name, title, bio, years, rating],
        )?;
    }

    conn.execute("DELETE FROM stylist_specialties", [])?;
    for SpecialtyRow(stylist_id, service_id) in SPECIALTIES {
        conn.execute(
            "INSERT INTO stylist_specialties (stylist_id, service_id) VALUES (?1, ?2)",
            params![stylist_id, service_id],
        )?;
    }

    conn.execute("DELETE FROM stylist_schedule_breaks", [])?;
    conn.execute("DELETE FROM stylist_schedules", [])?;
    for ScheduleRow(stylist_id, day, block_start, block_end, breaks) in SCHEDULES {
        conn.execute(
            "INSERT INTO stylist_schedules (stylist_id, day_of_week, block_start, block_end)
             VALUES (?1, ?2, ?3, ?4)",
            params![stylist_id, day, block_start, block_end],
        )?;
        let schedule_id = conn.last_insert_rowid();

        for (break_start, break_end) in *breaks {
            conn.execute(
                "INSERT INTO stylist_schedule_breaks (schedule_id, break_start, break_end)
                 VALUES (?1, ?2, ?3)",
                params![schedule_id, break_start, break_end],
            )?;
        }
    }

    Ok(())
}
