//! Schema migrations. All schema creation and upgrades go through here so
//! `init_db` and `db --migrate` share one code path. Versioning rides on
//! SQLite's `user_version` pragma.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const MIGRATIONS: &[(i64, &str)] = &[
    (
        1,
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id               TEXT PRIMARY KEY,
            name             TEXT NOT NULL,
            description      TEXT NOT NULL DEFAULT '',
            duration_minutes INTEGER NOT NULL,
            price_cents      INTEGER NOT NULL,
            category         TEXT NOT NULL CHECK(category IN ('cut','shave','beard','color','package')),
            includes         TEXT NOT NULL DEFAULT '[]'
        );

        CREATE TABLE IF NOT EXISTS add_ons (
            id               TEXT PRIMARY KEY,
            name             TEXT NOT NULL,
            description      TEXT NOT NULL DEFAULT '',
            duration_minutes INTEGER NOT NULL,
            price_cents      INTEGER NOT NULL,
            recommended_for  TEXT NOT NULL DEFAULT '[]'
        );

        CREATE TABLE IF NOT EXISTS stylists (
            id               TEXT PRIMARY KEY,
            name             TEXT NOT NULL,
            title            TEXT NOT NULL DEFAULT '',
            bio              TEXT NOT NULL DEFAULT '',
            years_experience INTEGER NOT NULL DEFAULT 0,
            rating           REAL NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS stylist_specialties (
            stylist_id TEXT NOT NULL REFERENCES stylists(id),
            service_id TEXT NOT NULL REFERENCES services(id),
            PRIMARY KEY (stylist_id, service_id)
        );

        CREATE TABLE IF NOT EXISTS stylist_schedules (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            stylist_id  TEXT NOT NULL REFERENCES stylists(id),
            day_of_week INTEGER NOT NULL CHECK(day_of_week BETWEEN 0 AND 6),
            block_start TEXT NOT NULL,
            block_end   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_schedules_stylist_day
            ON stylist_schedules(stylist_id, day_of_week);

        CREATE TABLE IF NOT EXISTS stylist_schedule_breaks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            schedule_id INTEGER NOT NULL REFERENCES stylist_schedules(id),
            break_start TEXT NOT NULL,
            break_end   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS bookings (
            id                TEXT PRIMARY KEY,
            service_id        TEXT NOT NULL REFERENCES services(id),
            stylist_id        TEXT NOT NULL REFERENCES stylists(id),
            appointment_date  TEXT NOT NULL,
            start_time        TEXT NOT NULL,
            duration_minutes  INTEGER NOT NULL,
            client_name       TEXT NOT NULL,
            client_email      TEXT NOT NULL,
            client_phone      TEXT NOT NULL,
            notes             TEXT,
            marketing_consent INTEGER NOT NULL DEFAULT 0,
            created_at        TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_bookings_stylist_date
            ON bookings(stylist_id, appointment_date);

        CREATE TABLE IF NOT EXISTS booking_add_ons (
            booking_id TEXT NOT NULL REFERENCES bookings(id),
            add_on_id  TEXT NOT NULL REFERENCES add_ons(id),
            PRIMARY KEY (booking_id, add_on_id)
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    ),
];

pub fn schema_version(conn: &Connection) -> AppResult<i64> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = schema_version(conn)?;

    for (version, sql) in MIGRATIONS {
        if *version <= current {
            continue;
        }

        conn.execute_batch(sql)
            .map_err(|e| AppError::Migration(format!("migration {} failed: {}", version, e)))?;
        conn.pragma_update(None, "user_version", version)?;
    }

    Ok(())
}
