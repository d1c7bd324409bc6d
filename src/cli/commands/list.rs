use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::bookings::load_bookings;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::date::parse_date;
use crate::utils::format_duration;
use crate::utils::table::{Column, Table};

/// List bookings, optionally filtered by date and stylist.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date, stylist } = cmd {
        let bounds = match date {
            Some(d) => {
                let parsed =
                    parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
                Some((parsed, parsed))
            }
            None => None,
        };

        let pool = DbPool::new(&cfg.database)?;
        let bookings = load_bookings(&pool.conn, bounds, stylist.as_deref())?;

        if bookings.is_empty() {
            info("No bookings found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 36),
            Column::new("Date", 10),
            Column::new("Time", 5),
            Column::new("Stylist", 8),
            Column::new("Service", 18),
            Column::new("Duration", 9),
            Column::new("Client", 20),
            Column::new("Notes", 24),
        ]);

        for booking in &bookings {
            table.add_row(vec![
                booking.id.clone(),
                booking.date_str(),
                booking.time_str(),
                booking.stylist_id.clone(),
                booking.service_id.clone(),
                format_duration(booking.duration),
                booking.client_name.clone(),
                colorize_optional(booking.notes.as_deref().unwrap_or("--")),
            ]);
        }

        println!("{}", table.render());
        println!("{} bookings.", bookings.len());
    }

    Ok(())
}
