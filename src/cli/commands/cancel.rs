use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::bookings::delete_booking;
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Cancel a booking by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cancel { booking_id } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        delete_booking(&pool.conn, booking_id)?;
        write_log(&pool.conn, "cancel", booking_id, "Booking cancelled")?;

        success(format!("Booking {} cancelled.", booking_id));
    }

    Ok(())
}
