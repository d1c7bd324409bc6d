use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::availability::generate_slots;
use crate::core::quote::build_quote;
use crate::core::schedule::schedule_for_date;
use crate::db::bookings::load_for_stylist_date;
use crate::db::catalog::{get_add_ons, get_service, get_stylist};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::date::{parse_date, weekday_name, weekday_number};
use crate::utils::time::format_time_display;
use crate::utils::{format_duration, format_price};
use chrono::Local;

/// Show bookable start times for a stylist, service and date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Slots {
        date,
        stylist,
        service,
        add_ons,
    } = cmd
    {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let pool = DbPool::new(&cfg.database)?;
        let service = get_service(&pool.conn, service)?;
        let add_ons = get_add_ons(&pool.conn, add_ons)?;
        let stylist = get_stylist(&pool.conn, stylist)?;

        if !stylist.offers(&service.id) {
            warning(format!(
                "{} does not list '{}' among their specialties.",
                stylist.name, service.id
            ));
        }

        let quote = build_quote(&service, &add_ons);

        let Some(schedule) = schedule_for_date(&stylist, day) else {
            info(format!(
                "{} does not work on {}s. No availability for {}.",
                stylist.name,
                weekday_name(weekday_number(day)),
                date
            ));
            return Ok(());
        };

        let existing = load_for_stylist_date(&pool.conn, &stylist.id, day)?;
        let now = Local::now().naive_local();
        let slots = generate_slots(schedule, day, quote.total_duration, &existing, now)?;

        println!(
            "{} with {} on {} — {} ({})",
            service.name,
            stylist.name,
            date,
            format_duration(quote.total_duration),
            format_price(quote.total_price_cents)
        );

        if slots.is_empty() {
            info("No availability this day. Try another date or stylist.");
            return Ok(());
        }

        for slot in &slots {
            println!("  {}  ({})", slot, format_time_display(day, slot)?);
        }

        println!("\n{} open slots.", slots.len());
    }

    Ok(())
}
